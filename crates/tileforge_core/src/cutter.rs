//! Slicing a tile-sheet image into tile-sized sub-images

use image::{imageops, RgbaImage};

/// Row-major cursor over a tile-sheet image.
///
/// Yields one tile-sized sub-image per [`next_tile`](TileCutter::next_tile)
/// call, advancing horizontally by `tile_width + spacing`, wrapping to the
/// next row when the next tile would exceed the sheet width, and ending once
/// the next row would exceed the sheet height. The sequence is not
/// restartable except through [`reset`](TileCutter::reset).
#[derive(Debug, Clone)]
pub struct TileCutter {
    sheet: RgbaImage,
    tile_width: u32,
    tile_height: u32,
    spacing: u32,
    margin: u32,
    next_x: u32,
    next_y: u32,
}

impl TileCutter {
    pub fn new(
        sheet: RgbaImage,
        tile_width: u32,
        tile_height: u32,
        spacing: u32,
        margin: u32,
    ) -> Self {
        Self {
            sheet,
            tile_width,
            tile_height,
            spacing,
            margin,
            next_x: margin,
            next_y: margin,
        }
    }

    /// The next tile image in row-major order, or `None` once the sheet is
    /// exhausted.
    pub fn next_tile(&mut self) -> Option<RgbaImage> {
        if self.next_x + self.tile_width > self.sheet.width() {
            self.next_x = self.margin;
            self.next_y += self.tile_height + self.spacing;
        }
        if self.next_y + self.tile_height > self.sheet.height() {
            return None;
        }

        let tile = imageops::crop_imm(
            &self.sheet,
            self.next_x,
            self.next_y,
            self.tile_width,
            self.tile_height,
        )
        .to_image();
        self.next_x += self.tile_width + self.spacing;
        Some(tile)
    }

    /// Rewind the cursor to the sheet origin.
    pub fn reset(&mut self) {
        self.next_x = self.margin;
        self.next_y = self.margin;
    }

    /// Number of tiles in one sheet row, derived from the sheet width.
    pub fn tiles_per_row(&self) -> u32 {
        (self.sheet.width() + self.spacing) / (self.tile_width + self.spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Sheet where every pixel encodes its own coordinates, so cut tiles can
    /// be told apart.
    fn coordinate_sheet(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    #[test]
    fn test_row_major_cut() {
        let mut cutter = TileCutter::new(coordinate_sheet(64, 32), 16, 16, 0, 0);

        let mut corners = Vec::new();
        while let Some(tile) = cutter.next_tile() {
            assert_eq!((tile.width(), tile.height()), (16, 16));
            let Rgba([x, y, _, _]) = *tile.get_pixel(0, 0);
            corners.push((x, y));
        }

        assert_eq!(
            corners,
            vec![
                (0, 0),
                (16, 0),
                (32, 0),
                (48, 0),
                (0, 16),
                (16, 16),
                (32, 16),
                (48, 16),
            ]
        );
        // Exhausted for good until reset
        assert!(cutter.next_tile().is_none());
        assert!(cutter.next_tile().is_none());
    }

    #[test]
    fn test_reset_repeats_sequence() {
        let mut cutter = TileCutter::new(coordinate_sheet(64, 32), 16, 16, 0, 0);

        let mut first: Vec<RgbaImage> = Vec::new();
        while let Some(tile) = cutter.next_tile() {
            first.push(tile);
        }
        assert_eq!(first.len(), 8);

        cutter.reset();
        let mut second: Vec<RgbaImage> = Vec::new();
        while let Some(tile) = cutter.next_tile() {
            second.push(tile);
        }

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.as_raw(), b.as_raw());
        }
    }

    #[test]
    fn test_spacing_and_margin() {
        // 2x2 tiles of 8px with 2px spacing and a 1px margin needs
        // 1 + 8 + 2 + 8 = 19px per axis.
        let mut cutter = TileCutter::new(coordinate_sheet(19, 19), 8, 8, 2, 1);

        let mut corners = Vec::new();
        while let Some(tile) = cutter.next_tile() {
            let Rgba([x, y, _, _]) = *tile.get_pixel(0, 0);
            corners.push((x, y));
        }
        assert_eq!(corners, vec![(1, 1), (11, 1), (1, 11), (11, 11)]);
    }

    #[test]
    fn test_tiles_per_row() {
        let cutter = TileCutter::new(RgbaImage::new(100, 40), 20, 20, 5, 0);
        assert_eq!(cutter.tiles_per_row(), 4);
    }
}
