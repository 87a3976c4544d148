/// Half-open pixel rectangle `[x_begin, x_end) x [y_begin, y_end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x_begin: u32,
    pub x_end: u32,
    pub y_begin: u32,
    pub y_end: u32,
}

impl Tile {
    pub fn width(&self) -> u32 {
        self.x_end - self.x_begin
    }

    pub fn height(&self) -> u32 {
        self.y_end - self.y_begin
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Pixel coordinates in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let (x_begin, x_end) = (self.x_begin, self.x_end);
        (self.y_begin..self.y_end).flat_map(move |y| (x_begin..x_end).map(move |x| (x, y)))
    }
}

pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Cover `[0, width) x [0, height)` with tiles of at most
/// `tile_width x tile_height`, row by row from the top left. Tiles on the
/// right and bottom edges are clipped to the image.
pub fn generate_tiles(width: u32, height: u32, tile_width: u32, tile_height: u32) -> Vec<Tile> {
    assert!(tile_width > 0 && tile_height > 0);
    let mut tiles = Vec::new();
    for y_begin in (0..height).step_by(tile_height as usize) {
        let y_end = (y_begin + tile_height).min(height);
        for x_begin in (0..width).step_by(tile_width as usize) {
            let x_end = (x_begin + tile_width).min(width);
            tiles.push(Tile {
                x_begin,
                x_end,
                y_begin,
                y_end,
            });
        }
    }
    tiles
}
