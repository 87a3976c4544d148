use crate::tile::Tile;
use crate::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Linear radiance framebuffer, row-major.
#[derive(Clone, Debug)]
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

const GAMMA: f64 = 2.2;

/// Clamp to `[0, 1]`, gamma encode and quantize to `0..=255`.
pub fn component_to_int(x: f64) -> u8 {
    (x.max(0.0).min(1.0).powf(1.0 / GAMMA) * 255.0).round() as u8
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        let mut buf = Vec::new();
        buf.resize((w * h) as usize, RGB::black());
        Image { w, h, buf }
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[(y * self.w + x) as usize]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        &mut self.buf[(y * self.w + x) as usize]
    }

    pub fn plot(&mut self, x: u32, y: u32, color: RGB) {
        *self.at_mut(x, y) = color;
    }

    /// Copy a tile's pixels, given in the tile's row-major order.
    pub fn plot_tile(&mut self, tile: &Tile, pixels: &[RGB]) {
        debug_assert_eq!(tile.pixel_count(), pixels.len());
        for ((x, y), color) in tile.pixels().zip(pixels.iter()) {
            self.plot(x, y, *color);
        }
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    /// ASCII PPM (`P3`), every pixel written as `"r g b "`.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "P3\n{} {}\n{}\n", self.w, self.h, 255)?;
        for color in self.buf.iter() {
            write!(
                out,
                "{} {} {} ",
                component_to_int(color.r),
                component_to_int(color.g),
                component_to_int(color.b)
            )?;
        }
        Ok(())
    }

    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_encoding() {
        assert_eq!(component_to_int(0.0), 0);
        assert_eq!(component_to_int(-3.0), 0);
        assert_eq!(component_to_int(1.0), 255);
        assert_eq!(component_to_int(12.0), 255);
        assert_eq!(component_to_int(0.5), 186);
        assert_eq!(component_to_int(std::f64::NAN), 0);
    }

    #[test]
    fn ppm_layout() {
        let mut image = Image::new(2, 1);
        image.plot(0, 0, RGB::new(1.0, 0.0, 0.5));
        image.plot(1, 0, RGB::all(2.0));
        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3\n2 1\n255\n255 0 186 255 255 255 "
        );
    }

    #[test]
    fn plot_tile_is_row_major() {
        let mut image = Image::new(4, 4);
        let tile = Tile {
            x_begin: 1,
            x_end: 3,
            y_begin: 2,
            y_end: 4,
        };
        let pixels: Vec<_> = (0..4).map(|i| RGB::all(i as f64)).collect();
        image.plot_tile(&tile, &pixels);
        assert_eq!(*image.at(1, 2), RGB::all(0.0));
        assert_eq!(*image.at(2, 2), RGB::all(1.0));
        assert_eq!(*image.at(1, 3), RGB::all(2.0));
        assert_eq!(*image.at(2, 3), RGB::all(3.0));
        assert_eq!(*image.at(0, 0), RGB::black());
    }
}
