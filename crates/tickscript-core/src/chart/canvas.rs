use image::{Rgb, RgbImage};

use super::glyphs;

/// Thin drawing layer over an RGB raster; everything is clipped to the image.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    pub fn fill_rect(&mut self, left: i64, top: i64, right: i64, bottom: i64, color: Rgb<u8>) {
        for y in top..=bottom {
            for x in left..=right {
                self.put(x, y, color);
            }
        }
    }

    /// Bresenham line, `width` pixels thick (extra pixels go below/right).
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), width: i64, color: Rgb<u8>) {
        let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let step_x = if x0 < x1 { 1 } else { -1 };
        let step_y = if y0 < y1 { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            for offset in 0..width.max(1) {
                if dx >= -dy {
                    self.put(x0, y0 + offset, color);
                } else {
                    self.put(x0 + offset, y0, color);
                }
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x0 += step_x;
            }
            if doubled <= dx {
                error += dx;
                y0 += step_y;
            }
        }
    }

    /// Draw `text` with its top-left corner at `origin`, rotated by `angle` radians
    /// (positive turns the baseline counter-clockwise on screen).
    pub fn text(&mut self, text: &str, origin: (f64, f64), angle: f64, scale: usize, color: Rgb<u8>) {
        let (sin, cos) = angle.sin_cos();
        for (column, row) in glyphs::text_pixels(text) {
            for sub_y in 0..scale {
                for sub_x in 0..scale {
                    let x = (column * scale + sub_x) as f64;
                    let y = (row * scale + sub_y) as f64;
                    let screen_x = origin.0 + x * cos + y * sin;
                    let screen_y = origin.1 - x * sin + y * cos;
                    self.put(screen_x.round() as i64, screen_y.round() as i64, color);
                }
            }
        }
    }
}
