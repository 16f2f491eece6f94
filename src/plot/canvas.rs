use image::{Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// An RGB pixel buffer with a data-coordinate view onto it.
///
/// Data coordinates map linearly onto the full pixel area, with the y axis
/// flipped so larger y values render higher up, as on a normal chart.
pub struct Canvas {
    img: RgbImage,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Canvas {
    /// Creates a white canvas whose pixel area spans the given data bounds.
    ///
    /// # Panics
    /// Panics on zero-sized dimensions or an empty data range.
    pub fn new(width: u32, height: u32, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Canvas {
        assert!(width > 0 && height > 0, "canvas dimensions must be non-zero");
        assert!(x_max > x_min && y_max > y_min, "data bounds must span a non-empty range");

        let mut img = RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = BACKGROUND;
        }

        Canvas { img, x_min, x_max, y_min, y_max }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Maps a data point to pixel coordinates (may fall outside the image).
    pub fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        let px = (x - self.x_min) / (self.x_max - self.x_min) * (self.img.width() - 1) as f64;
        let py = (self.y_max - y) / (self.y_max - self.y_min) * (self.img.height() - 1) as f64;
        (px.round() as i64, py.round() as i64)
    }

    /// Colors a single pixel; out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, px: i64, py: i64, color: Rgb<u8>) {
        if px >= 0 && py >= 0 && (px as u32) < self.img.width() && (py as u32) < self.img.height() {
            self.img.put_pixel(px as u32, py as u32, color);
        }
    }

    /// Draws a filled disc of `radius` pixels at a data point.
    pub fn point(&mut self, x: f64, y: f64, radius: i64, color: Rgb<u8>) {
        let (cx, cy) = self.to_pixel(x, y);
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Draws a straight segment between two data points (Bresenham).
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        let (mut px0, mut py0) = self.to_pixel(x0, y0);
        let (px1, py1) = self.to_pixel(x1, y1);

        let dx = (px1 - px0).abs();
        let dy = -(py1 - py0).abs();
        let sx = if px0 < px1 { 1 } else { -1 };
        let sy = if py0 < py1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(px0, py0, color);
            if px0 == px1 && py0 == py1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                px0 += sx;
            }
            if e2 <= dx {
                err += dx;
                py0 += sy;
            }
        }
    }

    /// Writes the canvas as a PNG file.
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        self.img.save(path)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
