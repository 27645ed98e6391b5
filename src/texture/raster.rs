//! CPU-side RGBA raster with the small set of painters the pattern rules
//! need. Coordinates are in pixels; drawing outside the surface is clipped.

/// Surfaces larger than this are refused rather than allocated.
const MAX_RASTER_SIZE: u32 = 8192;

/// Square RGBA8 pixel surface.
#[derive(Clone, Debug)]
pub struct Raster {
    size: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Allocate a square surface. `None` for degenerate or oversized
    /// dimensions; callers fall back to a flat fill.
    pub fn new(size: u32) -> Option<Self> {
        if size == 0 || size > MAX_RASTER_SIZE {
            return None;
        }
        Some(Self {
            size,
            data: vec![0; (size as usize) * (size as usize) * 4],
        })
    }

    /// A 1x1 surface of a single color, the degraded-mode output.
    pub fn flat(color: [u8; 4]) -> Self {
        Self {
            size: 1,
            data: color.to_vec(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.size + x) * 4) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Opaque fill of the whole surface.
    pub fn fill(&mut self, color: [u8; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Source-over blend of one pixel; out-of-bounds writes are dropped.
    fn blend_pixel(&mut self, x: i64, y: i64, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.size as i64 || y >= self.size as i64 {
            return;
        }
        let i = ((y as usize) * (self.size as usize) + (x as usize)) * 4;
        let alpha = color[3] as f32 / 255.0;
        for c in 0..3 {
            let src = color[c] as f32;
            let dst = self.data[i + c] as f32;
            self.data[i + c] = (src * alpha + dst * (1.0 - alpha)).round() as u8;
        }
        self.data[i + 3] = 255;
    }

    /// Blend a filled circle.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: [u8; 4]) {
        let r2 = radius * radius;
        let x_min = (cx - radius).floor() as i64;
        let x_max = (cx + radius).ceil() as i64;
        let y_min = (cy - radius).floor() as i64;
        let y_max = (cy + radius).ceil() as i64;
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Blend an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 4]) {
        for py in y.floor() as i64..(y + h).ceil() as i64 {
            for px in x.floor() as i64..(x + w).ceil() as i64 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Blend a one-pixel-wide line segment, sampled along its length.
    pub fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: [u8; 4]) {
        let steps = ((x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize).max(1);
        let mut last = (i64::MIN, i64::MIN);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = (x0 + (x1 - x0) * t).round() as i64;
            let y = (y0 + (y1 - y0) * t).round() as i64;
            if (x, y) != last {
                self.blend_pixel(x, y, color);
                last = (x, y);
            }
        }
    }

    /// Opaque radial gradient from `inner` at the center to `outer` at the
    /// corners.
    pub fn fill_radial_gradient(&mut self, inner: [u8; 4], outer: [u8; 4]) {
        let center = self.size as f32 / 2.0;
        let max_dist = center * std::f32::consts::SQRT_2;
        for y in 0..self.size {
            for x in 0..self.size {
                let dx = x as f32 + 0.5 - center;
                let dy = y as f32 + 0.5 - center;
                let t = (dx * dx + dy * dy).sqrt() / max_dist;
                let i = ((y * self.size + x) * 4) as usize;
                for c in 0..4 {
                    let a = inner[c] as f32;
                    let b = outer[c] as f32;
                    self.data[i + c] = (a + (b - a) * t).round() as u8;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_sizes_are_refused() {
        assert!(Raster::new(0).is_none());
        assert!(Raster::new(MAX_RASTER_SIZE + 1).is_none());
        assert!(Raster::new(64).is_some());
    }

    #[test]
    fn flat_is_one_uniform_pixel() {
        let raster = Raster::flat([10, 20, 30, 255]);
        assert_eq!(raster.size(), 1);
        assert_eq!(raster.pixel(0, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut raster = Raster::new(8).unwrap();
        raster.fill([200, 100, 50, 255]);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(raster.pixel(x, y), [200, 100, 50, 255]);
            }
        }
    }

    #[test]
    fn circle_darkens_center_not_corners() {
        let mut raster = Raster::new(32).unwrap();
        raster.fill([200, 200, 200, 255]);
        raster.fill_circle(16.0, 16.0, 6.0, [0, 0, 0, 128]);
        assert!(raster.pixel(16, 16)[0] < 200);
        assert_eq!(raster.pixel(0, 0)[0], 200);
    }

    #[test]
    fn out_of_bounds_drawing_is_clipped() {
        let mut raster = Raster::new(16).unwrap();
        raster.fill([50, 50, 50, 255]);
        raster.fill_circle(-10.0, -10.0, 8.0, [255, 255, 255, 255]);
        raster.stroke_line(-50.0, 8.0, 100.0, 8.0, [255, 255, 255, 255]);
        // The line crosses the surface; the circle never touches it.
        assert_eq!(raster.pixel(0, 0), [50, 50, 50, 255]);
        assert_eq!(raster.pixel(8, 8)[0], 255);
    }

    #[test]
    fn gradient_runs_light_to_dark() {
        let mut raster = Raster::new(64).unwrap();
        raster.fill_radial_gradient([240, 240, 240, 255], [20, 20, 20, 255]);
        let center = raster.pixel(32, 32);
        let corner = raster.pixel(0, 0);
        assert!(center[0] > corner[0]);
    }
}
