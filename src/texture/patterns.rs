//! Pattern rules for each surface kind.
//!
//! Every rule draws its own pseudo-random placements, sizes, and opacities
//! from the injected generator, so two bodies with identical configuration
//! still get distinct surfaces. Geometric constants are authored for a
//! 512 px surface and scaled to the actual resolution.

use rand::Rng;

use super::raster::Raster;

/// Resolution the pattern constants were authored at.
const REFERENCE_SIZE: f32 = 512.0;

/// Rock shades asteroids pick their gradient from.
const ROCK_PALETTE: [[u8; 4]; 4] = [
    [139, 115, 85, 255],  // dusty brown
    [112, 106, 96, 255],  // warm grey
    [94, 80, 63, 255],    // dark umber
    [130, 122, 111, 255], // pale stone
];

fn scale_of(raster: &Raster) -> f32 {
    raster.size() as f32 / REFERENCE_SIZE
}

/// Cratered surface: base fill plus 50 translucent dark spots.
pub fn rocky(raster: &mut Raster, base: [u8; 4], rng: &mut impl Rng) {
    raster.fill(base);
    let size = raster.size() as f32;
    let scale = scale_of(raster);
    for _ in 0..50 {
        let cx = rng.random_range(0.0..size);
        let cy = rng.random_range(0.0..size);
        let radius = rng.random_range(5.0..25.0) * scale;
        let alpha = rng.random_range(40..110);
        raster.fill_circle(cx, cy, radius, [0, 0, 0, alpha]);
    }
}

/// Banded atmosphere: base fill plus horizontal translucent white bands at
/// regular intervals with randomized opacity.
pub fn gas(raster: &mut Raster, base: [u8; 4], rng: &mut impl Rng) {
    raster.fill(base);
    let size = raster.size() as f32;
    let scale = scale_of(raster);
    let interval = (20.0 * scale).max(1.0);
    let band_height = (8.0 * scale).max(1.0);
    let mut y = 0.0;
    while y < size {
        let alpha = rng.random_range(15..70);
        raster.fill_rect(0.0, y, size, band_height, [255, 255, 255, alpha]);
        y += interval;
    }
}

/// Fractured ice: base fill plus 30 random translucent crack segments.
pub fn ice(raster: &mut Raster, base: [u8; 4], rng: &mut impl Rng) {
    raster.fill(base);
    let size = raster.size() as f32;
    for _ in 0..30 {
        let x0 = rng.random_range(0.0..size);
        let y0 = rng.random_range(0.0..size);
        let x1 = rng.random_range(0.0..size);
        let y1 = rng.random_range(0.0..size);
        let alpha = rng.random_range(50..140);
        raster.stroke_line(x0, y0, x1, y1, [255, 255, 255, alpha]);
    }
}

/// Asteroid grain: radial gradient over a random rock shade, 50 craters
/// with rim highlights, 80 speckles.
pub fn asteroid(raster: &mut Raster, rng: &mut impl Rng) {
    let rock = ROCK_PALETTE[rng.random_range(0..ROCK_PALETTE.len())];
    let light = shade(rock, 1.35);
    let dark = shade(rock, 0.45);
    raster.fill_radial_gradient(light, dark);

    let size = raster.size() as f32;
    let scale = scale_of(raster);
    for _ in 0..50 {
        let cx = rng.random_range(0.0..size);
        let cy = rng.random_range(0.0..size);
        let radius = rng.random_range(2.0..14.0) * scale;
        // Rim highlight offset up-left, crater core stamped over it.
        let rim = shade(rock, 1.6);
        raster.fill_circle(cx - radius * 0.25, cy - radius * 0.25, radius, [rim[0], rim[1], rim[2], 90]);
        raster.fill_circle(cx, cy, radius * 0.85, [0, 0, 0, 100]);
    }
    for _ in 0..80 {
        let x = rng.random_range(0.0..size);
        let y = rng.random_range(0.0..size);
        let w = rng.random_range(1.0..4.0) * scale.max(0.5);
        let grain = shade(rock, rng.random_range(0.6..1.5));
        raster.fill_rect(x, y, w, w, [grain[0], grain[1], grain[2], 120]);
    }
}

/// Lighten (> 1.0) or darken (< 1.0) a color, keeping it opaque.
fn shade(color: [u8; 4], factor: f32) -> [u8; 4] {
    let mut out = [255u8; 4];
    for c in 0..3 {
        out[c] = (color[c] as f32 * factor).round().clamp(0.0, 255.0) as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const BASE: [u8; 4] = [80, 120, 200, 255];

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn average_brightness(raster: &Raster) -> f32 {
        let size = raster.size();
        let mut sum = 0.0;
        for y in 0..size {
            for x in 0..size {
                let px = raster.pixel(x, y);
                sum += (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0;
            }
        }
        sum / (size * size) as f32
    }

    #[test]
    fn rocky_darkens_the_base_fill() {
        let mut raster = Raster::new(64).unwrap();
        rocky(&mut raster, BASE, &mut rng());
        let flat = (BASE[0] as f32 + BASE[1] as f32 + BASE[2] as f32) / 3.0;
        assert!(average_brightness(&raster) < flat);
    }

    #[test]
    fn gas_brightens_the_base_fill() {
        let mut raster = Raster::new(64).unwrap();
        gas(&mut raster, BASE, &mut rng());
        let flat = (BASE[0] as f32 + BASE[1] as f32 + BASE[2] as f32) / 3.0;
        assert!(average_brightness(&raster) > flat);
    }

    #[test]
    fn ice_leaves_most_pixels_at_base() {
        let mut raster = Raster::new(64).unwrap();
        ice(&mut raster, BASE, &mut rng());
        let size = raster.size();
        let mut untouched = 0;
        for y in 0..size {
            for x in 0..size {
                if raster.pixel(x, y) == BASE {
                    untouched += 1;
                }
            }
        }
        // 30 one-pixel cracks cover a tiny fraction of a 64x64 surface.
        assert!(untouched as f32 / (size * size) as f32 > 0.5);
    }

    #[test]
    fn asteroid_surface_is_fully_opaque() {
        let mut raster = Raster::new(64).unwrap();
        asteroid(&mut raster, &mut rng());
        for y in 0..raster.size() {
            for x in 0..raster.size() {
                assert_eq!(raster.pixel(x, y)[3], 255);
            }
        }
    }

    #[test]
    fn identical_seeds_reproduce_identical_surfaces() {
        let mut a = Raster::new(32).unwrap();
        let mut b = Raster::new(32).unwrap();
        rocky(&mut a, BASE, &mut rng());
        rocky(&mut b, BASE, &mut rng());
        assert_eq!(a.into_bytes(), b.into_bytes());
    }

    #[test]
    fn distinct_seeds_produce_distinct_surfaces() {
        let mut a = Raster::new(32).unwrap();
        let mut b = Raster::new(32).unwrap();
        rocky(&mut a, BASE, &mut ChaCha8Rng::seed_from_u64(1));
        rocky(&mut b, BASE, &mut ChaCha8Rng::seed_from_u64(2));
        assert_ne!(a.into_bytes(), b.into_bytes());
    }
}
