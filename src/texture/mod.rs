//! Procedural surface texture synthesis
//!
//! Textures are synthesized once per body at spawn time, outside the
//! per-frame path, and owned by that body for its whole life. Two bodies
//! never share a surface even when their configuration matches. If the
//! raster surface cannot be allocated the synthesizer degrades to a flat
//! fill of the base color instead of erroring.

use bevy::asset::RenderAssetUsages;
use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::Rng;

pub mod patterns;
pub mod raster;

pub use raster::Raster;

/// Pattern family for a planet-like surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Rocky,
    Gas,
    Ice,
}

/// Which rule-set generates a body's surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextureKind {
    Planet(SurfaceKind),
    Asteroid,
}

/// Run the pattern rules for `kind` on a fresh raster.
///
/// Falls back to a 1x1 flat fill of `base` when the surface cannot be
/// allocated; the result is uniform color, never an error.
pub fn synthesize_raster(
    kind: TextureKind,
    base: [u8; 4],
    resolution: u32,
    rng: &mut impl Rng,
) -> Raster {
    let Some(mut raster) = Raster::new(resolution) else {
        warn!(
            "raster surface unavailable at {}px, degrading to flat fill",
            resolution
        );
        return Raster::flat(base);
    };
    match kind {
        TextureKind::Planet(SurfaceKind::Rocky) => patterns::rocky(&mut raster, base, rng),
        TextureKind::Planet(SurfaceKind::Gas) => patterns::gas(&mut raster, base, rng),
        TextureKind::Planet(SurfaceKind::Ice) => patterns::ice(&mut raster, base, rng),
        TextureKind::Asteroid => patterns::asteroid(&mut raster, rng),
    }
    raster
}

/// Synthesize a body surface as a GPU image, wrapped for tiling on both
/// axes.
pub fn synthesize(
    kind: TextureKind,
    base: Srgba,
    resolution: u32,
    rng: &mut impl Rng,
) -> Image {
    let raster = synthesize_raster(kind, base.to_u8_array(), resolution, rng);
    let size = raster.size();
    let mut image = Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        raster.into_bytes(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..default()
    });
    image
}
