//! Device capability classification
//!
//! The scene is tiered once at startup from the viewport width and never
//! re-evaluated on resize. Everything richness-related (anti-aliasing,
//! pixel-ratio clamping, star shells, star-field density, roster sizes,
//! texture resolution) hangs off the resulting settings resource.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use serde::{Deserialize, Serialize};

/// Viewport widths below this are treated as constrained devices.
pub const MOBILE_WIDTH_THRESHOLD_PX: f32 = 768.0;

/// Quality preset decided once when the scene mounts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityTier {
    Mobile,
    Desktop,
}

/// Classify a viewport width into a quality tier.
pub fn classify(viewport_width_px: f32) -> QualityTier {
    if viewport_width_px < MOBILE_WIDTH_THRESHOLD_PX {
        QualityTier::Mobile
    } else {
        QualityTier::Desktop
    }
}

/// Render-side knobs derived from the quality tier, fixed for the scene's
/// lifetime.
#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
pub struct QualitySettings {
    pub tier: QualityTier,
    /// Whether the main camera runs with multisampling.
    pub antialiasing: bool,
    /// Device pixel ratio is clamped into this range before rendering.
    pub pixel_ratio_min: f32,
    pub pixel_ratio_max: f32,
    /// Point counts for each background star-field layer.
    pub starfield_layers: Vec<u32>,
    /// Side length of synthesized body textures, in pixels.
    pub texture_resolution: u32,
}

impl QualitySettings {
    pub fn for_tier(tier: QualityTier) -> Self {
        match tier {
            QualityTier::Mobile => Self {
                tier,
                antialiasing: false,
                pixel_ratio_min: 1.0,
                pixel_ratio_max: 1.5,
                starfield_layers: vec![5_000],
                texture_resolution: 256,
            },
            QualityTier::Desktop => Self {
                tier,
                antialiasing: true,
                pixel_ratio_min: 1.0,
                pixel_ratio_max: 2.0,
                starfield_layers: vec![15_000, 5_000],
                texture_resolution: 512,
            },
        }
    }

    pub fn clamp_pixel_ratio(&self, ratio: f32) -> f32 {
        ratio.clamp(self.pixel_ratio_min, self.pixel_ratio_max)
    }
}

/// Plugin that decides the quality tier before anything else spawns.
pub struct QualityPlugin;

impl Plugin for QualityPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, configure_quality);
    }
}

/// System that classifies the primary window once and inserts the settings
/// resource. A missing window (headless) defaults to desktop.
pub fn configure_quality(
    mut commands: Commands,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let settings = match windows.single_mut() {
        Ok(mut window) => {
            let settings = QualitySettings::for_tier(classify(window.width()));
            let ratio = window.resolution.scale_factor();
            let clamped = settings.clamp_pixel_ratio(ratio);
            if (clamped - ratio).abs() > f32::EPSILON {
                window.resolution.set_scale_factor_override(Some(clamped));
            }
            settings
        }
        Err(_) => QualitySettings::for_tier(QualityTier::Desktop),
    };
    info!("Scene quality tier: {:?}", settings.tier);
    commands.insert_resource(settings);
}
