//! Per-frame scheduling: trajectory advance, trail maintenance, drawing.
//!
//! All movement is driven by `Time::elapsed_secs()`. A body whose trajectory
//! sample comes back non-finite is skipped for the frame with a warning so
//! that one bad entity cannot freeze the rest of the scene.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::scene::components::{BodyCategory, Flight, LookAlongPath, Orbit, Spin, Sweep, Trail};
use crate::trajectory::{flight_sample, orbit_position, spin_rotation, sweep_look_target, sweep_position};

/// Global trail rendering configuration.
#[derive(Resource, Debug)]
pub struct TrailRenderConfig {
    pub enabled: bool,
    /// Alpha of the oldest visible segment; newer segments fade up from it.
    pub min_alpha: f32,
}

impl Default for TrailRenderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_alpha: 0.05,
        }
    }
}

/// Advance planets along their orbits.
pub fn advance_orbits(
    time: Res<Time>,
    mut bodies: Query<(&Orbit, &mut Transform, &Name)>,
) {
    let elapsed = time.elapsed_secs();
    for (orbit, mut transform, name) in bodies.iter_mut() {
        let position = orbit_position(&orbit.0, elapsed);
        if !position.is_finite() {
            warn!("skipping {name}: orbit produced a non-finite position");
            continue;
        }
        transform.translation = position;
    }
}

/// Apply axial self-rotation to spinning bodies.
pub fn spin_bodies(time: Res<Time>, mut bodies: Query<(&Spin, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (spin, mut transform) in bodies.iter_mut() {
        transform.rotation = spin_rotation(spin.0, elapsed);
    }
}

/// Advance rockets and asteroids along their sweeps and extend their trails.
pub fn advance_sweeps(
    time: Res<Time>,
    mut bodies: Query<(
        &Sweep,
        &mut Transform,
        Option<&mut Trail>,
        Has<LookAlongPath>,
        &Name,
    )>,
) {
    let elapsed = time.elapsed_secs();
    for (sweep, mut transform, trail, nose_first, name) in bodies.iter_mut() {
        let position = sweep_position(&sweep.0, elapsed);
        if !position.is_finite() {
            warn!("skipping {name}: sweep produced a non-finite position");
            continue;
        }
        transform.translation = position;
        if nose_first {
            let target = sweep_look_target(&sweep.0, elapsed);
            transform.look_at(target, Vec3::Y);
            // Cone meshes point +Y; pitch the nose onto the flight path.
            transform.rotate_local_x(-FRAC_PI_2);
        }
        if let Some(mut trail) = trail {
            trail.buffer.push(position);
        }
    }
}

/// Advance shooting stars, gating visibility to the flight window and
/// resting the trail in between.
pub fn advance_shooting_stars(
    time: Res<Time>,
    mut bodies: Query<(&Flight, &mut Transform, &mut Visibility, &mut Trail, &Name)>,
) {
    let elapsed = time.elapsed_secs();
    for (flight, mut transform, mut visibility, mut trail, name) in bodies.iter_mut() {
        match flight_sample(&flight.0, elapsed) {
            Some(position) => {
                if !position.is_finite() {
                    warn!("skipping {name}: flight produced a non-finite position");
                    continue;
                }
                transform.translation = position;
                *visibility = Visibility::Visible;
                trail.buffer.push(position);
            }
            None => {
                *visibility = Visibility::Hidden;
                trail.buffer.clear();
            }
        }
    }
}

/// Rebuild and draw every trail polyline, fading toward the oldest point.
pub fn draw_trails(
    config: Res<TrailRenderConfig>,
    trails: Query<(&Trail, &BodyCategory)>,
    mut gizmos: Gizmos,
) {
    if !config.enabled {
        return;
    }
    for (trail, category) in trails.iter() {
        let count = trail.buffer.len();
        if count < 2 {
            continue;
        }
        // Shooting-star dashes stay bright along their whole length.
        let floor = match category {
            BodyCategory::ShootingStar => 0.4,
            _ => config.min_alpha,
        };
        let base = trail.color.to_srgba();
        for (i, (from, to)) in trail.buffer.segments().enumerate() {
            let age = (i + 1) as f32 / count as f32;
            let alpha = floor + (1.0 - floor) * age;
            gizmos.line(
                from,
                to,
                Color::srgba(base.red, base.green, base.blue, alpha * base.alpha),
            );
        }
    }
}
