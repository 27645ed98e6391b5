//! Components for the animated bodies.

use bevy::prelude::*;

use crate::trail::TrailBuffer;
use crate::trajectory::{FlightParams, OrbitParams, SweepParams};

/// What a body is; drives both its trajectory rules and its surface rules.
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BodyCategory {
    Star,
    Planet,
    Rocket,
    Asteroid,
    ShootingStar,
}

/// Circular-orbit motion around the scene origin.
#[derive(Component)]
pub struct Orbit(pub OrbitParams);

/// Axial self-rotation, radians per second.
#[derive(Component)]
pub struct Spin(pub f32);

/// Lissajous-like sweep through the scene volume.
#[derive(Component)]
pub struct Sweep(pub SweepParams);

/// Bodies oriented nose-first along their sweep.
#[derive(Component)]
pub struct LookAlongPath;

/// Dash-then-rest flight cycle for shooting stars.
#[derive(Component)]
pub struct Flight(pub FlightParams);

/// Motion-trail history, owned by exactly one body.
#[derive(Component)]
pub struct Trail {
    pub buffer: TrailBuffer,
    pub color: Color,
}

impl Trail {
    pub fn new(max_len: usize, color: Color) -> Self {
        Self {
            buffer: TrailBuffer::new(max_len),
            color,
        }
    }
}
