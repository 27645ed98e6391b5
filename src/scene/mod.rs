//! Scene composition and per-frame scheduling
//!
//! The roster module declares which bodies exist per quality tier, spawn
//! systems build them once at startup, and the update systems advance every
//! live body each display frame.

use bevy::prelude::*;

pub mod components;
pub mod roster;
pub mod spawn;
pub mod systems;

pub use components::{BodyCategory, Trail};
pub use roster::{Roster, build_roster};
pub use spawn::SceneRng;
pub use systems::TrailRenderConfig;

/// Plugin owning the body roster and the frame scheduler.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneRng>()
            .init_resource::<TrailRenderConfig>()
            .add_systems(Startup, spawn::spawn_scene)
            .add_systems(
                Update,
                (
                    systems::advance_orbits,
                    systems::spin_bodies.after(systems::advance_orbits),
                    systems::advance_sweeps,
                    systems::advance_shooting_stars,
                    systems::draw_trails
                        .after(systems::advance_sweeps)
                        .after(systems::advance_shooting_stars),
                ),
            );
    }
}
