use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod quality;
mod scene;
mod starfield;
mod texture;
mod trail;
mod trajectory;

use quality::{QualityPlugin, QualitySettings};
use scene::ScenePlugin;
use starfield::StarfieldPlugin;

/// Marker for the scene camera.
#[derive(Component)]
pub struct MainCamera;

// Camera and ambient lighting; the scene bodies come from ScenePlugin.
pub fn setup(mut commands: Commands, settings: Res<QualitySettings>) {
    // Keep the dark side of planets readable against the black backdrop.
    commands.insert_resource(GlobalAmbientLight {
        brightness: 60.0,
        ..default()
    });

    let initial_distance = 95.0;

    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(initial_distance),
        yaw: Some(0.0),
        pitch: Some(0.3),
        force_update: true,
        ..default()
    };

    let msaa = if settings.antialiasing {
        Msaa::Sample4
    } else {
        Msaa::Off
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: 0.1,
            far: 400.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        msaa,
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 28.0, initial_distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Starscape".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(QualityPlugin);
    app.add_plugins(ScenePlugin);
    app.add_plugins(StarfieldPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
