//! Startup systems that turn the roster into ECS entities.
//!
//! Texture synthesis happens here, once per body, so the recurring frame
//! path never pays for it.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::quality::QualitySettings;
use crate::scene::components::{
    BodyCategory, Flight, LookAlongPath, Orbit, Spin, Sweep, Trail,
};
use crate::scene::roster::{
    AsteroidConfig, PlanetConfig, RocketConfig, Roster, ShootingStarConfig, build_roster,
};
use crate::texture::{self, TextureKind};

/// Randomness source for texture synthesis and star-field placement.
///
/// Seeded from OS entropy, so surfaces differ between runs; tests construct
/// their own fixed-seed generators instead.
#[derive(Resource)]
pub struct SceneRng(pub ChaCha8Rng);

impl Default for SceneRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_os_rng())
    }
}

/// Build and validate the roster for the active tier, then spawn every body.
pub fn spawn_scene(
    mut commands: Commands,
    settings: Res<QualitySettings>,
    mut rng: ResMut<SceneRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let roster = build_roster(settings.tier);
    if let Err(err) = roster.validate() {
        error!("scene roster rejected, nothing spawned: {err:#}");
        return;
    }

    spawn_star(&mut commands, &roster, &mut meshes, &mut materials);
    for config in &roster.planets {
        spawn_planet(
            &mut commands,
            config,
            &settings,
            &mut rng.0,
            &mut meshes,
            &mut materials,
            &mut images,
        );
    }
    for config in &roster.rockets {
        spawn_rocket(&mut commands, config, &mut meshes, &mut materials);
    }
    for config in &roster.asteroids {
        spawn_asteroid(
            &mut commands,
            config,
            &settings,
            &mut rng.0,
            &mut meshes,
            &mut materials,
            &mut images,
        );
    }
    for config in &roster.shooting_stars {
        spawn_shooting_star(&mut commands, config, &mut meshes, &mut materials);
    }

    info!(
        "spawned scene: {} star shells, {} planets, {} rockets, {} asteroids, {} shooting stars",
        roster.star_shells.len(),
        roster.planets.len(),
        roster.rockets.len(),
        roster.asteroids.len(),
        roster.shooting_stars.len(),
    );
}

fn spawn_star(
    commands: &mut Commands,
    roster: &Roster,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    for shell in &roster.star_shells {
        let translucent = shell.color.alpha < 1.0;
        let material = materials.add(StandardMaterial {
            base_color: shell.color.into(),
            emissive: LinearRgba::from(shell.color) * 6.0,
            unlit: true,
            alpha_mode: if translucent {
                AlphaMode::Blend
            } else {
                AlphaMode::Opaque
            },
            ..default()
        });
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(shell.radius).mesh().uv(48, 24))),
            MeshMaterial3d(material),
            Transform::from_xyz(0.0, 0.0, 0.0),
            BodyCategory::Star,
            Name::new(shell.name),
        ));
    }
    // The star is the scene's light source.
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 200.0,
            color: Color::srgb(1.0, 0.9, 0.7),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("starlight"),
    ));
}

fn spawn_planet(
    commands: &mut Commands,
    config: &PlanetConfig,
    settings: &QualitySettings,
    rng: &mut ChaCha8Rng,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
) {
    let surface = texture::synthesize(
        TextureKind::Planet(config.surface),
        config.color,
        settings.texture_resolution,
        rng,
    );
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(images.add(surface)),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(config.size).mesh().uv(48, 24))),
        MeshMaterial3d(material),
        Transform::from_translation(crate::trajectory::orbit_position(&config.orbit, 0.0)),
        BodyCategory::Planet,
        Orbit(config.orbit.clone()),
        Spin(config.spin_speed),
        Name::new(config.name),
    ));
}

fn spawn_rocket(
    commands: &mut Commands,
    config: &RocketConfig,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(StandardMaterial {
        base_color: config.color.into(),
        emissive: LinearRgba::from(config.color) * 2.0,
        metallic: 0.6,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Cone::new(config.size * 0.5, config.size * 2.0))),
        MeshMaterial3d(material),
        Transform::from_translation(crate::trajectory::sweep_position(&config.sweep, 0.0)),
        BodyCategory::Rocket,
        Sweep(config.sweep.clone()),
        LookAlongPath,
        Trail::new(config.trail_len, config.color.into()),
        Name::new(config.name),
    ));
}

fn spawn_asteroid(
    commands: &mut Commands,
    config: &AsteroidConfig,
    settings: &QualitySettings,
    rng: &mut ChaCha8Rng,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
) {
    let surface = texture::synthesize(
        TextureKind::Asteroid,
        config.trail_color,
        settings.texture_resolution,
        rng,
    );
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(images.add(surface)),
        perceptual_roughness: 1.0,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(config.size).mesh().ico(2).unwrap())),
        MeshMaterial3d(material),
        Transform::from_translation(crate::trajectory::sweep_position(&config.sweep, 0.0)),
        BodyCategory::Asteroid,
        Sweep(config.sweep.clone()),
        Spin(1.4),
        Trail::new(config.trail_len, config.trail_color.into()),
        Name::new(config.name),
    ));
}

fn spawn_shooting_star(
    commands: &mut Commands,
    config: &ShootingStarConfig,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(StandardMaterial {
        base_color: config.color.into(),
        emissive: LinearRgba::from(config.color) * 12.0,
        unlit: true,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.25).mesh().ico(2).unwrap())),
        MeshMaterial3d(material),
        Transform::from_translation(config.flight.start),
        // Hidden until the first flight window opens.
        Visibility::Hidden,
        BodyCategory::ShootingStar,
        Flight(config.flight.clone()),
        Trail::new(config.trail_len, config.color.into()),
        Name::new(config.name),
    ));
}
