//! Background star-field point layers.
//!
//! Each layer is one point-list mesh baked at startup; the number and size
//! of layers comes from the quality settings. Star positions are drawn from
//! the shared scene RNG, uniformly over a spherical shell far outside the
//! body roster.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::mesh::PrimitiveTopology;
use rand::Rng;
use std::f32::consts::TAU;

use crate::quality::QualitySettings;
use crate::scene::SceneRng;

/// Inner radius of the star shell, outside every trajectory.
const SHELL_INNER_RADIUS: f32 = 150.0;
/// Outer radius of the star shell, inside the camera far plane.
const SHELL_OUTER_RADIUS: f32 = 260.0;

/// Marker for one background star layer.
#[derive(Component)]
pub struct StarfieldLayer;

/// Plugin spawning the background star layers at startup.
pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_starfields);
    }
}

/// Bake a point-list mesh of `count` stars on the background shell.
pub fn build_starfield_mesh(count: u32, rng: &mut impl Rng) -> Mesh {
    let mut positions = Vec::with_capacity(count as usize);
    let mut colors = Vec::with_capacity(count as usize);
    for _ in 0..count {
        // Uniform direction on the unit sphere, then a radius in the shell.
        let z: f32 = rng.random_range(-1.0..1.0);
        let theta: f32 = rng.random_range(0.0..TAU);
        let planar = (1.0 - z * z).sqrt();
        let dir = Vec3::new(planar * theta.cos(), z, planar * theta.sin());
        let radius = rng.random_range(SHELL_INNER_RADIUS..SHELL_OUTER_RADIUS);
        positions.push((dir * radius).to_array());

        let warmth: f32 = rng.random_range(0.0..1.0);
        let brightness: f32 = rng.random_range(0.4..1.0);
        colors.push([
            brightness,
            brightness * (0.85 + 0.15 * warmth),
            brightness * (0.8 + 0.2 * (1.0 - warmth)),
            1.0,
        ]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh
}

/// System that spawns one entity per configured star layer.
pub fn spawn_starfields(
    mut commands: Commands,
    settings: Res<QualitySettings>,
    mut rng: ResMut<SceneRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });
    for (index, &count) in settings.starfield_layers.iter().enumerate() {
        let mesh = build_starfield_mesh(count, &mut rng.0);
        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material.clone()),
            Transform::default(),
            StarfieldLayer,
            Name::new(format!("starfield layer {index}")),
        ));
    }
    info!(
        "spawned {} starfield layer(s) for {:?} tier",
        settings.starfield_layers.len(),
        settings.tier
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::mesh::VertexAttributeValues;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn positions(mesh: &Mesh) -> &Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => values,
            other => panic!("unexpected position attribute: {other:?}"),
        }
    }

    #[test]
    fn mesh_holds_exactly_the_requested_points() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mesh = build_starfield_mesh(500, &mut rng);
        assert_eq!(positions(&mesh).len(), 500);
    }

    #[test]
    fn every_star_sits_in_the_background_shell() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mesh = build_starfield_mesh(200, &mut rng);
        for p in positions(&mesh) {
            let r = Vec3::from_array(*p).length();
            assert!(
                (SHELL_INNER_RADIUS..SHELL_OUTER_RADIUS).contains(&r),
                "star at radius {r}"
            );
        }
    }
}
