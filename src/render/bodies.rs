//! Spawning of the central body, the satellites and the light.

use bevy::prelude::*;

use crate::scene::SceneConfig;
use crate::types::BodyId;

/// Links a mesh entity to the registry body it displays.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyVisual {
    pub id: BodyId,
}

/// Marker for the central body mesh.
#[derive(Component)]
pub struct CentralBody;

/// Plugin spawning the scene meshes at startup.
pub struct SceneSpawnPlugin;

impl Plugin for SceneSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene);
    }
}

/// Spawn the central body, its light and one mesh per satellite.
fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    // Central body glows and ignores lighting
    let central_color = config.central_color();
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(config.central_radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: central_color,
            emissive: central_color.to_linear() * 2.0,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        CentralBody,
    ));

    commands.spawn((
        PointLight {
            intensity: config.light_intensity,
            range: config.camera.far,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    // Transforms are overwritten by the first simulation frame
    for (index, spec) in config.bodies.iter().enumerate() {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(spec.radius as f32))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: spec.color(),
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_xyz(spec.orbit_radius as f32, 0.0, 0.0),
            BodyVisual { id: BodyId(index) },
        ));
    }

    info!("Spawned {} bodies around the central body", config.bodies.len());
}
