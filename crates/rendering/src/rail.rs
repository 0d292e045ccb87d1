use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use simulation::config::{
    ORBIT_RADIUS, RAIL_RING_SEGMENTS, RAIL_TUBE_RADIUS, RAIL_TUBE_SEGMENTS,
};

const RAIL_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);

/// Marker for the static rail mesh.
#[derive(Component)]
pub struct Rail;

/// Build the torus the trains ride on.
///
/// Bevy's torus wraps around the Y axis; it is tipped onto the XY plane so
/// it lines up with `simulation::train::orbit_position`.
pub fn rail_mesh() -> Mesh {
    Torus {
        minor_radius: RAIL_TUBE_RADIUS,
        major_radius: ORBIT_RADIUS,
    }
    .mesh()
    .minor_resolution(RAIL_TUBE_SEGMENTS)
    .major_resolution(RAIL_RING_SEGMENTS)
    .build()
}

pub fn spawn_rail(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Rail,
        Name::new("rail"),
        Mesh3d(meshes.add(rail_mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: RAIL_COLOR,
            unlit: true,
            ..default()
        })),
        Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
    ));
}
