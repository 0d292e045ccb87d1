//! Train meshes: one unlit cube per `TrainState`, moved every frame to the
//! roster position.

use bevy::prelude::*;
use bevy::utils::HashMap;

use simulation::config::TRAIN_SIZE;
use simulation::train::{TrainId, TrainRoster};

#[derive(Component, Debug, Clone, Copy)]
pub struct TrainMesh(pub TrainId);

/// Direct map from train id to its mesh entity.
#[derive(Resource, Default)]
pub struct TrainHandles {
    entities: HashMap<TrainId, Entity>,
}

impl TrainHandles {
    pub fn get(&self, id: TrainId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    pub fn insert(&mut self, id: TrainId, entity: Entity) {
        self.entities.insert(id, entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

pub fn spawn_train_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    roster: Res<TrainRoster>,
    mut handles: ResMut<TrainHandles>,
) {
    let cube = meshes.add(Cuboid::from_length(TRAIN_SIZE));

    for train in roster.iter() {
        let material = materials.add(StandardMaterial {
            base_color: train.color().into(),
            unlit: true,
            ..default()
        });
        let entity = commands
            .spawn((
                TrainMesh(train.id()),
                Name::new(train.id().entity_name()),
                Mesh3d(cube.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(train.position()),
            ))
            .id();
        handles.insert(train.id(), entity);
    }
}

pub fn sync_train_transforms(
    roster: Res<TrainRoster>,
    handles: Res<TrainHandles>,
    mut trains: Query<&mut Transform, With<TrainMesh>>,
) {
    for train in roster.iter() {
        let Some(entity) = handles.get(train.id()) else {
            continue;
        };
        let Ok(mut transform) = trains.get_mut(entity) else {
            continue;
        };
        transform.translation = train.position();
    }
}
