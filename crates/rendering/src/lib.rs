use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod rail;
pub mod screenshot;
pub mod train_render;

use camera::CameraOrbitDrag;
use train_render::TrainHandles;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrainHandles>()
            .init_resource::<CameraOrbitDrag>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    rail::spawn_rail,
                    train_render::spawn_train_meshes,
                )
                    .chain()
                    .after(simulation::train::init_roster),
            )
            .add_systems(
                Update,
                train_render::sync_train_transforms.after(simulation::train::advance_trains),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::apply_camera_rig,
                )
                    .chain()
                    .after(simulation::camera_rig::update_camera_rig),
            );

        app.add_plugins(screenshot::ScreenshotPlugin);
    }
}
