use bevy::prelude::*;

pub mod camera_rig;
pub mod config;
pub mod controls;
pub mod focus;
pub mod palette;
pub mod sim_rng;
pub mod train;


pub mod test_harness;

use camera_rig::CameraRig;
use controls::ControlEvent;
use focus::FocusSelection;
use palette::TrainPalette;
use sim_rng::SimRng;
use train::TrainRoster;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Number of frames simulated so far.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

fn tick_counter(mut ticks: ResMut<TickCounter>) {
    ticks.0 += 1;
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // `init_resource` keeps a SimRng or TrainPalette inserted by the caller.
        app.init_resource::<SimRng>()
            .init_resource::<TickCounter>()
            .init_resource::<TrainPalette>()
            .init_resource::<TrainRoster>()
            .init_resource::<FocusSelection>()
            .init_resource::<CameraRig>()
            .add_event::<ControlEvent>()
            .add_systems(
                Startup,
                (palette::generate_palette, train::init_roster).chain(),
            )
            .add_systems(
                Update,
                (
                    controls::apply_control_events,
                    train::advance_trains,
                    camera_rig::update_camera_rig,
                    tick_counter,
                )
                    .chain(),
            );
    }
}
