//! Scripted camera placement.
//!
//! Every tick the rig resolves a look-at target (the focused train, or the
//! origin), nudges the fixed `INITIAL_CAMERA_POSITION` toward it by
//! `CAMERA_LAG_FACTOR`, and places the camera at exactly `distance` from the
//! target along that direction. The rendering crate copies the result onto
//! the camera transform.
//!
//! The lerp is the only smoothing applied; there are no time-boxed tweens
//! running alongside it.

use bevy::prelude::*;

use crate::config::{
    CAMERA_LAG_FACTOR, INITIAL_CAMERA_POSITION, OVERVIEW_DISTANCE, ZOOM_IN_DISTANCE,
    ZOOM_OUT_FOCUSED_DISTANCE,
};
use crate::focus::FocusSelection;
use crate::train::TrainRoster;

/// Desired and computed camera state.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Desired distance from the target. One of the zoom presets.
    pub distance: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Camera position for the current tick.
    pub position: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            distance: OVERVIEW_DISTANCE,
            target: Vec3::ZERO,
            position: camera_placement(Vec3::ZERO, OVERVIEW_DISTANCE),
        }
    }
}

impl CameraRig {
    pub fn zoom_in(&mut self) {
        self.distance = ZOOM_IN_DISTANCE;
    }

    /// Back off further when tracking a train, otherwise return to the overview.
    pub fn zoom_out(&mut self, focused: bool) {
        self.distance = if focused {
            ZOOM_OUT_FOCUSED_DISTANCE
        } else {
            OVERVIEW_DISTANCE
        };
    }

    /// Aim at `target` and recompute the camera position.
    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
        self.position = camera_placement(target, self.distance);
    }
}

/// The focused train's current position, or the origin when nothing is
/// focused or the focused id has no train on the rail.
pub fn resolve_target(focus: &FocusSelection, roster: &TrainRoster) -> Vec3 {
    let Some(id) = focus.focused() else {
        return Vec3::ZERO;
    };
    match roster.position(id) {
        Some(position) => position,
        None => {
            debug!("No train for focused {}, targeting origin", id);
            Vec3::ZERO
        }
    }
}

/// Camera position at `distance` from `target`, in the direction of the
/// lagged base point.
pub fn camera_placement(target: Vec3, distance: f32) -> Vec3 {
    let base = INITIAL_CAMERA_POSITION.lerp(target, CAMERA_LAG_FACTOR);
    let direction = (base - target).try_normalize().unwrap_or(Vec3::Z);
    target + direction * distance
}

/// System: re-aim the rig after the trains have moved.
pub fn update_camera_rig(
    focus: Res<FocusSelection>,
    roster: Res<TrainRoster>,
    mut rig: ResMut<CameraRig>,
) {
    let target = resolve_target(&focus, &roster);
    rig.follow(target);
}
