//! Control messages sent by the button panel.

use bevy::prelude::*;

use crate::camera_rig::CameraRig;
use crate::focus::FocusSelection;
use crate::train::TrainId;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    ZoomIn,
    ZoomOut,
    ResetView,
    FocusTrain(TrainId),
}

/// Apply a single control message to the focus and camera state.
pub fn apply_control(event: ControlEvent, focus: &mut FocusSelection, rig: &mut CameraRig) {
    match event {
        ControlEvent::ZoomIn => rig.zoom_in(),
        ControlEvent::ZoomOut => rig.zoom_out(focus.is_focused()),
        ControlEvent::ResetView => focus.clear(),
        ControlEvent::FocusTrain(id) => focus.set(id),
    }
}

/// System: drain control messages in the order they were sent.
pub fn apply_control_events(
    mut events: EventReader<ControlEvent>,
    mut focus: ResMut<FocusSelection>,
    mut rig: ResMut<CameraRig>,
) {
    for &event in events.read() {
        apply_control(event, &mut focus, &mut rig);
        match event {
            ControlEvent::ZoomIn | ControlEvent::ZoomOut => {
                info!("Camera distance set to {}", rig.distance);
            }
            ControlEvent::ResetView => info!("Focus cleared, showing overview"),
            ControlEvent::FocusTrain(id) => info!("Focusing on {}", id),
        }
    }
}
