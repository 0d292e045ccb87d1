use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::camera_rig::CameraRig;
use simulation::config::DEFAULT_CAMERA_POSITION;

use crate::egui_input_guard::egui_wants_pointer;

const ORBIT_SENSITIVITY: f32 = 0.005;
const ZOOM_SPEED: f32 = 0.15;
const MIN_DOLLY_DISTANCE: f32 = 1.0;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;

/// Marker for the one camera the rig drives.
#[derive(Component)]
pub struct RailCamera;

/// Left-drag state for free orbiting.
#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        RailCamera,
        Camera3d::default(),
        Transform::from_translation(DEFAULT_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Rotate `transform` around `target` on a sphere: `yaw` about world Y,
/// `pitch` toward the poles, clamped short of them.
pub fn orbit_around(transform: &Transform, target: Vec3, yaw: f32, pitch: f32) -> Transform {
    let offset = transform.translation - target;
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return *transform;
    }

    let yaw = offset.x.atan2(offset.z) + yaw;
    let pitch = ((offset.y / radius).clamp(-1.0, 1.0).asin() + pitch).clamp(-MAX_PITCH, MAX_PITCH);

    // Spherical to cartesian offset from target
    let x = radius * pitch.cos() * yaw.sin();
    let y = radius * pitch.sin();
    let z = radius * pitch.cos() * yaw.cos();
    Transform::from_translation(target + Vec3::new(x, y, z)).looking_at(target, Vec3::Y)
}

/// Scale the camera's distance to `target` by `factor`, never closer than
/// `MIN_DOLLY_DISTANCE`.
pub fn dolly(transform: &Transform, target: Vec3, factor: f32) -> Transform {
    let offset = transform.translation - target;
    let distance = (offset.length() * factor).max(MIN_DOLLY_DISTANCE);
    let direction = offset.try_normalize().unwrap_or(Vec3::Z);
    Transform::from_translation(target + direction * distance).looking_at(target, Vec3::Y)
}

/// Left-mouse drag: orbit around the rig's current target.
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    rig: Res<CameraRig>,
    mut drag: ResMut<CameraOrbitDrag>,
    mut cameras: Query<&mut Transform, With<RailCamera>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.dragging = false;
    }

    if !drag.dragging {
        return;
    }
    let Some(pos) = window.cursor_position() else {
        return;
    };
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    let delta = pos - drag.last_pos;
    *transform = orbit_around(
        &transform,
        rig.target,
        -delta.x * ORBIT_SENSITIVITY,
        delta.y * ORBIT_SENSITIVITY,
    );
    drag.last_pos = pos;
}

/// Scroll wheel: dolly toward or away from the rig's target.
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    rig: Res<CameraRig>,
    mut cameras: Query<&mut Transform, With<RailCamera>>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        *transform = dolly(&transform, rig.target, 1.0 - dy * ZOOM_SPEED);
    }
}

/// System: place the camera where the rig says, overriding any free-orbit
/// input from this frame.
pub fn apply_camera_rig(
    rig: Res<CameraRig>,
    mut cameras: Query<&mut Transform, With<RailCamera>>,
) {
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(rig.position).looking_at(rig.target, Vec3::Y);
}
