use bevy::math::Vec3;

pub const TRAIN_COUNT: usize = 10;
pub const ORBIT_RADIUS: f32 = 5.0;

/// Radians per tick for train `id` are `ANGULAR_SPEED_FACTOR * (id + 0.5)`.
pub const ANGULAR_SPEED_FACTOR: f64 = 0.005;

/// Per-tick interpolation weight from the initial camera position toward the target.
pub const CAMERA_LAG_FACTOR: f32 = 0.01;

/// Reference point the camera direction is derived from every tick.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 20.0);

/// Where the camera entity is spawned before the controller takes over.
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 5.0, 10.0);

pub const ZOOM_IN_DISTANCE: f32 = 4.0;
pub const OVERVIEW_DISTANCE: f32 = 8.0;
pub const ZOOM_OUT_FOCUSED_DISTANCE: f32 = 10.0;

pub const RAIL_TUBE_RADIUS: f32 = 0.2;
pub const RAIL_TUBE_SEGMENTS: usize = 8;
pub const RAIL_RING_SEGMENTS: usize = 100;
pub const TRAIN_SIZE: f32 = 0.5;

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
