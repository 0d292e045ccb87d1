use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

#[cfg(not(target_arch = "wasm32"))]
use simulation::TickCounter;

const SCREENSHOT_KEY: KeyCode = KeyCode::F12;

#[cfg(not(target_arch = "wasm32"))]
const SCREENSHOT_DIR: &str = "screenshots";

pub struct ScreenshotPlugin;

impl Plugin for ScreenshotPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_screenshot_key);
    }
}

/// File name for a capture taken on frame `tick`.
pub fn screenshot_path(dir: &str, tick: u64) -> String {
    format!("{}/orbit_rail_{:08}.png", dir, tick)
}

#[cfg(not(target_arch = "wasm32"))]
fn handle_screenshot_key(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    ticks: Res<TickCounter>,
) {
    if !keyboard.just_pressed(SCREENSHOT_KEY) {
        return;
    }
    if let Err(e) = std::fs::create_dir_all(SCREENSHOT_DIR) {
        warn!("Failed to create {} directory: {}", SCREENSHOT_DIR, e);
        return;
    }

    let path = screenshot_path(SCREENSHOT_DIR, ticks.0);
    info!("Saving screenshot to {}", path);
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(path));
}

#[cfg(target_arch = "wasm32")]
fn handle_screenshot_key(keyboard: Res<ButtonInput<KeyCode>>) {
    if keyboard.just_pressed(SCREENSHOT_KEY) {
        warn!("Screenshots not supported in browser");
    }
}
