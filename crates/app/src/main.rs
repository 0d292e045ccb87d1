use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use simulation::sim_rng::SimRng;

#[cfg(not(target_arch = "wasm32"))]
mod screenshot_tour;

const BACKGROUND: Color = Color::srgb(0.933, 0.933, 0.933);

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orbit Rail".to_string(),
            resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(ClearColor(BACKGROUND))
    // Colors differ per session; tests rely on the fixed default seed instead.
    .insert_resource(SimRng::from_entropy())
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Screenshot mode: takes preset screenshots and exits
    #[cfg(not(target_arch = "wasm32"))]
    if std::env::var("ORBIT_RAIL_SCREENSHOTS").is_ok() {
        screenshot_tour::install(&mut app);
    }

    app.run();
}
