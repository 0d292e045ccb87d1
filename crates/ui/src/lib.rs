use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod control_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_light_theme)
            .add_systems(
                Update,
                control_panel::control_panel_ui
                    .before(simulation::controls::apply_control_events),
            );
    }
}
