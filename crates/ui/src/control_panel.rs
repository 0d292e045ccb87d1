use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::camera_rig::CameraRig;
use simulation::controls::ControlEvent;
use simulation::focus::FocusSelection;
use simulation::palette::{TrainColor, TrainPalette};
use simulation::train::TrainId;

// ---------------------------------------------------------------------------
// Data-driven button definitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ControlButton {
    pub label: String,
    pub action: ControlEvent,
    /// Background fill; `None` keeps the theme's default.
    pub fill: Option<TrainColor>,
}

impl ControlButton {
    fn plain(label: &str, action: ControlEvent) -> Self {
        Self {
            label: label.to_string(),
            action,
            fill: None,
        }
    }

    /// Whether this button represents the current focus.
    pub fn is_selected(&self, focus: &FocusSelection) -> bool {
        match self.action {
            ControlEvent::FocusTrain(id) => focus.focused() == Some(id),
            _ => false,
        }
    }
}

/// Zoom In, Zoom Out, Reset View, then one focus button per train.
pub fn build_control_buttons(palette: &TrainPalette) -> Vec<ControlButton> {
    let mut buttons = vec![
        ControlButton::plain("Zoom In", ControlEvent::ZoomIn),
        ControlButton::plain("Zoom Out", ControlEvent::ZoomOut),
        ControlButton::plain("Reset View", ControlEvent::ResetView),
    ];
    buttons.extend(TrainId::all().map(|id| ControlButton {
        label: format!("Focus on Train {}", id.index()),
        action: ControlEvent::FocusTrain(id),
        fill: palette.get(id),
    }));
    buttons
}

fn to_egui(color: TrainColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

fn status_line(focus: &FocusSelection, rig: &CameraRig) -> String {
    match focus.focused() {
        Some(id) => format!("Following {} at distance {}", id, rig.distance),
        None => format!("Overview at distance {}", rig.distance),
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

pub fn control_panel_ui(
    mut contexts: EguiContexts,
    palette: Res<TrainPalette>,
    focus: Res<FocusSelection>,
    rig: Res<CameraRig>,
    mut controls: EventWriter<ControlEvent>,
) {
    let buttons = build_control_buttons(&palette);

    egui::TopBottomPanel::top("control_panel").show(contexts.ctx_mut(), |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
            for button in &buttons {
                let widget = match button.fill {
                    Some(fill) => egui::Button::new(
                        egui::RichText::new(&button.label).color(egui::Color32::WHITE),
                    )
                    .fill(to_egui(fill)),
                    None => egui::Button::new(&button.label),
                };
                if ui
                    .add(widget.selected(button.is_selected(&focus)))
                    .clicked()
                {
                    controls.send(button.action);
                }
            }
        });
        ui.label(
            egui::RichText::new(status_line(&focus, &rig))
                .small()
                .color(egui::Color32::from_rgb(80, 80, 90)),
        );
    });
}
