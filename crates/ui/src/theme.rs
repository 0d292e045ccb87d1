use bevy_egui::{egui, EguiContexts};

/// Light theme to sit on top of the pale scene background.
pub fn apply_light_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let panel = egui::Color32::from_rgb(245, 245, 245);
    let inactive = egui::Color32::from_rgb(120, 120, 130);
    let hover = egui::Color32::from_rgb(90, 100, 120);
    let active = egui::Color32::from_rgb(60, 110, 180);

    style.visuals.panel_fill = panel;
    style.visuals.window_fill = panel;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    // Selected focus button gets a dark outline
    style.visuals.selection.stroke = egui::Stroke::new(2.0, egui::Color32::from_rgb(20, 20, 20));

    let widget_rounding = egui::CornerRadius::same(4);
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
