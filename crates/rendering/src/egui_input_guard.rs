//! Keeps clicks on the button panel from also orbiting or dollying the camera.

use bevy_egui::{egui, EguiContexts};

/// `true` while the cursor is over an egui panel or egui owns the current
/// drag. Camera input systems skip their work in that case.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    pointer_claimed(contexts.ctx_mut())
}

pub fn pointer_claimed(ctx: &egui::Context) -> bool {
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
