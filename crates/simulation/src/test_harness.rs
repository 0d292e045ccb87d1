//! # TestScene: headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so the orbit, focus and camera
//! logic can be driven frame by frame without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::camera_rig::CameraRig;
use crate::controls::ControlEvent;
use crate::focus::FocusSelection;
use crate::palette::TrainPalette;
use crate::sim_rng::SimRng;
use crate::train::{TrainId, TrainRoster};
use crate::SimulationPlugin;
use crate::TickCounter;

/// A headless Bevy App wrapping `SimulationPlugin`.
///
/// Send control messages, call `tick()`, then assert on the resulting state.
pub struct TestScene {
    app: App,
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TestScene {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A scene with the default RNG seed. Startup has run; no frame has been
    /// simulated yet apart from the first update.
    pub fn new() -> Self {
        Self::build(SimRng::default(), None)
    }

    /// A scene whose palette is rolled from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(SimRng::from_seed_u64(seed), None)
    }

    /// A scene with fixed train colors.
    pub fn with_palette(palette: TrainPalette) -> Self {
        Self::build(SimRng::default(), Some(palette))
    }

    fn build(rng: SimRng, palette: Option<TrainPalette>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert BEFORE SimulationPlugin so its init_resource calls keep them.
        app.insert_resource(rng);
        if let Some(palette) = palette {
            app.insert_resource(palette);
        }
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving the scene
    // -----------------------------------------------------------------------

    /// Run `frames` updates.
    pub fn tick(&mut self, frames: u32) -> &mut Self {
        for _ in 0..frames {
            self.app.update();
        }
        self
    }

    /// Queue a control message; it is applied on the next `tick`.
    pub fn send(&mut self, event: ControlEvent) -> &mut Self {
        self.app.world_mut().send_event(event);
        self
    }

    pub fn focus(&mut self, index: usize) -> &mut Self {
        match TrainId::new(index) {
            Some(id) => self.send(ControlEvent::FocusTrain(id)),
            None => self,
        }
    }

    pub fn reset_view(&mut self) -> &mut Self {
        self.send(ControlEvent::ResetView)
    }

    pub fn zoom_in(&mut self) -> &mut Self {
        self.send(ControlEvent::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> &mut Self {
        self.send(ControlEvent::ZoomOut)
    }

    /// Overwrite the focus directly, bypassing control messages.
    pub fn force_focus(&mut self, focus: FocusSelection) -> &mut Self {
        *self.app.world_mut().resource_mut::<FocusSelection>() = focus;
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn focus_selection(&self) -> FocusSelection {
        *self.app.world().resource::<FocusSelection>()
    }

    pub fn rig(&self) -> CameraRig {
        *self.app.world().resource::<CameraRig>()
    }

    pub fn roster(&self) -> &TrainRoster {
        self.app.world().resource::<TrainRoster>()
    }

    pub fn palette(&self) -> &TrainPalette {
        self.app.world().resource::<TrainPalette>()
    }

    pub fn train_position(&self, index: usize) -> Option<Vec3> {
        TrainId::new(index).and_then(|id| self.roster().position(id))
    }

    pub fn ticks(&self) -> u64 {
        self.app.world().resource::<TickCounter>().0
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
