//! Screenshot mode: steps through focus/zoom presets, saves a capture of
//! each to /tmp, then exits.

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use simulation::controls::ControlEvent;
use simulation::train::TrainId;

pub fn install(app: &mut App) {
    app.insert_resource(ScreenshotQueue {
        frame: 0,
        current: 0,
        presets: vec![
            ShotPreset { name: "01_overview", controls: vec![ControlEvent::ResetView] },
            ShotPreset { name: "02_overview_zoom_in", controls: vec![ControlEvent::ZoomIn] },
            ShotPreset { name: "03_train_0", controls: focus(0, ControlEvent::ZoomIn) },
            ShotPreset { name: "04_train_5", controls: focus(5, ControlEvent::ZoomIn) },
            ShotPreset { name: "05_train_9_far", controls: focus(9, ControlEvent::ZoomOut) },
        ],
    });
    app.add_systems(Update, drive_screenshots);
}

fn focus(index: usize, zoom: ControlEvent) -> Vec<ControlEvent> {
    TrainId::new(index)
        .map(ControlEvent::FocusTrain)
        .into_iter()
        .chain(std::iter::once(zoom))
        .collect()
}

#[derive(Resource)]
struct ScreenshotQueue {
    frame: u32,
    current: usize,
    presets: Vec<ShotPreset>,
}

struct ShotPreset {
    name: &'static str,
    controls: Vec<ControlEvent>,
}

const WARMUP_FRAMES: u32 = 120;
const FRAMES_PER_PRESET: u32 = 12;
/// Frames between sending a preset's controls and capturing it.
const CAPTURE_PHASE: u32 = 6;
const EXIT_GRACE_FRAMES: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TourStep {
    Wait,
    Apply(usize),
    Capture(usize),
    Exit,
}

/// What the tour does on `frame`, given how many presets were already
/// captured.
fn tour_step(frame: u32, captured: usize, preset_count: usize) -> TourStep {
    // Let the trains spread out along the rail first
    if frame < WARMUP_FRAMES {
        return TourStep::Wait;
    }

    if captured >= preset_count {
        // All done, wait a few frames for the last save, then exit
        let done_at = WARMUP_FRAMES + preset_count as u32 * FRAMES_PER_PRESET + EXIT_GRACE_FRAMES;
        return if frame > done_at {
            TourStep::Exit
        } else {
            TourStep::Wait
        };
    }

    match (frame - WARMUP_FRAMES) % FRAMES_PER_PRESET {
        0 => TourStep::Apply(captured),
        CAPTURE_PHASE => TourStep::Capture(captured),
        _ => TourStep::Wait,
    }
}

fn drive_screenshots(
    mut commands: Commands,
    mut queue: ResMut<ScreenshotQueue>,
    mut controls: EventWriter<ControlEvent>,
    mut exit: EventWriter<AppExit>,
) {
    queue.frame += 1;

    match tour_step(queue.frame, queue.current, queue.presets.len()) {
        TourStep::Wait => {}
        TourStep::Apply(idx) => {
            for &event in &queue.presets[idx].controls {
                controls.send(event);
            }
        }
        TourStep::Capture(idx) => {
            let path = format!("/tmp/orbit_rail_{}.png", queue.presets[idx].name);
            info!("Capturing {}", path);
            commands
                .spawn(Screenshot::primary_window())
                .observe(save_to_disk(path));
            queue.current += 1;
        }
        TourStep::Exit => {
            exit.send(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive `tour_step` the way `drive_screenshots` does and record every
    /// non-wait step with its frame.
    fn run_tour(preset_count: usize) -> Vec<(u32, TourStep)> {
        let mut captured = 0;
        let mut log = Vec::new();
        for frame in 1..=1_000 {
            let step = tour_step(frame, captured, preset_count);
            match step {
                TourStep::Wait => continue,
                TourStep::Capture(_) => captured += 1,
                TourStep::Apply(_) | TourStep::Exit => {}
            }
            log.push((frame, step));
            if step == TourStep::Exit {
                break;
            }
        }
        log
    }

    #[test]
    fn test_nothing_happens_during_warmup() {
        for frame in 0..WARMUP_FRAMES {
            assert_eq!(tour_step(frame, 0, 5), TourStep::Wait);
        }
        assert_eq!(tour_step(WARMUP_FRAMES, 0, 5), TourStep::Apply(0));
    }

    #[test]
    fn test_each_preset_applied_then_captured_in_order() {
        let log = run_tour(5);
        let steps: Vec<TourStep> = log.iter().map(|(_, step)| *step).collect();
        let mut expected = Vec::new();
        for idx in 0..5 {
            expected.push(TourStep::Apply(idx));
            expected.push(TourStep::Capture(idx));
        }
        expected.push(TourStep::Exit);
        assert_eq!(steps, expected);

        for pair in log.chunks(2).take(5) {
            assert_eq!(pair[1].0 - pair[0].0, CAPTURE_PHASE);
        }
    }

    #[test]
    fn test_exit_waits_for_last_save() {
        let log = run_tour(5);
        let (last_capture, _) = log[log.len() - 2];
        let (exit_frame, step) = log[log.len() - 1];
        assert_eq!(step, TourStep::Exit);
        assert_eq!(exit_frame, 201);
        assert!(exit_frame - last_capture >= EXIT_GRACE_FRAMES);
    }

    #[test]
    fn test_installed_presets_cover_the_tour() {
        let mut app = App::new();
        install(&mut app);
        let queue = app.world().resource::<ScreenshotQueue>();
        assert_eq!(queue.presets.len(), 5);
        assert_eq!(
            queue.presets[2].controls,
            vec![
                ControlEvent::FocusTrain(TrainId::new(0).unwrap()),
                ControlEvent::ZoomIn
            ]
        );
        assert_eq!(
            run_tour(queue.presets.len()).last().map(|(_, step)| *step),
            Some(TourStep::Exit)
        );
    }
}
