//! Orbit simulation: ten trains circling the rail at fixed, distinct speeds.
//!
//! Each train owns an angle accumulator that grows every tick by
//! `ANGULAR_SPEED_FACTOR * (id + 0.5)`. Only `cos`/`sin` of the angle are
//! ever observed, so it is never wrapped. The accumulator is `f64`: in `f32`
//! the per-tick step starts rounding away after a few hours of frames.

use std::fmt;

use bevy::prelude::*;

use crate::config::{ANGULAR_SPEED_FACTOR, ORBIT_RADIUS, TRAIN_COUNT};
use crate::palette::{TrainColor, TrainPalette};

/// Identity of a train, always in `0..TRAIN_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(u8);

impl TrainId {
    pub fn new(index: usize) -> Option<Self> {
        (index < TRAIN_COUNT).then_some(Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = TrainId> {
        (0..TRAIN_COUNT as u8).map(TrainId)
    }

    /// Scene-graph name of the train's mesh entity.
    pub fn entity_name(self) -> String {
        format!("train-{}", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "train {}", self.0)
    }
}

/// Radians advanced per tick.
pub fn angular_speed(id: TrainId) -> f64 {
    ANGULAR_SPEED_FACTOR * (f64::from(id.0) + 0.5)
}

/// Point on the rail for a given angle. The rail lies in the XY plane.
pub fn orbit_position(angle: f64) -> Vec3 {
    Vec3::new(
        ORBIT_RADIUS * angle.cos() as f32,
        ORBIT_RADIUS * angle.sin() as f32,
        0.0,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainState {
    id: TrainId,
    color: TrainColor,
    angle: f64,
}

impl TrainState {
    pub fn new(id: TrainId, color: TrainColor) -> Self {
        Self {
            id,
            color,
            angle: 0.0,
        }
    }

    pub fn id(&self) -> TrainId {
        self.id
    }

    pub fn color(&self) -> TrainColor {
        self.color
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn position(&self) -> Vec3 {
        orbit_position(self.angle)
    }

    fn advance(&mut self) {
        self.angle += angular_speed(self.id);
    }
}

/// All train states, indexed by `TrainId`.
#[derive(Resource, Debug, Clone, Default)]
pub struct TrainRoster {
    trains: Vec<TrainState>,
}

impl TrainRoster {
    pub fn from_palette(palette: &TrainPalette) -> Self {
        let trains = TrainId::all()
            .zip(palette.colors().iter().copied())
            .map(|(id, color)| TrainState::new(id, color))
            .collect();
        Self { trains }
    }

    /// Advance every train by one tick.
    pub fn advance(&mut self) {
        for train in &mut self.trains {
            train.advance();
        }
    }

    pub fn get(&self, id: TrainId) -> Option<&TrainState> {
        self.trains.get(id.index())
    }

    /// Current position of a train, or `None` if it is not on the rail.
    pub fn position(&self, id: TrainId) -> Option<Vec3> {
        self.get(id).map(TrainState::position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrainState> {
        self.trains.iter()
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}

/// Startup system: put one train per palette color on the rail.
pub fn init_roster(palette: Res<TrainPalette>, mut roster: ResMut<TrainRoster>) {
    *roster = TrainRoster::from_palette(&palette);
    info!("Placed {} trains on the rail", roster.len());
}

/// System: advance all trains once per frame.
pub fn advance_trains(mut roster: ResMut<TrainRoster>) {
    roster.advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim_rng::SimRng;

    fn roster() -> TrainRoster {
        TrainRoster::from_palette(&TrainPalette::generate(&mut SimRng::default().0))
    }

    #[test]
    fn test_train_id_bounds() {
        assert!(TrainId::new(0).is_some());
        assert!(TrainId::new(TRAIN_COUNT - 1).is_some());
        assert!(TrainId::new(TRAIN_COUNT).is_none());
        assert_eq!(TrainId::all().count(), TRAIN_COUNT);
    }

    #[test]
    fn test_entity_name() {
        let id = TrainId::new(7).unwrap();
        assert_eq!(id.entity_name(), "train-7");
    }

    #[test]
    fn test_speed_strictly_increasing() {
        let speeds: Vec<f64> = TrainId::all().map(angular_speed).collect();
        for pair in speeds.windows(2) {
            assert!(pair[0] < pair[1], "speeds not increasing: {:?}", speeds);
        }
        assert!((speeds[0] - 0.0025).abs() < 1e-12);
        assert!((speeds[9] - 0.0475).abs() < 1e-12);
    }

    #[test]
    fn test_orbit_position_on_circle() {
        for angle in [0.0_f64, 0.3, 1.0, std::f64::consts::PI, -2.5, 1234.5, 1.0e7] {
            let p = orbit_position(angle);
            let r2 = p.x * p.x + p.y * p.y;
            assert!((r2 - 25.0).abs() < 1e-3, "angle {angle}: r^2 = {r2}");
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_trains_start_at_angle_zero() {
        let roster = roster();
        assert_eq!(roster.len(), TRAIN_COUNT);
        for train in roster.iter() {
            assert_eq!(train.angle(), 0.0);
            assert_eq!(train.position(), Vec3::new(ORBIT_RADIUS, 0.0, 0.0));
        }
    }

    #[test]
    fn test_advance_adds_per_id_speed() {
        let mut roster = roster();
        for _ in 0..3 {
            roster.advance();
        }
        for train in roster.iter() {
            let expected = 3.0 * angular_speed(train.id());
            assert!((train.angle() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_step_is_exact_after_long_sessions() {
        // 1e5 rad is about a week of frames for train 0; 1e7 is far past that.
        for start in [1.0e5, 1.0e7] {
            for id in TrainId::all() {
                let mut train = TrainState {
                    id,
                    color: TrainColor::new(0, 0, 0),
                    angle: start,
                };
                train.advance();
                let step = train.angle() - start;
                assert!(
                    (step - angular_speed(id)).abs() < 1e-6,
                    "{id} at {start}: step {step}"
                );
            }
        }
    }

    #[test]
    fn test_speed_order_survives_large_angles() {
        let mut trains: Vec<TrainState> = TrainId::all()
            .map(|id| TrainState {
                id,
                color: TrainColor::new(0, 0, 0),
                angle: 7.0e4,
            })
            .collect();
        for train in &mut trains {
            train.advance();
        }
        for pair in trains.windows(2) {
            assert!(pair[0].angle() < pair[1].angle());
        }
    }

    #[test]
    fn test_colors_follow_palette() {
        let palette = TrainPalette::generate(&mut SimRng::from_seed_u64(3).0);
        let roster = TrainRoster::from_palette(&palette);
        for train in roster.iter() {
            assert_eq!(Some(train.color()), palette.get(train.id()));
        }
    }

    #[test]
    fn test_empty_roster_has_no_positions() {
        let roster = TrainRoster::default();
        assert!(roster.is_empty());
        assert_eq!(roster.position(TrainId::new(3).unwrap()), None);
    }
}
