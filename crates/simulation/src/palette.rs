//! Per-train colors, rolled once at startup and stable for the session.

use std::fmt;

use bevy::prelude::*;
use rand::Rng;

use crate::config::TRAIN_COUNT;
use crate::sim_rng::SimRng;
use crate::train::TrainId;

/// A 24-bit sRGB color, displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TrainColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Roll six independent hex digits.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut channel = || (rng.gen_range(0..16u8) << 4) | rng.gen_range(0..16u8);
        Self::new(channel(), channel(), channel())
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrainColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<TrainColor> for Color {
    fn from(c: TrainColor) -> Self {
        Color::srgb_u8(c.r, c.g, c.b)
    }
}

/// The colors of all trains, indexed by `TrainId`.
///
/// Empty until `generate_palette` runs. A palette inserted before startup
/// (tests, screenshots) is left untouched.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainPalette {
    colors: Vec<TrainColor>,
}

impl TrainPalette {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            colors: (0..TRAIN_COUNT).map(|_| TrainColor::random(&mut *rng)).collect(),
        }
    }

    /// Build a palette from explicit colors. Returns `None` unless exactly
    /// one color per train is given.
    pub fn from_colors(colors: Vec<TrainColor>) -> Option<Self> {
        (colors.len() == TRAIN_COUNT).then_some(Self { colors })
    }

    pub fn get(&self, id: TrainId) -> Option<TrainColor> {
        self.colors.get(id.index()).copied()
    }

    pub fn colors(&self) -> &[TrainColor] {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Startup system: fill the palette from `SimRng` if nothing was provided.
pub fn generate_palette(mut palette: ResMut<TrainPalette>, mut rng: ResMut<SimRng>) {
    if !palette.is_empty() {
        return;
    }
    *palette = TrainPalette::generate(&mut rng.0);
    let listing: Vec<String> = palette.colors().iter().map(|c| c.to_hex()).collect();
    info!("Generated train palette: {}", listing.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_one_color_per_train() {
        let mut rng = SimRng::default();
        let palette = TrainPalette::generate(&mut rng.0);
        assert_eq!(palette.colors().len(), TRAIN_COUNT);
        for id in TrainId::all() {
            assert!(palette.get(id).is_some(), "missing color for {id}");
        }
    }

    #[test]
    fn test_hex_format() {
        let mut rng = SimRng::from_seed_u64(7);
        for color in TrainPalette::generate(&mut rng.0).colors() {
            let hex = color.to_hex();
            assert_eq!(hex.len(), 7, "bad length: {hex}");
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_display_pads_and_uppercases() {
        assert_eq!(TrainColor::new(0x0a, 0xbc, 0x01).to_hex(), "#0ABC01");
        assert_eq!(TrainColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_from_colors_requires_full_set() {
        assert!(TrainPalette::from_colors(vec![TrainColor::new(1, 2, 3); 3]).is_none());
        assert!(TrainPalette::from_colors(vec![TrainColor::new(1, 2, 3); TRAIN_COUNT]).is_some());
    }

    #[test]
    fn test_same_seed_same_palette() {
        let a = TrainPalette::generate(&mut SimRng::from_seed_u64(99).0);
        let b = TrainPalette::generate(&mut SimRng::from_seed_u64(99).0);
        assert_eq!(a, b);
    }
}
