//! Named colors, the swatch table, and per-shape color selection.

mod color;
mod swatches;

pub use color::Color;
pub use swatches::{SWATCHES, SWATCH_COLUMNS};

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// Near-white named colors used to seed a freshly loaded shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    FloralWhite,
    Seashell,
    OldLace,
    Ivory,
    Beige,
    Linen,
    AntiqueWhite,
    WhiteSmoke,
    GhostWhite,
    Snow,
}

impl NamedColor {
    /// All named colors, in palette slot order.
    pub const ALL: [Self; 10] = [
        Self::FloralWhite,
        Self::Seashell,
        Self::OldLace,
        Self::Ivory,
        Self::Beige,
        Self::Linen,
        Self::AntiqueWhite,
        Self::WhiteSmoke,
        Self::GhostWhite,
        Self::Snow,
    ];

    /// Returns the RGBA value of this color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::FloralWhite => Color::rgb(1.0, 0.98, 0.94),
            Self::Seashell => Color::rgb(1.0, 0.96, 0.93),
            Self::OldLace => Color::rgb(0.99, 0.96, 0.9),
            Self::Ivory => Color::rgb(1.0, 1.0, 0.94),
            Self::Beige => Color::rgb(0.96, 0.96, 0.86),
            Self::Linen => Color::rgb(0.98, 0.94, 0.90),
            Self::AntiqueWhite => Color::rgb(0.98, 0.92, 0.84),
            Self::WhiteSmoke => Color::rgb(0.96, 0.96, 0.96),
            Self::GhostWhite => Color::rgb(0.97, 0.97, 1.0),
            Self::Snow => Color::rgb(1.0, 0.98, 0.98),
        }
    }

    /// Returns the upper-case name of this color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FloralWhite => "FLORALWHITE",
            Self::Seashell => "SEASHELL",
            Self::OldLace => "OLDLACE",
            Self::Ivory => "IVORY",
            Self::Beige => "BEIGE",
            Self::Linen => "LINEN",
            Self::AntiqueWhite => "ANTIQUEWHITE",
            Self::WhiteSmoke => "WHITESMOKE",
            Self::GhostWhite => "GHOSTWHITE",
            Self::Snow => "SNOW",
        }
    }
}

/// How face-arity classes are mapped to palette colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PalettePolicy {
    /// Class `i` takes palette slot `i`.
    #[default]
    Indexed,
    /// Each load draws distinct colors at random, one per class.
    Random,
}

/// Which fixed color table a [`Palette`] is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteSource {
    /// The ten [`NamedColor`]s.
    #[default]
    Named,
    /// The full [`SWATCHES`] table.
    Swatches,
}

/// A fixed, ordered list of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from explicit colors, keeping only the first
    /// occurrence of a repeated color.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        let mut seen = HashSet::new();
        let colors = colors
            .into_iter()
            .filter(|c| seen.insert(c.to_array().map(f32::to_bits)))
            .collect();
        Self { colors }
    }

    /// The palette of [`NamedColor`]s.
    #[must_use]
    pub fn named() -> Self {
        Self::new(NamedColor::ALL.iter().map(|c| c.color()).collect())
    }

    /// The distinct colors of the picker [`SWATCHES`], in table order.
    #[must_use]
    pub fn swatches() -> Self {
        Self::new(SWATCHES.iter().map(|&rgb| Color::from_packed(rgb)).collect())
    }

    /// Builds the palette for a [`PaletteSource`].
    #[must_use]
    pub fn from_source(source: PaletteSource) -> Self {
        match source {
            PaletteSource::Named => Self::named(),
            PaletteSource::Swatches => Self::swatches(),
        }
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Draws `k` distinct palette entries without replacement.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::NotEnoughColors`] if `k` exceeds the palette size.
    pub fn sample<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Result<Vec<Color>, PaletteError> {
        self.check_available(k)?;
        Ok(self.colors.choose_multiple(rng, k).copied().collect())
    }

    /// Returns one color per arity class according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::NotEnoughColors`] if there are more classes
    /// than palette entries.
    pub fn for_classes<R: Rng + ?Sized>(
        &self,
        policy: PalettePolicy,
        classes: usize,
        rng: &mut R,
    ) -> Result<Vec<Color>, PaletteError> {
        match policy {
            PalettePolicy::Indexed => {
                self.check_available(classes)?;
                Ok(self.colors[..classes].to_vec())
            }
            PalettePolicy::Random => self.sample(classes, rng),
        }
    }

    fn check_available(&self, requested: usize) -> Result<(), PaletteError> {
        if requested > self.colors.len() {
            return Err(PaletteError::NotEnoughColors {
                requested,
                available: self.colors.len(),
            });
        }
        Ok(())
    }
}

/// Number of user-defined swatch slots.
pub const CUSTOM_SWATCH_SLOTS: usize = 28;

/// A ring of user-defined swatches; once full, new colors overwrite the oldest slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomSwatches {
    slots: [Option<Color>; CUSTOM_SWATCH_SLOTS],
    next: usize,
}

impl Default for CustomSwatches {
    fn default() -> Self {
        Self {
            slots: [None; CUSTOM_SWATCH_SLOTS],
            next: 0,
        }
    }
}

impl CustomSwatches {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `color` in the next slot and returns the slot index.
    pub fn push(&mut self, color: Color) -> usize {
        let slot = self.next;
        self.slots[slot] = Some(color);
        self.next = (slot + 1) % CUSTOM_SWATCH_SLOTS;
        slot
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.slots.get(slot).copied().flatten()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Color>] {
        &self.slots
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn key(c: &Color) -> [u32; 4] {
        c.to_array().map(f32::to_bits)
    }

    #[test]
    fn named_palette_has_ten_distinct_colors() {
        let palette = Palette::named();
        assert_eq!(palette.len(), 10);
        let unique: HashSet<_> = palette.colors().iter().map(key).collect();
        assert_eq!(unique.len(), 10);
        assert_eq!(palette.get(0), Some(NamedColor::FloralWhite.color()));
        assert_eq!(NamedColor::FloralWhite.name(), "FLORALWHITE");
    }

    #[test]
    fn swatch_palette_drops_repeated_entries() {
        let palette = Palette::swatches();
        let distinct: HashSet<u32> = SWATCHES.iter().copied().collect();
        assert_eq!(distinct.len(), 138);
        assert_eq!(palette.len(), distinct.len());
        assert_eq!(palette.get(0), Some(Color::rgb(0.0, 0.0, 0.0)));
        assert_eq!(SWATCHES.len() % SWATCH_COLUMNS, 0);
    }

    #[test]
    fn new_keeps_first_of_repeats() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let palette = Palette::new(vec![red, blue, red]);
        assert_eq!(palette.colors(), &[red, blue]);
    }

    #[test]
    fn sampling_is_distinct_and_drawn_from_palette() {
        for (palette, k) in [(Palette::named(), 5), (Palette::swatches(), 10)] {
            for seed in 0..500 {
                let mut rng = StdRng::seed_from_u64(seed);
                let picked = palette.for_classes(PalettePolicy::Random, k, &mut rng).unwrap();
                assert_eq!(picked.len(), k);
                let unique: HashSet<_> = picked.iter().map(key).collect();
                assert_eq!(unique.len(), k, "seed {seed}");
                assert!(picked.iter().all(|c| palette.colors().contains(c)));
            }
        }
    }

    #[test]
    fn sampling_more_than_available_fails() {
        let palette = Palette::named();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            palette.sample(11, &mut rng),
            Err(PaletteError::NotEnoughColors { requested: 11, available: 10 })
        ));
    }

    #[test]
    fn indexed_policy_takes_leading_slots() {
        let palette = Palette::named();
        let mut rng = StdRng::seed_from_u64(0);
        let colors = palette.for_classes(PalettePolicy::Indexed, 3, &mut rng).unwrap();
        assert_eq!(colors, palette.colors()[..3].to_vec());
    }

    #[test]
    fn custom_swatches_wrap_around() {
        let mut custom = CustomSwatches::new();
        for i in 0..CUSTOM_SWATCH_SLOTS {
            assert_eq!(custom.push(Color::rgb(0.0, 0.0, 0.0)), i);
        }
        let red = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(custom.push(red), 0);
        assert_eq!(custom.get(0), Some(red));
        assert_eq!(custom.get(CUSTOM_SWATCH_SLOTS), None);
    }
}
