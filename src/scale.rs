//! # Scale Engine
//!
//! Generates the pitch-class set of a scale rooted at a given note.
//!
//! A scale type is an ordered, strictly increasing list of semitone offsets
//! from the root, starting at 0. The pitch classes of a rooted scale are
//! `root + offset (mod 12)` in offset order, so the root always comes first.
//!
//! ```rust
//! use fretwork::{scale_notes, PitchClass, ScaleType};
//!
//! let g_major: Vec<&str> = scale_notes(PitchClass::G, ScaleType::Major)
//!     .iter()
//!     .map(|pc| pc.name())
//!     .collect();
//! assert_eq!(g_major, vec!["G", "A", "B", "C", "D", "E", "F#"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FretworkError;
use crate::note::PitchClass;

/// Named scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleType {
    #[default]
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
}

impl ScaleType {
    pub const ALL: [ScaleType; 12] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
    ];

    /// Semitone offsets from the root, strictly increasing, starting at 0
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Locrian => "Locrian",
        }
    }

    /// Short identifier used in config files and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::NaturalMinor => "minor",
            ScaleType::HarmonicMinor => "harmonic-minor",
            ScaleType::MelodicMinor => "melodic-minor",
            ScaleType::MajorPentatonic => "major-pentatonic",
            ScaleType::MinorPentatonic => "minor-pentatonic",
            ScaleType::Blues => "blues",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::Locrian => "locrian",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleType {
    type Err = FretworkError;

    /// Parse a scale id (case-insensitive; spaces and underscores count as dashes).
    /// `ionian`, `aeolian`, `natural-minor` and `pentatonic` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase().replace([' ', '_'], "-");
        match id.as_str() {
            "ionian" => return Ok(ScaleType::Major),
            "aeolian" | "natural-minor" => return Ok(ScaleType::NaturalMinor),
            "pentatonic" => return Ok(ScaleType::MajorPentatonic),
            _ => {}
        }
        ScaleType::ALL
            .iter()
            .copied()
            .find(|scale| scale.id() == id)
            .ok_or_else(|| FretworkError::UnknownScale(s.to_string()))
    }
}

/// Pitch classes of `scale` rooted at `root`, in offset order (root first).
pub fn scale_notes(root: PitchClass, scale: ScaleType) -> Vec<PitchClass> {
    scale
        .intervals()
        .iter()
        .map(|&offset| root.transpose(offset as i32))
        .collect()
}

/// Whether `pitch_class` belongs to `scale` rooted at `root`.
pub fn is_in_scale(root: PitchClass, scale: ScaleType, pitch_class: PitchClass) -> bool {
    scale.intervals().contains(&root.interval_to(pitch_class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intervals_well_formed() {
        for scale in ScaleType::ALL {
            let offsets = scale.intervals();
            assert_eq!(offsets[0], 0, "{} must start at the root", scale);
            assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{} not increasing", scale);
            assert!(offsets.iter().all(|&o| o < 12));
            assert!((5..=7).contains(&offsets.len()));
        }
    }

    #[test]
    fn test_scale_notes_length_and_distinct() {
        for root in PitchClass::ALL {
            for scale in ScaleType::ALL {
                let notes = scale_notes(root, scale);
                assert_eq!(notes.len(), scale.intervals().len());
                assert_eq!(notes[0], root);
                let mut sorted = notes.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), notes.len(), "duplicates in {} {}", root, scale);
            }
        }
    }

    #[test]
    fn test_a_minor_pentatonic() {
        let notes = scale_notes(PitchClass::A, ScaleType::MinorPentatonic);
        assert_eq!(
            notes,
            vec![PitchClass::A, PitchClass::C, PitchClass::D, PitchClass::E, PitchClass::G]
        );
    }

    #[test]
    fn test_is_in_scale() {
        assert!(is_in_scale(PitchClass::D, ScaleType::Major, PitchClass::FS));
        assert!(!is_in_scale(PitchClass::D, ScaleType::Major, PitchClass::F));
        assert!(is_in_scale(PitchClass::E, ScaleType::Blues, PitchClass::AS));
    }

    #[test]
    fn test_parse_scale_ids() {
        assert_eq!("major".parse::<ScaleType>().unwrap(), ScaleType::Major);
        assert_eq!("Minor Pentatonic".parse::<ScaleType>().unwrap(), ScaleType::MinorPentatonic);
        assert_eq!("aeolian".parse::<ScaleType>().unwrap(), ScaleType::NaturalMinor);
        assert_eq!("harmonic_minor".parse::<ScaleType>().unwrap(), ScaleType::HarmonicMinor);
        assert!("bebop".parse::<ScaleType>().is_err());
    }
}
