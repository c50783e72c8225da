//! # Note Space
//!
//! The 12-tone pitch-class universe and note-name normalization.
//!
//! ## Key Types
//! - [`PitchClass`] - one of the 12 chromatic classes (0 = C ... 11 = B)
//! - [`Note`] - a pitch class in a concrete octave, used for playback
//!
//! ## Spelling
//! Every pitch class has a canonical sharp spelling (`C#`, `D#`, `F#`, `G#`, `A#`)
//! and a flat alias (`Db`, `Eb`, `Gb`, `Ab`, `Bb`). Flat-spelled input always
//! normalizes to the same class as its sharp equivalent:
//!
//! ```rust
//! use fretwork::PitchClass;
//!
//! assert_eq!(PitchClass::normalize("Bb").unwrap(), PitchClass::normalize("A#").unwrap());
//! assert_eq!(PitchClass::normalize("Gb").unwrap().name(), "F#");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FretworkError, Result};

/// Number of pitch classes in the chromatic scale
pub const SEMITONES: u8 = 12;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A pitch class: an integer 0-11 over the chromatic scale, ignoring octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const CS: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const DS: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const FS: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const GS: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const AS: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CS,
        PitchClass::D,
        PitchClass::DS,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FS,
        PitchClass::G,
        PitchClass::GS,
        PitchClass::A,
        PitchClass::AS,
        PitchClass::B,
    ];

    /// Build a pitch class from any semitone count, wrapping modulo 12.
    pub fn new(semitone: i32) -> Self {
        PitchClass(semitone.rem_euclid(SEMITONES as i32) as u8)
    }

    /// Semitone value 0-11 (C = 0)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Map any accepted spelling to its pitch class.
    ///
    /// Accepts a letter `A`-`G` (either case) followed by any number of
    /// accidentals: `#`, `♯`, `s` raise, `b`, `♭`, `f` lower. `Cb`, `Fb`,
    /// `E#` and `B#` wrap to their enharmonic classes.
    ///
    /// # Errors
    /// Returns [`FretworkError::UnknownNote`] for anything else.
    ///
    /// # Example
    /// ```
    /// use fretwork::PitchClass;
    ///
    /// assert_eq!(PitchClass::normalize("C#").unwrap().value(), 1);
    /// assert_eq!(PitchClass::normalize("Db").unwrap().value(), 1);
    /// assert_eq!(PitchClass::normalize("Cb").unwrap().value(), 11);
    /// assert!(PitchClass::normalize("Xb").is_err());
    /// ```
    pub fn normalize(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .and_then(letter_semitone)
            .ok_or_else(|| FretworkError::UnknownNote(name.to_string()))?;

        let mut offset = 0i32;
        for c in chars {
            offset += match c {
                '#' | '♯' | 's' => 1,
                'b' | '♭' | 'f' => -1,
                _ => return Err(FretworkError::UnknownNote(name.to_string())),
            };
        }

        Ok(PitchClass::new(letter + offset))
    }

    /// Move by `semitones` (positive or negative), wrapping modulo 12.
    pub fn transpose(&self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones.rem_euclid(SEMITONES as i32))
    }

    /// Upward distance in semitones from `self` to `other` (0-11).
    pub fn interval_to(&self, other: PitchClass) -> u8 {
        (other.0 + SEMITONES - self.0) % SEMITONES
    }

    /// Canonical sharp-based name.
    pub fn name(&self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }

    /// Name using the flat alias when `prefer_flat` is set.
    pub fn spelled(&self, prefer_flat: bool) -> &'static str {
        if prefer_flat {
            FLAT_NAMES[self.0 as usize]
        } else {
            SHARP_NAMES[self.0 as usize]
        }
    }
}

/// Semitone of a natural note letter relative to C.
fn letter_semitone(c: char) -> Option<i32> {
    match c.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

/// Split a leading root (letter plus one optional `#`/`b`) off a chord symbol.
///
/// Unlike [`PitchClass::normalize`], the `s`/`f` aliases are not accepted here
/// since they collide with chord suffixes like `sus4`.
pub(crate) fn split_root(symbol: &str) -> Option<(PitchClass, &str)> {
    let mut chars = symbol.char_indices();
    let (_, first) = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    let letter = letter_semitone(first)?;
    let after_letter = first.len_utf8();

    match chars.next() {
        Some((_, c @ ('#' | '♯'))) => {
            Some((PitchClass::new(letter + 1), &symbol[after_letter + c.len_utf8()..]))
        }
        Some((_, c @ ('b' | '♭'))) => {
            Some((PitchClass::new(letter - 1), &symbol[after_letter + c.len_utf8()..]))
        }
        _ => Some((PitchClass::new(letter), &symbol[after_letter..])),
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = FretworkError;

    fn from_str(s: &str) -> Result<Self> {
        PitchClass::normalize(s)
    }
}

impl From<PitchClass> for String {
    fn from(pc: PitchClass) -> Self {
        pc.name().to_string()
    }
}

impl TryFrom<String> for PitchClass {
    type Error = FretworkError;

    fn try_from(value: String) -> Result<Self> {
        PitchClass::normalize(&value)
    }
}

/// A pitch class in a concrete octave (scientific pitch notation, C4 = middle C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub pitch_class: PitchClass,
    pub octave: i8,
}

impl Note {
    pub fn new(pitch_class: PitchClass, octave: i8) -> Self {
        Self { pitch_class, octave }
    }

    /// Absolute semitone number (C-1 = 0, C4 = 60), unclamped.
    fn semitone_number(&self) -> i32 {
        (self.octave as i32 + 1) * SEMITONES as i32 + self.pitch_class.value() as i32
    }

    /// Build a note from an absolute semitone number (C4 = 60).
    ///
    /// The octave saturates at the bounds of `i8`.
    pub fn from_semitone_number(number: i32) -> Self {
        let octave =
            (number.div_euclid(SEMITONES as i32) - 1).clamp(i8::MIN as i32, i8::MAX as i32);
        Self {
            pitch_class: PitchClass::new(number),
            octave: octave as i8,
        }
    }

    /// MIDI note number (C4 = 60), clamped to the valid MIDI range 0-127.
    pub fn midi(&self) -> u8 {
        self.semitone_number().clamp(0, 127) as u8
    }

    /// Frequency in Hz under 12-tone equal temperament (A4 = 440 Hz).
    pub fn frequency(&self) -> f64 {
        440.0 * 2f64.powf((self.semitone_number() - 69) as f64 / 12.0)
    }

    /// The same note moved by `semitones`, carrying the octave.
    pub fn transpose(&self, semitones: i32) -> Self {
        Note::from_semitone_number(self.semitone_number().saturating_add(semitones))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sharps_and_flats() {
        let pairs = [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")];
        for (sharp, flat) in pairs {
            assert_eq!(
                PitchClass::normalize(sharp).unwrap(),
                PitchClass::normalize(flat).unwrap(),
                "{} and {} should be the same class",
                sharp,
                flat
            );
        }
    }

    #[test]
    fn test_twelve_distinct_classes() {
        let mut values: Vec<u8> = SHARP_NAMES
            .iter()
            .map(|n| PitchClass::normalize(n).unwrap().value())
            .collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), 12);
    }

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(PitchClass::normalize("Fs").unwrap(), PitchClass::FS);
        assert_eq!(PitchClass::normalize("Bf").unwrap(), PitchClass::AS);
        assert_eq!(PitchClass::normalize("e♭").unwrap(), PitchClass::DS);
        assert_eq!(PitchClass::normalize("E#").unwrap(), PitchClass::F);
        assert_eq!(PitchClass::normalize("B#").unwrap(), PitchClass::C);
        assert_eq!(PitchClass::normalize(" G ").unwrap(), PitchClass::G);
    }

    #[test]
    fn test_normalize_unknown() {
        assert!(matches!(PitchClass::normalize("Xb"), Err(FretworkError::UnknownNote(_))));
        assert!(PitchClass::normalize("").is_err());
        assert!(PitchClass::normalize("Cx").is_err());
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-1), PitchClass::B);
        assert_eq!(PitchClass::A.transpose(27), PitchClass::C);
        assert_eq!(PitchClass::E.interval_to(PitchClass::C), 8);
    }

    #[test]
    fn test_split_root() {
        assert_eq!(split_root("F#m"), Some((PitchClass::FS, "m")));
        assert_eq!(split_root("Bbdim"), Some((PitchClass::AS, "dim")));
        assert_eq!(split_root("Csus4"), Some((PitchClass::C, "sus4")));
        assert_eq!(split_root("G"), Some((PitchClass::G, "")));
        assert_eq!(split_root("Xb"), None);
        assert_eq!(split_root("am"), None);
    }

    #[test]
    fn test_note_midi_and_frequency() {
        let a4 = Note::new(PitchClass::A, 4);
        assert_eq!(a4.midi(), 69);
        assert!((a4.frequency() - 440.0).abs() < 1e-9);

        let c4 = Note::new(PitchClass::C, 4);
        assert_eq!(c4.midi(), 60);
        assert_eq!(c4.to_string(), "C4");

        let b3 = c4.transpose(-1);
        assert_eq!(b3, Note::new(PitchClass::B, 3));
    }

    #[test]
    fn test_transpose_extreme_amounts() {
        // i32::MAX = 7 (mod 12), i32::MIN = 4 (mod 12)
        assert_eq!(PitchClass::B.transpose(i32::MAX), PitchClass::FS);
        assert_eq!(PitchClass::B.transpose(i32::MIN), PitchClass::DS);
        assert_eq!(
            PitchClass::B.transpose(i32::MAX).transpose(i32::MIN),
            PitchClass::AS
        );

        let c4 = Note::new(PitchClass::C, 4);
        assert_eq!(c4.transpose(i32::MAX).octave, i8::MAX);
        assert_eq!(c4.transpose(i32::MIN).octave, i8::MIN);
        assert_eq!(Note::from_semitone_number(i32::MIN).octave, i8::MIN);
    }
}
