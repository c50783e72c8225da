//! # Keys and Roman Numerals
//!
//! Maps a major key to its seven diatonic chords and resolves Roman numerals
//! (I, ii, iii, IV, V, vi, vii°) to chord symbols within that key.
//!
//! ## Diatonic Chords
//! The chords sit on the seven scale degrees of the major scale with the fixed
//! quality pattern major, minor, minor, major, major, minor, diminished:
//!
//! ```text
//! degree   0    1    2     3    4    5    6
//! numeral  I    ii   iii   IV   V    vi   vii°
//! C major  C    Dm   Em    F    G    Am   Bdim
//! ```
//!
//! ## Progression Presets
//! [`ProgressionPreset`] is a closed table of common numeral sequences
//! (pop, doo-wop, ballad, twelve-bar blues, ii-V-I, canon).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::chord::{ChordSymbol, Quality};
use crate::error::FretworkError;
use crate::note::PitchClass;
use crate::scale::{scale_notes, ScaleType};

/// Triad quality on each degree of the major scale
const DEGREE_QUALITIES: [Quality; 7] = [
    Quality::Major,
    Quality::Minor,
    Quality::Minor,
    Quality::Major,
    Quality::Major,
    Quality::Minor,
    Quality::Diminished,
];

/// A major key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Key {
    pub tonic: PitchClass,
}

impl Key {
    pub fn new(tonic: PitchClass) -> Self {
        Self { tonic }
    }

    /// Flat-side keys (F, Bb, Eb, Ab, Db) spell their notes with flats.
    pub fn prefers_flats(&self) -> bool {
        matches!(self.tonic.value(), 5 | 10 | 3 | 8 | 1)
    }

    /// Tonic spelled the way the key is conventionally written.
    pub fn name(&self) -> &'static str {
        self.tonic.spelled(self.prefers_flats())
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::new(PitchClass::C)
    }
}

impl FromStr for Key {
    type Err = FretworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Key::new(PitchClass::normalize(s)?))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} major", self.name())
    }
}

/// Roman numeral for a diatonic degree of a major key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeral {
    I,
    Ii,
    Iii,
    IV,
    V,
    Vi,
    Vii,
}

impl Numeral {
    pub const ALL: [Numeral; 7] = [
        Numeral::I,
        Numeral::Ii,
        Numeral::Iii,
        Numeral::IV,
        Numeral::V,
        Numeral::Vi,
        Numeral::Vii,
    ];

    /// Scale-degree index (0-6) into the major scale
    pub fn degree(&self) -> usize {
        match self {
            Numeral::I => 0,
            Numeral::Ii => 1,
            Numeral::Iii => 2,
            Numeral::IV => 3,
            Numeral::V => 4,
            Numeral::Vi => 5,
            Numeral::Vii => 6,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Numeral::I => "I",
            Numeral::Ii => "ii",
            Numeral::Iii => "iii",
            Numeral::IV => "IV",
            Numeral::V => "V",
            Numeral::Vi => "vi",
            Numeral::Vii => "vii°",
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Numeral {
    type Err = FretworkError;

    /// Case matters: `ii` is the minor supertonic, `II` is not in the table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "I" => Ok(Numeral::I),
            "ii" => Ok(Numeral::Ii),
            "iii" => Ok(Numeral::Iii),
            "IV" => Ok(Numeral::IV),
            "V" => Ok(Numeral::V),
            "vi" => Ok(Numeral::Vi),
            "vii°" | "viio" | "vii0" | "viidim" => Ok(Numeral::Vii),
            other => Err(FretworkError::UnknownNumeral(other.to_string())),
        }
    }
}

impl Serialize for Numeral {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// The seven diatonic chords of `key`, in degree order I..vii°.
pub fn diatonic_chords(key: Key) -> Vec<ChordSymbol> {
    scale_notes(key.tonic, ScaleType::Major)
        .into_iter()
        .zip(DEGREE_QUALITIES)
        .map(|(root, quality)| ChordSymbol::new(root, quality))
        .collect()
}

/// Chord for a parsed numeral in `key`.
pub fn chord_for_numeral(key: Key, numeral: Numeral) -> ChordSymbol {
    let degree = numeral.degree();
    let root = key
        .tonic
        .transpose(ScaleType::Major.intervals()[degree] as i32);
    ChordSymbol::new(root, DEGREE_QUALITIES[degree])
}

/// Resolve a numeral string to its chord in `key`.
///
/// Unknown numerals yield `None`; callers drop them from playable sequences.
///
/// # Example
/// ```
/// use fretwork::{resolve_numeral, ChordSymbol, Key, PitchClass};
///
/// let g = Key::new(PitchClass::G);
/// assert_eq!(resolve_numeral(g, "vi"), ChordSymbol::parse("Em"));
/// assert_eq!(resolve_numeral(g, "VIII"), None);
/// ```
pub fn resolve_numeral(key: Key, numeral: &str) -> Option<ChordSymbol> {
    match numeral.parse::<Numeral>() {
        Ok(n) => Some(chord_for_numeral(key, n)),
        Err(e) => {
            debug!(key = %key, "{}", e);
            None
        }
    }
}

/// Common progressions as fixed numeral sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressionPreset {
    /// I-V-vi-IV
    #[default]
    Pop,
    /// I-vi-IV-V
    DooWop,
    /// I-IV-vi-V
    Ballad,
    /// Twelve-bar blues on the diatonic triads
    Blues,
    /// ii-V-I
    Jazz,
    /// I-V-vi-iii-IV-I-IV-V
    Canon,
}

impl ProgressionPreset {
    pub const ALL: [ProgressionPreset; 6] = [
        ProgressionPreset::Pop,
        ProgressionPreset::DooWop,
        ProgressionPreset::Ballad,
        ProgressionPreset::Blues,
        ProgressionPreset::Jazz,
        ProgressionPreset::Canon,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ProgressionPreset::Pop => "pop",
            ProgressionPreset::DooWop => "doo-wop",
            ProgressionPreset::Ballad => "ballad",
            ProgressionPreset::Blues => "blues",
            ProgressionPreset::Jazz => "jazz",
            ProgressionPreset::Canon => "canon",
        }
    }

    pub fn numerals(&self) -> &'static [Numeral] {
        use Numeral::*;

        match self {
            ProgressionPreset::Pop => &[I, V, Vi, IV],
            ProgressionPreset::DooWop => &[I, Vi, IV, V],
            ProgressionPreset::Ballad => &[I, IV, Vi, V],
            ProgressionPreset::Blues => &[I, I, I, I, IV, IV, I, I, V, IV, I, I],
            ProgressionPreset::Jazz => &[Ii, V, I],
            ProgressionPreset::Canon => &[I, V, Vi, Iii, IV, I, IV, V],
        }
    }

    /// Chords of this preset in `key`.
    pub fn chords(&self, key: Key) -> Vec<ChordSymbol> {
        self.numerals()
            .iter()
            .map(|&n| chord_for_numeral(key, n))
            .collect()
    }
}

impl FromStr for ProgressionPreset {
    type Err = FretworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        ProgressionPreset::ALL
            .iter()
            .copied()
            .find(|p| p.id() == id)
            .ok_or_else(|| FretworkError::UnknownPreset(s.to_string()))
    }
}
