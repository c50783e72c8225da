//! # Chord Quality Resolver
//!
//! Parses chord symbols (C, Am, Bdim, G7, Fmaj7, Dsus4, ...) into a root and a
//! quality, and derives the triad intervals used for voicing and playback.
//!
//! ## Suffix Grammar
//! - **Major**: `` (empty), `maj`, `M`
//! - **Minor**: `m`, `min`, `-`
//! - **Diminished**: `dim`, `°`, `o`
//! - **Dominant 7th**: `7` (major triad)
//! - **Major 7th**: `maj7`, `M7` (major triad)
//! - **Minor 7th**: `m7`, `min7`, `-7` (minor triad)
//! - **Sus2 / Sus4**: `sus2`, `sus4`, `sus` (major triad)
//!
//! The extended suffixes only change the display label and [`ChordSymbol::tones`].
//! Voicing search and playback work at triad level through [`triad_intervals`].
//!
//! ```rust
//! use fretwork::{ChordSymbol, PitchClass, Quality};
//!
//! let chord = ChordSymbol::parse("Am").unwrap();
//! assert_eq!(chord.root, PitchClass::A);
//! assert_eq!(chord.quality, Quality::Minor);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::FretworkError;
use crate::note::{split_root, PitchClass};

/// Triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Major, Quality::Minor, Quality::Diminished];
}

/// Suffix beyond the triad, carried for labelling only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Extension {
    Seventh,
    MajorSeventh,
    Sus2,
    Sus4,
}

/// Chord-tone role relative to the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Root,
    Third,
    Fifth,
}

impl Role {
    /// Semitones above the root this role sits at for `quality`.
    pub fn semitones(&self, quality: Quality) -> u8 {
        let (third, fifth) = triad_intervals(quality);
        match self {
            Role::Root => 0,
            Role::Third => third,
            Role::Fifth => fifth,
        }
    }
}

/// Fixed (third, fifth) semitone pair for a triad quality.
///
/// - major (4, 7)
/// - minor (3, 7)
/// - diminished (3, 6)
pub fn triad_intervals(quality: Quality) -> (u8, u8) {
    match quality {
        Quality::Major => (4, 7),
        Quality::Minor => (3, 7),
        Quality::Diminished => (3, 6),
    }
}

/// A parsed chord symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChordSymbol {
    pub root: PitchClass,
    pub quality: Quality,
    pub extension: Option<Extension>,
}

impl ChordSymbol {
    pub fn new(root: PitchClass, quality: Quality) -> Self {
        Self {
            root,
            quality,
            extension: None,
        }
    }

    pub fn with_extension(root: PitchClass, quality: Quality, extension: Extension) -> Self {
        Self {
            root,
            quality,
            extension: Some(extension),
        }
    }

    /// Parse a chord symbol into root and quality.
    ///
    /// Returns `None` when the root is not a note name or the suffix matches
    /// no known pattern. The caller shows "no diagram" rather than failing.
    ///
    /// # Example
    /// ```
    /// use fretwork::{ChordSymbol, Quality, PitchClass};
    ///
    /// assert_eq!(ChordSymbol::parse("Bdim").unwrap().quality, Quality::Diminished);
    /// assert_eq!(ChordSymbol::parse("G").unwrap().root, PitchClass::G);
    /// assert!(ChordSymbol::parse("Xb").is_none());
    /// ```
    pub fn parse(symbol: &str) -> Option<Self> {
        symbol.parse().ok()
    }

    /// Triad intervals of this chord's quality.
    pub fn triad_intervals(&self) -> (u8, u8) {
        triad_intervals(self.quality)
    }

    /// Required triad pitch classes with their roles: root, third, fifth.
    pub fn triad(&self) -> [(Role, PitchClass); 3] {
        [Role::Root, Role::Third, Role::Fifth]
            .map(|role| (role, self.root.transpose(role.semitones(self.quality) as i32)))
    }

    /// Role of `pitch_class` within the triad, if it belongs to it.
    pub fn role_of(&self, pitch_class: PitchClass) -> Option<Role> {
        self.triad()
            .into_iter()
            .find(|(_, pc)| *pc == pitch_class)
            .map(|(role, _)| role)
    }

    /// Full pitch-class content including the extension, root first.
    ///
    /// Sus chords replace the third; seventh chords add a tone on top.
    pub fn tones(&self) -> Vec<PitchClass> {
        let (third, fifth) = self.triad_intervals();
        let mut offsets: Vec<u8> = match self.extension {
            Some(Extension::Sus2) => vec![0, 2, fifth],
            Some(Extension::Sus4) => vec![0, 5, fifth],
            _ => vec![0, third, fifth],
        };
        match self.extension {
            Some(Extension::Seventh) => offsets.push(10),
            Some(Extension::MajorSeventh) => offsets.push(11),
            _ => {}
        }
        offsets
            .into_iter()
            .map(|o| self.root.transpose(o as i32))
            .collect()
    }

    /// Label with the root spelled sharp or flat.
    pub fn label(&self, prefer_flat: bool) -> String {
        format!("{}{}", self.root.spelled(prefer_flat), self.suffix())
    }

    fn suffix(&self) -> &'static str {
        match (self.quality, self.extension) {
            (Quality::Major, None) => "",
            (Quality::Minor, None) => "m",
            (Quality::Diminished, None) => "dim",
            (Quality::Major, Some(Extension::Seventh)) => "7",
            (Quality::Major, Some(Extension::MajorSeventh)) => "maj7",
            (Quality::Minor, Some(Extension::Seventh)) => "m7",
            (Quality::Minor, Some(Extension::MajorSeventh)) => "m(maj7)",
            (Quality::Diminished, Some(Extension::Seventh)) => "m7b5",
            (Quality::Diminished, Some(Extension::MajorSeventh)) => "dim(maj7)",
            (_, Some(Extension::Sus2)) => "sus2",
            (_, Some(Extension::Sus4)) => "sus4",
        }
    }
}

/// Quality and extension for a suffix, or `None` for an unknown suffix.
fn parse_suffix(suffix: &str) -> Option<(Quality, Option<Extension>)> {
    let parsed = match suffix {
        "" | "maj" | "M" => (Quality::Major, None),
        "m" | "min" | "-" => (Quality::Minor, None),
        "dim" | "°" | "o" => (Quality::Diminished, None),
        "7" => (Quality::Major, Some(Extension::Seventh)),
        "maj7" | "M7" => (Quality::Major, Some(Extension::MajorSeventh)),
        "m7" | "min7" | "-7" => (Quality::Minor, Some(Extension::Seventh)),
        "sus2" => (Quality::Major, Some(Extension::Sus2)),
        "sus4" | "sus" => (Quality::Major, Some(Extension::Sus4)),
        _ => return None,
    };
    Some(parsed)
}

impl FromStr for ChordSymbol {
    type Err = FretworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (root, suffix) =
            split_root(trimmed).ok_or_else(|| FretworkError::UnknownNote(trimmed.to_string()))?;
        let (quality, extension) =
            parse_suffix(suffix).ok_or_else(|| FretworkError::MalformedChord(trimmed.to_string()))?;
        Ok(Self {
            root,
            quality,
            extension,
        })
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix())
    }
}

impl Serialize for ChordSymbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triads() {
        assert_eq!(
            ChordSymbol::parse("Am"),
            Some(ChordSymbol::new(PitchClass::A, Quality::Minor))
        );
        assert_eq!(
            ChordSymbol::parse("Bdim"),
            Some(ChordSymbol::new(PitchClass::B, Quality::Diminished))
        );
        assert_eq!(
            ChordSymbol::parse("G"),
            Some(ChordSymbol::new(PitchClass::G, Quality::Major))
        );
        assert_eq!(
            ChordSymbol::parse("F#m"),
            Some(ChordSymbol::new(PitchClass::FS, Quality::Minor))
        );
        assert_eq!(
            ChordSymbol::parse("Ebdim"),
            Some(ChordSymbol::new(PitchClass::DS, Quality::Diminished))
        );
    }

    #[test]
    fn test_parse_extensions_keep_triad() {
        let g7 = ChordSymbol::parse("G7").unwrap();
        assert_eq!(g7.quality, Quality::Major);
        assert_eq!(g7.extension, Some(Extension::Seventh));

        let dm7 = ChordSymbol::parse("Dm7").unwrap();
        assert_eq!(dm7.triad_intervals(), (3, 7));

        let csus4 = ChordSymbol::parse("Csus4").unwrap();
        assert_eq!(csus4.root, PitchClass::C);
        assert_eq!(csus4.triad_intervals(), (4, 7));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(ChordSymbol::parse("Xb"), None);
        assert_eq!(ChordSymbol::parse(""), None);
        assert_eq!(ChordSymbol::parse("Cxyz"), None);
        assert!(matches!(
            "Cxyz".parse::<ChordSymbol>(),
            Err(FretworkError::MalformedChord(_))
        ));
        assert!(matches!(
            "Hm".parse::<ChordSymbol>(),
            Err(FretworkError::UnknownNote(_))
        ));
    }

    #[test]
    fn test_triad_intervals_table() {
        assert_eq!(triad_intervals(Quality::Major), (4, 7));
        assert_eq!(triad_intervals(Quality::Minor), (3, 7));
        assert_eq!(triad_intervals(Quality::Diminished), (3, 6));
    }

    #[test]
    fn test_tones() {
        let cmaj7 = ChordSymbol::parse("Cmaj7").unwrap();
        assert_eq!(
            cmaj7.tones(),
            vec![PitchClass::C, PitchClass::E, PitchClass::G, PitchClass::B]
        );
        let dsus2 = ChordSymbol::parse("Dsus2").unwrap();
        assert_eq!(dsus2.tones(), vec![PitchClass::D, PitchClass::E, PitchClass::A]);
    }

    #[test]
    fn test_role_of() {
        let c = ChordSymbol::new(PitchClass::C, Quality::Major);
        assert_eq!(c.role_of(PitchClass::E), Some(Role::Third));
        assert_eq!(c.role_of(PitchClass::G), Some(Role::Fifth));
        assert_eq!(c.role_of(PitchClass::D), None);
    }

    #[test]
    fn test_display_and_label() {
        assert_eq!(ChordSymbol::parse("Bbm").unwrap().to_string(), "A#m");
        assert_eq!(ChordSymbol::parse("Bbm").unwrap().label(true), "Bbm");
        assert_eq!(ChordSymbol::parse("Cmaj7").unwrap().to_string(), "Cmaj7");
        assert_eq!(ChordSymbol::parse("B°").unwrap().to_string(), "Bdim");

        let bm7b5 =
            ChordSymbol::with_extension(PitchClass::B, Quality::Diminished, Extension::Seventh);
        assert_eq!(bm7b5.to_string(), "Bm7b5");
        assert_eq!(
            bm7b5.tones(),
            vec![PitchClass::B, PitchClass::D, PitchClass::F, PitchClass::A]
        );
    }
}
