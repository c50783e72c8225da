//! # Fretboard Geometry
//!
//! Six-string instrument geometry: open-string tuning, fret limit, and the
//! scale-membership grid consumed by scale renderers.
//!
//! Strings are numbered the guitar way: string 6 is the lowest-pitched
//! (low E in standard tuning), string 1 the highest.
//!
//! ```text
//! string  6   5   4   3   2   1
//! open    E2  A2  D3  G3  B3  E4
//! ```

use serde::Serialize;

use crate::error::{FretworkError, Result};
use crate::note::{Note, PitchClass};
use crate::scale::{is_in_scale, ScaleType};

/// Number of strings on the instrument
pub const STRING_COUNT: u8 = 6;

/// Highest fret on a full-size neck
pub const MAX_FRET: u8 = 24;

/// Open-string notes, indexed low to high (string 6 first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tuning {
    pub open: [Note; STRING_COUNT as usize],
}

impl Tuning {
    /// Standard tuning E2 A2 D3 G3 B3 E4
    pub const STANDARD: Tuning = Tuning {
        open: [
            Note { pitch_class: PitchClass::E, octave: 2 },
            Note { pitch_class: PitchClass::A, octave: 2 },
            Note { pitch_class: PitchClass::D, octave: 3 },
            Note { pitch_class: PitchClass::G, octave: 3 },
            Note { pitch_class: PitchClass::B, octave: 3 },
            Note { pitch_class: PitchClass::E, octave: 4 },
        ],
    };

    /// Build a tuning from six note names, lowest string first.
    ///
    /// The lowest string is placed in octave 2; every following string is the
    /// nearest note strictly above the previous one.
    ///
    /// # Example
    /// ```
    /// use fretwork::Tuning;
    ///
    /// let drop_d = Tuning::from_names(&["D", "A", "D", "G", "B", "E"]).unwrap();
    /// assert_eq!(drop_d.open[0].to_string(), "D2");
    /// assert_eq!(drop_d.open[5].to_string(), "E4");
    /// ```
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.len() != STRING_COUNT as usize {
            return Err(FretworkError::ConfigError(format!(
                "tuning needs {} strings, got {}",
                STRING_COUNT,
                names.len()
            )));
        }

        let mut open = [Note::new(PitchClass::C, 2); STRING_COUNT as usize];
        let mut previous: Option<Note> = None;
        for (slot, name) in open.iter_mut().zip(names) {
            let pitch_class = PitchClass::normalize(name.as_ref())?;
            let note = match previous {
                None => Note::new(pitch_class, 2),
                Some(prev) => {
                    let step = prev.pitch_class.interval_to(pitch_class);
                    prev.transpose(if step == 0 { 12 } else { step as i32 })
                }
            };
            *slot = note;
            previous = Some(note);
        }

        Ok(Self { open })
    }

    /// Open note of `string` (1-6), if the string exists.
    pub fn open_note(&self, string: u8) -> Option<Note> {
        if !(1..=STRING_COUNT).contains(&string) {
            return None;
        }
        Some(self.open[(STRING_COUNT - string) as usize])
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

/// A tuned neck with a fret limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fretboard {
    pub tuning: Tuning,
    pub fret_limit: u8,
}

impl Fretboard {
    pub fn new(tuning: Tuning, fret_limit: u8) -> Self {
        Self {
            tuning,
            fret_limit: fret_limit.min(MAX_FRET),
        }
    }

    /// Standard tuning, 24 frets
    pub fn standard() -> Self {
        Self::new(Tuning::STANDARD, MAX_FRET)
    }

    /// String numbers from lowest-pitched to highest: 6, 5, ..., 1
    pub fn strings_low_to_high() -> impl Iterator<Item = u8> {
        (1..=STRING_COUNT).rev()
    }

    /// Sounding note at `string`/`fret`, or `None` off the neck.
    pub fn note_at(&self, string: u8, fret: u8) -> Option<Note> {
        if fret > self.fret_limit {
            return None;
        }
        self.tuning
            .open_note(string)
            .map(|open| open.transpose(fret as i32))
    }

    /// Pitch class at `string`/`fret`, or `None` off the neck.
    pub fn pitch_at(&self, string: u8, fret: u8) -> Option<PitchClass> {
        self.note_at(string, fret).map(|note| note.pitch_class)
    }

    /// Scale-membership grid for frets `0..=max_fret` on every string.
    ///
    /// `max_fret` is capped at the fret limit.
    pub fn scale_positions(&self, root: PitchClass, scale: ScaleType, max_fret: u8) -> ScaleGrid {
        let last_fret = max_fret.min(self.fret_limit);
        let strings = Self::strings_low_to_high()
            .map(|string| StringRow {
                string,
                cells: (0..=last_fret)
                    .filter_map(|fret| {
                        let pitch_class = self.pitch_at(string, fret)?;
                        Some(ScaleCell {
                            fret,
                            pitch_class,
                            in_scale: is_in_scale(root, scale, pitch_class),
                            is_root: pitch_class == root,
                        })
                    })
                    .collect(),
            })
            .collect();

        ScaleGrid {
            root,
            scale,
            max_fret: last_fret,
            strings,
        }
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Fretboard::standard()
    }
}

/// One (string, fret) cell of a scale grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleCell {
    pub fret: u8,
    pub pitch_class: PitchClass,
    pub in_scale: bool,
    pub is_root: bool,
}

/// All cells of one string, fret 0 first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringRow {
    pub string: u8,
    pub cells: Vec<ScaleCell>,
}

/// Scale-membership grid for a scale renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleGrid {
    pub root: PitchClass,
    pub scale: ScaleType,
    pub max_fret: u8,
    /// Rows from string 6 down to string 1
    pub strings: Vec<StringRow>,
}

impl ScaleGrid {
    /// Whether the cell at `string`/`fret` belongs to the scale.
    pub fn contains(&self, string: u8, fret: u8) -> bool {
        self.strings
            .iter()
            .find(|row| row.string == string)
            .and_then(|row| row.cells.get(fret as usize))
            .map_or(false, |cell| cell.in_scale)
    }
}
