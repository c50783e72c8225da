//! Voicing type definitions
//!
//! Output records handed to fretboard renderers.

use serde::Serialize;

use crate::chord::{ChordSymbol, Role};
use crate::fretboard::STRING_COUNT;

/// Shape families, named after the open chord they are derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeFamily {
    /// Rooted on string 6 (open E chord shape)
    EShape,
    /// Rooted on string 5 (open A chord shape)
    AShape,
}

/// A sounded string in a voicing
///
/// # Fields
/// - `string`: string number, 6 = lowest
/// - `fret`: absolute fret (0 = open)
/// - `role`: which chord tone the string sounds
/// - `open`: true when the string was added as an open string rather than
///   coming from the shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub string: u8,
    pub fret: u8,
    pub role: Role,
    pub open: bool,
}

/// A barre across a contiguous range of strings
///
/// `high_string` is the higher-numbered (lower-pitched) end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub fret: u8,
    pub high_string: u8,
    pub low_string: u8,
}

impl Barre {
    /// Whether `string` lies under this barre.
    pub fn covers(&self, string: u8) -> bool {
        (self.low_string..=self.high_string).contains(&string)
    }
}

/// A concrete, playable chord diagram
///
/// # Fields
/// - `chord`: the chord this voicing realises
/// - `family`: shape family the voicing was transposed from
/// - `anchor_string`: string carrying the root the shape is anchored to
/// - `root_fret`: fret of the anchor root (the transposition amount)
/// - `positions`: sounded strings, shape positions first, then added open strings
/// - `barres`: barres at absolute frets
/// - `muted`: strings that must not sound
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    pub chord: ChordSymbol,
    pub family: ShapeFamily,
    pub anchor_string: u8,
    pub root_fret: u8,
    pub positions: Vec<Position>,
    pub barres: Vec<Barre>,
    pub muted: Vec<u8>,
}

impl Voicing {
    /// Position on `string`, if it sounds.
    pub fn position(&self, string: u8) -> Option<&Position> {
        self.positions.iter().find(|p| p.string == string)
    }

    /// Fret per string from string 6 to string 1; `None` for strings that do not sound.
    pub fn frets(&self) -> [Option<u8>; STRING_COUNT as usize] {
        let mut frets = [None; STRING_COUNT as usize];
        for position in &self.positions {
            if (1..=STRING_COUNT).contains(&position.string) {
                frets[(STRING_COUNT - position.string) as usize] = Some(position.fret);
            }
        }
        frets
    }

    /// Compact tab notation, low string first: `x32010` for open C.
    ///
    /// Frets above 9 switch to a dash-separated form: `8-10-10-9-8-8`.
    pub fn tab(&self) -> String {
        let frets = self.frets();
        let cells: Vec<String> = frets
            .iter()
            .map(|f| f.map_or_else(|| "x".to_string(), |fret| fret.to_string()))
            .collect();
        if frets.iter().flatten().any(|&fret| fret > 9) {
            cells.join("-")
        } else {
            cells.concat()
        }
    }
}
