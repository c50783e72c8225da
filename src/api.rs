//! # Public API
//!
//! One-call entry points that run the whole pipeline for a UI layer.
//!
//! ```text
//! key + numerals ──► resolve ──► chord symbols ──┬─► step_pitches ──► notes (audio)
//!                                                └─► find_voicing  ──► diagram (display)
//! ```
//!
//! ## Functions
//! - [`progression_view()`] - diagrams and notes for every chord of a progression
//! - [`chord_view()`] - diagram and notes for one chord symbol
//! - [`scale_view()`] - scale notes plus the fretboard membership grid
//!
//! ## Typical Usage
//! ```rust
//! use fretwork::{progression_view, Fretboard, Key, PitchClass};
//!
//! let views = progression_view(&Fretboard::standard(), Key::new(PitchClass::G), &["I", "V", "vi", "IV"], 3);
//! let labels: Vec<&str> = views.iter().map(|v| v.label.as_str()).collect();
//! assert_eq!(labels, vec!["G", "D", "Em", "C"]);
//! assert!(views.iter().all(|v| v.voicing.is_some()));
//! ```

use serde::Serialize;

use crate::chord::ChordSymbol;
use crate::fretboard::{Fretboard, ScaleGrid};
use crate::key::Key;
use crate::note::PitchClass;
use crate::playback::{resolve, step_pitches, TriadNotes};
use crate::scale::{scale_notes, ScaleType};
use crate::voicing::{find_voicing_on, Voicing};

/// Everything a UI needs to show and play one chord
///
/// `voicing` is `None` when no diagram is available for the chord.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordView {
    pub chord: ChordSymbol,
    pub label: String,
    pub notes: TriadNotes,
    pub voicing: Option<Voicing>,
}

/// Scale notes and fretboard grid for a scale renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleView {
    pub notes: Vec<String>,
    pub grid: ScaleGrid,
}

fn view_for(board: &Fretboard, chord: ChordSymbol, prefer_flat: bool, octave: i8) -> ChordView {
    ChordView {
        chord,
        label: chord.label(prefer_flat),
        notes: step_pitches(&chord, octave),
        voicing: find_voicing_on(board, &chord),
    }
}

/// Diagram and notes for a single chord symbol; `None` if the symbol is unreadable.
pub fn chord_view(board: &Fretboard, symbol: &str, octave: i8) -> Option<ChordView> {
    let chord = ChordSymbol::parse(symbol)?;
    let prefer_flat = symbol.contains('b') || symbol.contains('♭');
    Some(view_for(board, chord, prefer_flat, octave))
}

/// Diagrams and notes for every resolvable numeral of a progression.
///
/// Unknown numerals are dropped; labels follow the key's spelling.
pub fn progression_view<S: AsRef<str>>(
    board: &Fretboard,
    key: Key,
    numerals: &[S],
    octave: i8,
) -> Vec<ChordView> {
    resolve(key, numerals)
        .into_iter()
        .map(|chord| view_for(board, chord, key.prefers_flats(), octave))
        .collect()
}

/// Scale notes spelled for the root, plus the membership grid up to `max_fret`.
pub fn scale_view(board: &Fretboard, root: PitchClass, scale: ScaleType, max_fret: u8) -> ScaleView {
    let prefer_flat = Key::new(root).prefers_flats();
    ScaleView {
        notes: scale_notes(root, scale)
            .iter()
            .map(|pc| pc.spelled(prefer_flat).to_string())
            .collect(),
        grid: board.scale_positions(root, scale, max_fret),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_view() {
        let view = chord_view(&Fretboard::standard(), "Bbm", 3).unwrap();
        assert_eq!(view.label, "Bbm");
        assert_eq!(view.notes.root.to_string(), "A#3");
        assert!(view.voicing.is_some());

        assert!(chord_view(&Fretboard::standard(), "Xb", 3).is_none());
    }

    #[test]
    fn test_progression_view_in_flat_key() {
        let key: Key = "F".parse().unwrap();
        let views = progression_view(&Fretboard::standard(), key, &["I", "IV", "vii°"], 3);
        let labels: Vec<&str> = views.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["F", "Bb", "Edim"]);
    }

    #[test]
    fn test_scale_view() {
        let view = scale_view(&Fretboard::standard(), PitchClass::F, ScaleType::Major, 5);
        assert_eq!(view.notes, vec!["F", "G", "A", "Bb", "C", "D", "E"]);
        assert_eq!(view.grid.max_fret, 5);
    }
}
