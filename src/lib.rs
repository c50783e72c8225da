pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod key;
pub mod note;
pub mod playback;
pub mod scale;
pub mod voicing;

pub use api::{chord_view, progression_view, scale_view, ChordView, ScaleView};
pub use chord::{triad_intervals, ChordSymbol, Extension, Quality, Role};
pub use config::{Config, RawConfig};
pub use error::*;
pub use fretboard::{Fretboard, ScaleCell, ScaleGrid, StringRow, Tuning, MAX_FRET, STRING_COUNT};
pub use key::{chord_for_numeral, diatonic_chords, resolve_numeral, Key, Numeral, ProgressionPreset};
pub use note::{Note, PitchClass};
pub use scale::{is_in_scale, scale_notes, ScaleType};
pub use voicing::{find_voicing, find_voicing_on, Voicing};

/// Pitch classes of a scale given by name, e.g. `scale_by_name("A", "minor-pentatonic")`.
pub fn scale_by_name(root: &str, scale: &str) -> Result<Vec<PitchClass>> {
    let root = PitchClass::normalize(root)?;
    let scale: ScaleType = scale.parse()?;
    Ok(scale_notes(root, scale))
}

/// Transpose a chord symbol by `semitones`, keeping its quality and extension.
///
/// Returns `None` for an unreadable symbol.
pub fn transpose_chord(symbol: &str, semitones: i32) -> Option<ChordSymbol> {
    let chord = ChordSymbol::parse(symbol)?;
    Some(ChordSymbol {
        root: chord.root.transpose(semitones),
        ..chord
    })
}
