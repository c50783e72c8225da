//! Playback type definitions
//!
//! Records handed to the external playback clock.

use serde::Serialize;

use crate::chord::ChordSymbol;
use crate::note::Note;

/// Concrete root/third/fifth notes for one chord attack
///
/// Third and fifth never sound below the root: when their pitch class wraps
/// past B they move up an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriadNotes {
    pub root: Note,
    pub third: Note,
    pub fifth: Note,
}

impl TriadNotes {
    /// Notes in ascending order, for synthesizers that take a list
    pub fn to_vec(&self) -> Vec<Note> {
        vec![self.root, self.third, self.fifth]
    }

    /// MIDI note numbers in ascending order
    pub fn midi_notes(&self) -> Vec<u8> {
        self.to_vec().iter().map(Note::midi).collect()
    }

    /// Frequencies in Hz in ascending order
    pub fn frequencies(&self) -> Vec<f64> {
        self.to_vec().iter().map(Note::frequency).collect()
    }
}

/// One step of a cyclic progression
///
/// # Fields
/// - `index`: position in the sequence, for visual synchronisation
/// - `chord`: the chord sounding on this step
/// - `notes`: concrete notes to trigger
/// - `restarted`: true on the first step after the sequence was swapped;
///   the clock owner must release everything still sounding before triggering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub index: usize,
    pub chord: ChordSymbol,
    pub notes: TriadNotes,
    pub restarted: bool,
}

/// Receiver for sequencer steps, owned by the host audio layer
///
/// Synth handles and transport state live behind this trait, never inside
/// the sequencer.
pub trait StepSink {
    /// Silence every note triggered so far.
    fn release_all(&mut self);

    /// Trigger the notes of `step`.
    fn trigger(&mut self, step: &Step);
}
