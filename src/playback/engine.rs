//! Progression sequencing engine
//!
//! Resolves numeral lists into chord sequences and steps through them
//! cyclically on an external clock.

use tracing::debug;

use crate::chord::ChordSymbol;
use crate::key::{resolve_numeral, Key, ProgressionPreset};
use crate::note::Note;
use super::types::{Step, StepSink, TriadNotes};

/// Resolve numerals in `key` to a chord sequence.
///
/// Unknown numerals are dropped, so the result may be shorter than the input.
///
/// # Example
/// ```rust
/// use fretwork::playback::resolve;
/// use fretwork::{ChordSymbol, Key, PitchClass};
///
/// let chords = resolve(Key::new(PitchClass::C), &["I", "IV", "bogus", "V"]);
/// let names: Vec<String> = chords.iter().map(ChordSymbol::to_string).collect();
/// assert_eq!(names, vec!["C", "F", "G"]);
/// ```
pub fn resolve<S: AsRef<str>>(key: Key, numerals: &[S]) -> Vec<ChordSymbol> {
    numerals
        .iter()
        .filter_map(|numeral| resolve_numeral(key, numeral.as_ref()))
        .collect()
}

/// Root, third and fifth of `chord` as concrete notes with the root in `octave`.
///
/// A third or fifth whose pitch class is numerically below the root's is
/// placed one octave higher so it never sounds under the root.
///
/// # Example
/// ```rust
/// use fretwork::playback::step_pitches;
/// use fretwork::ChordSymbol;
///
/// let a = ChordSymbol::parse("A").unwrap();
/// let notes = step_pitches(&a, 3);
/// assert_eq!(notes.root.to_string(), "A3");
/// assert_eq!(notes.third.to_string(), "C#4");
/// assert_eq!(notes.fifth.to_string(), "E4");
/// ```
pub fn step_pitches(chord: &ChordSymbol, octave: i8) -> TriadNotes {
    let (third, fifth) = chord.triad_intervals();
    let place = |semitones: u8| {
        let pitch_class = chord.root.transpose(semitones as i32);
        if pitch_class.value() < chord.root.value() {
            Note::new(pitch_class, octave.saturating_add(1))
        } else {
            Note::new(pitch_class, octave)
        }
    };

    TriadNotes {
        root: Note::new(chord.root, octave),
        third: place(third),
        fifth: place(fifth),
    }
}

/// Clock period in milliseconds for a step lasting `beats_per_step` beats at `tempo` BPM.
///
/// A tempo of 0 yields 0.0 rather than dividing by zero.
pub fn step_duration_ms(tempo: u16, beats_per_step: f64) -> f64 {
    if tempo == 0 {
        return 0.0;
    }
    60_000.0 / tempo as f64 * beats_per_step
}

/// Cyclic step sequencer over a resolved chord list
///
/// Holds no state beyond the chord list and the step index. The index only
/// moves on [`Sequencer::tick`] / [`Sequencer::advance`], wraps modulo the
/// sequence length, and resets to 0 whenever the sequence is swapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer {
    chords: Vec<ChordSymbol>,
    octave: i8,
    index: usize,
    restarted: bool,
}

impl Sequencer {
    pub fn new(chords: Vec<ChordSymbol>, octave: i8) -> Self {
        Self {
            chords,
            octave,
            index: 0,
            restarted: false,
        }
    }

    /// Sequencer over numerals resolved in `key`.
    pub fn from_numerals<S: AsRef<str>>(key: Key, numerals: &[S], octave: i8) -> Self {
        Self::new(resolve(key, numerals), octave)
    }

    /// Sequencer over a progression preset in `key`.
    pub fn from_preset(key: Key, preset: ProgressionPreset, octave: i8) -> Self {
        Self::new(preset.chords(key), octave)
    }

    pub fn chords(&self) -> &[ChordSymbol] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Index of the step the next tick plays
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next step, wrapping to 0 after the last one.
    pub fn advance(&mut self) -> usize {
        if !self.chords.is_empty() {
            self.index = (self.index + 1) % self.chords.len();
        }
        self.index
    }

    /// Step at the current index without moving.
    pub fn current(&self) -> Option<Step> {
        let chord = self.chords.get(self.index)?;
        Some(Step {
            index: self.index,
            chord: *chord,
            notes: step_pitches(chord, self.octave),
            restarted: self.restarted,
        })
    }

    /// Play the current step and advance. `None` for an empty sequence.
    pub fn tick(&mut self) -> Option<Step> {
        let step = self.current()?;
        self.restarted = false;
        self.advance();
        Some(step)
    }

    /// Tick and hand the step to `sink`, releasing held notes first after a restart.
    pub fn tick_into<K: StepSink>(&mut self, sink: &mut K) -> Option<Step> {
        let step = self.tick()?;
        if step.restarted {
            sink.release_all();
        }
        sink.trigger(&step);
        Some(step)
    }

    /// Swap in a new chord list and start again from index 0.
    ///
    /// The next step is flagged `restarted` so the clock owner silences the
    /// old chord before the new one attacks.
    pub fn restart(&mut self, chords: Vec<ChordSymbol>) {
        debug!(from = self.chords.len(), to = chords.len(), "progression restarted");
        self.chords = chords;
        self.index = 0;
        self.restarted = true;
    }

    /// Re-resolve numerals in a (possibly new) key and restart.
    pub fn restart_with<S: AsRef<str>>(&mut self, key: Key, numerals: &[S]) {
        let chords = resolve(key, numerals);
        if chords.len() < numerals.len() {
            debug!(
                dropped = numerals.len() - chords.len(),
                "unresolved numerals dropped from progression"
            );
        }
        self.restart(chords);
    }

    /// Change the playback octave; takes effect on the next step.
    pub fn set_octave(&mut self, octave: i8) {
        self.octave = octave;
    }
}
