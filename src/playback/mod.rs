//! # Playback Module
//!
//! Turn a key and a numeral list into a cyclic chord sequence with concrete
//! notes per step, for an external playback clock.
//!
//! ## Purpose
//! The host owns the clock and the synthesizer. On every clock tick it asks
//! the [`Sequencer`] for the next [`Step`]: the step index (for highlighting
//! the current chord) and a root/third/fifth [`TriadNotes`] triple to trigger.
//!
//! ## Sub-modules
//! - `types` - Step, TriadNotes, StepSink
//! - `engine` - numeral resolution, note placement, the Sequencer
//!
//! ## Example
//! ```rust
//! use fretwork::playback::Sequencer;
//! use fretwork::{Key, PitchClass};
//!
//! let mut seq = Sequencer::from_numerals(Key::new(PitchClass::C), &["I", "IV", "V", "I"], 3);
//!
//! let first = seq.tick().unwrap();
//! assert_eq!(first.index, 0);
//! assert_eq!(first.chord.to_string(), "C");
//! assert_eq!(first.notes.midi_notes(), vec![48, 52, 55]);
//! ```
//!
//! ## Restarts
//! Swapping the chord list (new key, edited numerals) resets the index to 0
//! and flags the next step as `restarted`. Notes from the old sequence must be
//! released before that step fires; [`Sequencer::tick_into`] does this through
//! the [`StepSink`] the host passes in.

mod types;
mod engine;


pub use types::{Step, StepSink, TriadNotes};
pub use engine::{resolve, step_duration_ms, step_pitches, Sequencer};
