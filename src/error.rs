//! # Error Types
//!
//! This module defines the error type for the fretwork engine.
//!
//! Most lookups in the engine do not fail loudly: an unknown numeral is dropped
//! from a progression and a chord without a playable shape yields `None`. The
//! variants below are used where a caller asked for something by name and
//! needs to know why it could not be resolved (note names, scale names, config
//! files, CLI arguments).
//!
//! ## Error Types
//! - `UnknownNote` - a note name that is not one of the 12 pitch classes
//! - `UnknownNumeral` - a Roman numeral outside I, ii, iii, IV, V, vi, vii°
//! - `UnknownPreset` - a progression preset id that is not in the table
//! - `UnknownScale` - a scale name that is not in the catalogue
//! - `MalformedChord` - a chord symbol whose root cannot be read
//! - `NoVoicing` - no shape family anchors the chord on the fretboard
//! - `ConfigError` - a configuration value is out of range
//!
//! ## Usage
//! ```rust
//! use fretwork::{PitchClass, FretworkError};
//!
//! match PitchClass::normalize("H") {
//!     Ok(pc) => println!("pitch class {}", pc),
//!     Err(FretworkError::UnknownNote(name)) => eprintln!("no such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretworkError {
    /// Note name that does not map to any pitch class.
    ///
    /// # Example
    /// ```
    /// # use fretwork::FretworkError;
    /// let err = FretworkError::UnknownNote("Xb".to_string());
    /// assert_eq!(err.to_string(), "Unknown note name: Xb");
    /// ```
    #[error("Unknown note name: {0}")]
    UnknownNote(String),

    /// Roman numeral with no diatonic degree.
    #[error("Unknown numeral: {0}")]
    UnknownNumeral(String),

    /// Progression preset id not found in the preset table.
    #[error("Unknown progression preset: {0}")]
    UnknownPreset(String),

    /// Scale name not found in the scale catalogue.
    #[error("Unknown scale: {0}")]
    UnknownScale(String),

    /// Chord symbol whose root could not be parsed.
    #[error("Malformed chord symbol: {0}")]
    MalformedChord(String),

    /// No shape family anchors this chord within the searched fret range.
    ///
    /// # Example
    /// ```
    /// # use fretwork::FretworkError;
    /// let err = FretworkError::NoVoicing("Bdim".to_string());
    /// assert_eq!(err.to_string(), "No playable voicing for Bdim");
    /// ```
    #[error("No playable voicing for {0}")]
    NoVoicing(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FretworkError>;
