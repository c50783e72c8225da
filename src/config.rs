//! # Configuration
//!
//! YAML configuration for the engine's host: key, scale, progression, tempo,
//! playback octave and instrument.
//!
//! Parsing is two-stage. [`RawConfig`] mirrors the file with optional fields;
//! [`Config::from_raw`] validates it into typed values and fills defaults.
//!
//! ## Example
//! ```yaml
//! key: Bb
//! scale: minor-pentatonic
//! progression: I vi IV V
//! tempo: 96
//! octave: 3
//! tuning: D A D G B E
//! fret-limit: 22
//! ```
//!
//! ## Defaults
//! key C, scale major, preset `pop` (I-V-vi-IV), tempo 120, octave 3,
//! standard tuning, 24 frets.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::chord::ChordSymbol;
use crate::error::{FretworkError, Result};
use crate::fretboard::{Fretboard, Tuning, MAX_FRET};
use crate::key::{chord_for_numeral, Key, Numeral, ProgressionPreset};
use crate::playback::Sequencer;
use crate::scale::ScaleType;

pub const DEFAULT_TEMPO: u16 = 120;
pub const DEFAULT_OCTAVE: i8 = 3;

const TEMPO_RANGE: std::ops::RangeInclusive<u16> = 20..=300;
const OCTAVE_RANGE: std::ops::RangeInclusive<i8> = 0..=8;
const FRET_LIMIT_RANGE: std::ops::RangeInclusive<u8> = 12..=MAX_FRET;

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub key: Option<String>,
    pub scale: Option<String>,
    /// Numerals separated by spaces, commas or dashes: "I-V-vi-IV"
    pub progression: Option<String>,
    /// Preset id, used when no explicit progression is given
    pub preset: Option<String>,
    pub tempo: Option<u16>,
    pub octave: Option<i8>,
    /// Six note names, lowest string first: "E A D G B E"
    pub tuning: Option<String>,
    pub fret_limit: Option<u8>,
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub key: Key,
    pub scale: ScaleType,
    pub progression: Vec<Numeral>,
    pub tempo: u16,
    pub octave: i8,
    pub fretboard: Fretboard,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key: Key::default(),
            scale: ScaleType::default(),
            progression: ProgressionPreset::default().numerals().to_vec(),
            tempo: DEFAULT_TEMPO,
            octave: DEFAULT_OCTAVE,
            fretboard: Fretboard::standard(),
        }
    }
}

impl Config {
    /// Parse and validate a YAML document.
    ///
    /// # Example
    /// ```
    /// use fretwork::Config;
    ///
    /// let config = Config::from_yaml("key: G\npreset: jazz\ntempo: 90").unwrap();
    /// assert_eq!(config.key.name(), "G");
    /// assert_eq!(config.progression.len(), 3);
    /// assert_eq!(config.tempo, 90);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig = serde_yaml::from_str(source)?;
        Self::from_raw(raw)
    }

    /// Read, parse and validate a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    /// Validate raw values and fill defaults.
    pub fn from_raw(raw: RawConfig) -> Result<Self> {
        let defaults = Self::default();

        let key = match raw.key {
            Some(name) => name.parse()?,
            None => defaults.key,
        };

        let scale = match raw.scale {
            Some(name) => name.parse()?,
            None => defaults.scale,
        };

        let progression = match (raw.progression, raw.preset) {
            (Some(_), Some(_)) => {
                return Err(FretworkError::ConfigError(
                    "set either progression or preset, not both".to_string(),
                ))
            }
            (Some(list), None) => parse_numerals(&list),
            (None, Some(id)) => id.parse::<ProgressionPreset>()?.numerals().to_vec(),
            (None, None) => defaults.progression,
        };

        let tempo = raw.tempo.unwrap_or(defaults.tempo);
        if !TEMPO_RANGE.contains(&tempo) {
            return Err(FretworkError::ConfigError(format!(
                "tempo {} outside {}-{} BPM",
                tempo,
                TEMPO_RANGE.start(),
                TEMPO_RANGE.end()
            )));
        }

        let octave = raw.octave.unwrap_or(defaults.octave);
        if !OCTAVE_RANGE.contains(&octave) {
            return Err(FretworkError::ConfigError(format!(
                "octave {} outside {}-{}",
                octave,
                OCTAVE_RANGE.start(),
                OCTAVE_RANGE.end()
            )));
        }

        let tuning = match raw.tuning {
            Some(names) => {
                let names: Vec<&str> = names.split_whitespace().collect();
                Tuning::from_names(&names)?
            }
            None => Tuning::STANDARD,
        };

        let fret_limit = raw.fret_limit.unwrap_or(MAX_FRET);
        if !FRET_LIMIT_RANGE.contains(&fret_limit) {
            return Err(FretworkError::ConfigError(format!(
                "fret-limit {} outside {}-{}",
                fret_limit,
                FRET_LIMIT_RANGE.start(),
                FRET_LIMIT_RANGE.end()
            )));
        }

        Ok(Self {
            key,
            scale,
            progression,
            tempo,
            octave,
            fretboard: Fretboard::new(tuning, fret_limit),
        })
    }

    /// Chords of the configured progression in the configured key.
    pub fn chords(&self) -> Vec<ChordSymbol> {
        self.progression
            .iter()
            .map(|&numeral| chord_for_numeral(self.key, numeral))
            .collect()
    }

    /// A sequencer ready to run the configured progression.
    pub fn sequencer(&self) -> Sequencer {
        Sequencer::new(self.chords(), self.octave)
    }
}

/// Parse a numeral list, dropping entries that are not numerals.
fn parse_numerals(list: &str) -> Vec<Numeral> {
    list.split(|c: char| c.is_whitespace() || c == ',' || c == '-')
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<Numeral>() {
            Ok(numeral) => Some(numeral),
            Err(e) => {
                warn!("dropping from progression: {}", e);
                None
            }
        })
        .collect()
}
