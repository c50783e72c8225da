use std::env;
use std::process;

use fretwork::playback::step_duration_ms;
use fretwork::{
    chord_view, diatonic_chords, progression_view, scale_view, Config, Fretboard, FretworkError,
    Key, PitchClass, ProgressionPreset, ScaleType,
};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage: fretwork [--config <file.yaml>] <command>

Commands:
  chord <symbol>                      voicing and notes for a chord (C, Am, Bdim, G7)
  scale <root> <scale>                scale notes and fretboard grid (A minor-pentatonic)
  key <root>                          the seven diatonic chords of a major key
  progression <key> <numeral|preset>...
                                      chords, voicings and notes of a progression
  config                              print the progression described by --config";

fn main() {
    // Initialize logging; stdout carries the JSON output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fretwork=info")))
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    // Parse flags
    let mut config = Config::default();
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            eprintln!("{}", USAGE);
            process::exit(1);
        }
        config = match Config::load(&args[1]) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error reading config '{}': {}", args[1], e);
                process::exit(1);
            }
        };
        tracing::debug!(path = %args[1], "loaded config");
        args.drain(..2);
    }

    if args.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    match run(&config, &args) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {
            eprintln!("{}", USAGE);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Run one command; `Ok(None)` when the arguments name no command.
fn run(config: &Config, args: &[String]) -> Result<Option<String>, FretworkError> {
    let board = &config.fretboard;
    let command = args[0].as_str();
    let rest = &args[1..];

    let output = match (command, rest) {
        ("chord", [symbol]) => {
            let view = chord_view(board, symbol, config.octave)
                .ok_or_else(|| FretworkError::MalformedChord(symbol.clone()))?;
            if view.voicing.is_none() {
                tracing::warn!("{}", FretworkError::NoVoicing(symbol.clone()));
            }
            to_json(&view)?
        }
        ("scale", [root, scale @ ..]) if !scale.is_empty() => {
            let root = PitchClass::normalize(root)?;
            let scale: ScaleType = scale.join(" ").parse()?;
            to_json(&scale_view(board, root, scale, 12))?
        }
        ("key", [root]) => {
            let key: Key = root.parse()?;
            let chords: Vec<String> = diatonic_chords(key)
                .iter()
                .map(|chord| chord.label(key.prefers_flats()))
                .collect();
            to_json(&json!({ "key": key.name(), "chords": chords }))?
        }
        ("progression", [key, numerals @ ..]) if !numerals.is_empty() => {
            let key: Key = key.parse()?;
            let numerals = expand_presets(numerals);
            progression_json(board, key, &numerals, config)?
        }
        ("config", []) => {
            let numerals: Vec<String> = config.progression.iter().map(|n| n.to_string()).collect();
            progression_json(board, config.key, &numerals, config)?
        }
        _ => return Ok(None),
    };

    Ok(Some(output))
}

/// Replace preset ids with their numerals; anything else passes through.
fn expand_presets(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| match arg.parse::<ProgressionPreset>() {
            Ok(preset) => preset.numerals().iter().map(|n| n.to_string()).collect(),
            Err(_) => vec![arg.clone()],
        })
        .collect()
}

fn progression_json(
    board: &Fretboard,
    key: Key,
    numerals: &[String],
    config: &Config,
) -> Result<String, FretworkError> {
    let views = progression_view(board, key, numerals, config.octave);
    if views.len() < numerals.len() {
        tracing::warn!(
            "{} of {} numerals could not be resolved",
            numerals.len() - views.len(),
            numerals.len()
        );
    }
    to_json(&json!({
        "key": key.name(),
        "tempo": config.tempo,
        "stepMs": step_duration_ms(config.tempo, 4.0),
        "steps": views,
    }))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, FretworkError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unknown_command_is_not_an_error() {
        let config = Config::default();
        assert!(matches!(run(&config, &args(&["strum"])), Ok(None)));
        assert!(matches!(run(&config, &args(&["chord"])), Ok(None)));
        assert!(matches!(run(&config, &args(&["progression", "C"])), Ok(None)));
    }

    #[test]
    fn test_engine_errors_are_returned() {
        let config = Config::default();
        assert!(matches!(
            run(&config, &args(&["chord", "Xb"])),
            Err(FretworkError::MalformedChord(_))
        ));
        assert!(matches!(
            run(&config, &args(&["scale", "A", "bebop"])),
            Err(FretworkError::UnknownScale(_))
        ));
    }

    #[test]
    fn test_key_and_progression_output() {
        let config = Config::default();
        let output = run(&config, &args(&["key", "F"])).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["chords"][3], "Bb");

        let output = run(&config, &args(&["progression", "G", "jazz"])).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["steps"].as_array().unwrap().len(), 3);
        assert_eq!(value["steps"][0]["label"], "Am");
        assert_eq!(value["stepMs"], 2000.0);
    }
}
