//! Integration tests for the public fretwork API

use std::collections::HashSet;

use fretwork::playback::Sequencer;
use fretwork::{
    diatonic_chords, find_voicing, find_voicing_on, progression_view, resolve_numeral,
    scale_by_name, scale_notes, transpose_chord, ChordSymbol, Config, Fretboard, FretworkError,
    Key, PitchClass, Quality, ScaleType, Voicing, MAX_FRET,
};

/// Checks every structural property a rendered diagram relies on.
fn assert_structurally_valid(board: &Fretboard, voicing: &Voicing) {
    let chord = voicing.chord;
    let mut seen = HashSet::new();

    for pos in &voicing.positions {
        assert!((1..=6).contains(&pos.string), "{}: string {}", chord, pos.string);
        assert!(pos.fret <= MAX_FRET, "{}: fret {}", chord, pos.fret);
        assert!(seen.insert(pos.string), "{}: string {} used twice", chord, pos.string);
        assert!(
            !voicing.muted.contains(&pos.string),
            "{}: string {} both sounded and muted",
            chord,
            pos.string
        );
        let sounding = board.pitch_at(pos.string, pos.fret).unwrap();
        assert_eq!(chord.role_of(sounding), Some(pos.role), "{}: {:?}", chord, pos);
    }

    for barre in &voicing.barres {
        assert!(barre.fret >= 1 && barre.fret <= MAX_FRET);
        assert!(barre.low_string <= barre.high_string && barre.high_string <= 6);
        for pos in voicing.positions.iter().filter(|p| barre.covers(p.string)) {
            assert!(pos.fret >= barre.fret, "{}: {:?} under {:?}", chord, pos, barre);
        }
    }

    // Every string is either sounded or muted
    for string in 1..=6u8 {
        assert!(seen.contains(&string) || voicing.muted.contains(&string));
    }
}

#[test]
fn test_scale_notes_length_and_uniqueness() {
    for root in PitchClass::ALL {
        for scale in ScaleType::ALL {
            let notes = scale_notes(root, scale);
            assert_eq!(notes.len(), scale.intervals().len(), "{} {}", root, scale);
            let unique: HashSet<_> = notes.iter().collect();
            assert_eq!(unique.len(), notes.len(), "{} {}", root, scale);
            assert_eq!(notes[0], root);
        }
    }
}

#[test]
fn test_scale_by_name() {
    let notes: Vec<String> = scale_by_name("A", "minor-pentatonic")
        .unwrap()
        .iter()
        .map(|pc| pc.to_string())
        .collect();
    assert_eq!(notes, vec!["A", "C", "D", "E", "G"]);

    assert!(matches!(
        scale_by_name("A", "bebop"),
        Err(FretworkError::UnknownScale(_))
    ));
    assert!(matches!(
        scale_by_name("H", "major"),
        Err(FretworkError::UnknownNote(_))
    ));
}

#[test]
fn test_parse_chord_symbols() {
    let am = ChordSymbol::parse("Am").unwrap();
    assert_eq!((am.root, am.quality), (PitchClass::A, Quality::Minor));

    let bdim = ChordSymbol::parse("Bdim").unwrap();
    assert_eq!((bdim.root, bdim.quality), (PitchClass::B, Quality::Diminished));

    let g = ChordSymbol::parse("G").unwrap();
    assert_eq!((g.root, g.quality), (PitchClass::G, Quality::Major));
}

#[test]
fn test_diatonic_chords_of_c() {
    let names: Vec<String> = diatonic_chords(Key::new(PitchClass::C))
        .iter()
        .map(ChordSymbol::to_string)
        .collect();
    assert_eq!(names, vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
}

#[test]
fn test_resolve_vi_of_g() {
    let chord = resolve_numeral(Key::new(PitchClass::G), "vi").unwrap();
    assert_eq!(chord, ChordSymbol::new(PitchClass::E, Quality::Minor));
    assert!(resolve_numeral(Key::new(PitchClass::G), "VIII").is_none());
}

#[test]
fn test_find_voicing_c() {
    let voicing = find_voicing("C").unwrap();
    assert_structurally_valid(&Fretboard::standard(), &voicing);

    let triad: HashSet<PitchClass> = [PitchClass::C, PitchClass::E, PitchClass::G].into();
    let board = Fretboard::standard();
    for pos in voicing.positions.iter().filter(|p| p.open) {
        assert!(triad.contains(&board.pitch_at(pos.string, 0).unwrap()));
    }
}

#[test]
fn test_find_voicing_invalid_root() {
    assert!(find_voicing("Xb").is_none());
    assert!(find_voicing("").is_none());
    assert!(find_voicing("Cfoo").is_none());
}

#[test]
fn test_every_diatonic_chord_voices_validly() {
    let board = Fretboard::standard();
    for tonic in PitchClass::ALL {
        for chord in diatonic_chords(Key::new(tonic)) {
            let voicing = find_voicing_on(&board, &chord)
                .unwrap_or_else(|| panic!("no voicing for {}", chord));
            assert_structurally_valid(&board, &voicing);
        }
    }
}

#[test]
fn test_sequencer_resolves_and_wraps() {
    let mut seq = Sequencer::from_numerals(Key::new(PitchClass::C), &["I", "IV", "V", "I"], 3);
    let names: Vec<String> = seq.chords().iter().map(ChordSymbol::to_string).collect();
    assert_eq!(names, vec!["C", "F", "G", "C"]);

    for _ in 0..5 {
        seq.advance();
    }
    assert_eq!(seq.index(), 1);
}

#[test]
fn test_transpose_chord() {
    assert_eq!(transpose_chord("Am", 3).unwrap().to_string(), "Cm");
    assert_eq!(transpose_chord("G7", 5).unwrap().to_string(), "C7");
    assert_eq!(transpose_chord("C", -1).unwrap().to_string(), "B");
    assert!(transpose_chord("Q", 2).is_none());
    assert_eq!(transpose_chord("B", i32::MAX).unwrap().to_string(), "F#");
    assert_eq!(transpose_chord("Bm", i32::MIN).unwrap().to_string(), "D#m");
}

#[test]
fn test_config_drives_progression_view() {
    let config = Config::from_yaml("key: Eb\npreset: doo-wop\nfret-limit: 15").unwrap();
    let numerals: Vec<String> = config.progression.iter().map(|n| n.to_string()).collect();
    let views = progression_view(&config.fretboard, config.key, &numerals, config.octave);

    let labels: Vec<&str> = views.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, vec!["Eb", "Cm", "Ab", "Bb"]);
    for view in &views {
        let voicing = view.voicing.as_ref().unwrap();
        assert_structurally_valid(&config.fretboard, voicing);
        assert!(voicing.positions.iter().all(|p| p.fret <= 15));
    }
}

#[test]
fn test_views_serialize_camel_case() {
    let views = progression_view(&Fretboard::standard(), Key::new(PitchClass::C), &["I"], 3);
    let json = serde_json::to_value(&views[0]).unwrap();

    assert_eq!(json["chord"], "C");
    assert_eq!(json["voicing"]["rootFret"], 8);
    assert_eq!(json["voicing"]["anchorString"], 6);
    assert_eq!(json["notes"]["root"]["pitchClass"], "C");
    assert_eq!(json["notes"]["root"]["octave"], 3);
}
