//! Voicing search and shape transposition
//!
//! Finds the anchor string and root fret for a chord, transposes the matching
//! relative shape to absolute frets, then decides every string the shape left
//! unaddressed.

use tracing::{debug, trace};

use crate::chord::ChordSymbol;
use crate::fretboard::Fretboard;
use super::shapes::{shape_for, RelativeShape, ANCHOR_STRINGS};
use super::types::{Barre, Position, Voicing};

/// Frets swept on each anchor string when looking for the root
pub const SEARCH_FRETS: u8 = 12;

/// Find a playable voicing for a chord symbol on a standard-tuned guitar.
///
/// Returns `None` for an unreadable symbol or when no shape family anchors
/// the chord. Renderers show "no diagram available" in that case.
///
/// # Example
/// ```rust
/// use fretwork::voicing::find_voicing;
///
/// let bdim = find_voicing("Bdim").unwrap();
/// assert_eq!(bdim.tab(), "x2343x");
///
/// assert!(find_voicing("Xb").is_none());
/// ```
pub fn find_voicing(symbol: &str) -> Option<Voicing> {
    match symbol.parse::<ChordSymbol>() {
        Ok(chord) => find_voicing_on(&Fretboard::standard(), &chord),
        Err(e) => {
            debug!("no voicing: {}", e);
            None
        }
    }
}

/// Find a playable voicing for `chord` on `board`.
///
/// # Search
/// 1. Anchor strings are tried lowest-pitched first (string 6, then 5).
/// 2. An anchor is skipped when the shape table has no shape for the chord's
///    quality on it.
/// 3. Frets `0..=12` are swept; the first fret sounding the root wins.
///
/// There is no search for higher-fret alternatives: the lowest fret on the
/// first anchor that has a shape always wins.
pub fn find_voicing_on(board: &Fretboard, chord: &ChordSymbol) -> Option<Voicing> {
    match locate_shape(board, chord) {
        Some((shape, root_fret)) => Some(transpose_shape(board, chord, shape, root_fret)),
        None => {
            debug!(chord = %chord, "no shape family anchors chord");
            None
        }
    }
}

/// First (shape, root fret) pair in anchor priority order.
fn locate_shape(board: &Fretboard, chord: &ChordSymbol) -> Option<(&'static RelativeShape, u8)> {
    for anchor in ANCHOR_STRINGS {
        let shape = match shape_for(anchor, chord.quality) {
            Some(shape) => shape,
            None => continue,
        };
        let root_fret =
            (0..=SEARCH_FRETS).find(|&fret| board.pitch_at(anchor, fret) == Some(chord.root));
        if let Some(fret) = root_fret {
            return Some((shape, fret));
        }
        trace!(chord = %chord, anchor, "root not reachable on anchor string");
    }
    None
}

/// Move `shape` to `root_fret` and resolve every string.
///
/// - Positions past the fret limit are dropped.
/// - Positions that do not sound their role on `board` are dropped, which
///   only happens on non-standard tunings.
/// - Barres at fret 0 are dropped (an open shape needs no barre).
/// - Barres shrink to the strings that are still fretted at or above them.
/// - Strings the shape neither frets nor mutes sound open when the open pitch
///   is a chord tone, and are muted otherwise.
pub fn transpose_shape(
    board: &Fretboard,
    chord: &ChordSymbol,
    shape: &RelativeShape,
    root_fret: u8,
) -> Voicing {
    let mut positions: Vec<Position> = Vec::with_capacity(6);

    for note in shape.notes {
        let fret = match root_fret.checked_add(note.offset) {
            Some(fret) if fret <= board.fret_limit => fret,
            _ => {
                trace!(chord = %chord, string = note.string, "position past fret limit dropped");
                continue;
            }
        };
        let expected = chord.root.transpose(note.role.semitones(chord.quality) as i32);
        if board.pitch_at(note.string, fret) != Some(expected) {
            trace!(chord = %chord, string = note.string, fret, "position off chord dropped");
            continue;
        }
        positions.push(Position {
            string: note.string,
            fret,
            role: note.role,
            open: false,
        });
    }

    let barres: Vec<Barre> = shape
        .barres
        .iter()
        .filter_map(|barre| {
            let fret = root_fret.checked_add(barre.offset)?;
            (fret > 0 && fret <= board.fret_limit).then_some(Barre {
                fret,
                high_string: barre.high_string,
                low_string: barre.low_string,
            })
        })
        .flat_map(|barre| fit_barre(barre, &positions))
        .collect();

    let mut muted: Vec<u8> = shape.muted.to_vec();

    for string in Fretboard::strings_low_to_high() {
        let addressed = positions.iter().any(|p| p.string == string) || muted.contains(&string);
        if addressed {
            continue;
        }
        if barres.iter().any(|barre| barre.covers(string)) {
            muted.push(string);
            continue;
        }
        match board.pitch_at(string, 0).and_then(|pc| chord.role_of(pc)) {
            Some(role) => positions.push(Position {
                string,
                fret: 0,
                role,
                open: true,
            }),
            None => muted.push(string),
        }
    }

    muted.sort_unstable_by(|a, b| b.cmp(a));

    Voicing {
        chord: *chord,
        family: shape.family,
        anchor_string: shape.anchor_string,
        root_fret,
        positions,
        barres,
        muted,
    }
}

/// Split `barre` into runs of adjacent strings fretted at or above its fret.
///
/// A run survives only if it spans two or more strings and at least one of
/// them is stopped by the barre itself; a single string is just a fretted note.
fn fit_barre(barre: Barre, positions: &[Position]) -> Vec<Barre> {
    let held = |string: u8| {
        positions
            .iter()
            .any(|p| p.string == string && !p.open && p.fret >= barre.fret)
    };
    let on_barre = |string: u8| {
        positions
            .iter()
            .any(|p| p.string == string && p.fret == barre.fret)
    };

    let mut fitted = Vec::new();
    let mut run: Option<(u8, u8)> = None;
    for string in (barre.low_string..=barre.high_string).rev() {
        if held(string) {
            run = Some(run.map_or((string, string), |(high, _)| (high, string)));
            continue;
        }
        fitted.extend(run.take());
    }
    fitted.extend(run);

    fitted
        .into_iter()
        .filter(|&(high, low)| high > low && (low..=high).any(on_barre))
        .map(|(high_string, low_string)| {
            if (high_string, low_string) != (barre.high_string, barre.low_string) {
                trace!(fret = barre.fret, high_string, low_string, "barre trimmed");
            }
            Barre {
                fret: barre.fret,
                high_string,
                low_string,
            }
        })
        .collect()
}
