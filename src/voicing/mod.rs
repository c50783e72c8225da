//! # Voicing Module
//!
//! Turn chord symbols into concrete fretboard diagrams.
//!
//! ## Purpose
//! A small table of movable shapes (the E and A barre-chord families, in
//! major, minor and diminished variants) is transposed to the fret where the
//! chord root falls on the shape's anchor string. The result is a [`Voicing`]:
//! absolute frets, barres, and muted strings, ready for a fretboard renderer.
//!
//! ## Sub-modules
//! - `types` - Voicing, Position, Barre, ShapeFamily
//! - `shapes` - the relative shape table
//! - `engine` - anchor search and transposition
//!
//! ## Entry Points
//! - [`find_voicing()`] - chord symbol on a standard-tuned guitar
//! - [`find_voicing_on()`] - parsed chord on any [`Fretboard`](crate::Fretboard)
//!
//! ## Example
//! ```rust
//! use fretwork::voicing::find_voicing;
//!
//! let e = find_voicing("E").unwrap();
//! assert_eq!(e.tab(), "022100");
//! assert!(e.barres.is_empty());
//!
//! let c = find_voicing("C").unwrap();
//! assert_eq!(c.root_fret, 8);
//! assert_eq!(c.barres[0].fret, 8);
//! ```
//!
//! ## Invariants
//! - Every fret lies in `0..=fret_limit` (24 on a full neck).
//! - Every sounded string plays a root, third or fifth of the chord.
//! - Every string is either sounded or listed in `muted`.
//!
//! Extended suffixes (7, maj7, sus4, ...) are voiced as their underlying triad.

mod types;
mod shapes;
mod engine;


pub use types::{Barre, Position, ShapeFamily, Voicing};
pub use shapes::{shape_for, RelativeBarre, RelativeShape, ShapeNote, ANCHOR_STRINGS, SHAPES};
pub use engine::{find_voicing, find_voicing_on, transpose_shape, SEARCH_FRETS};
