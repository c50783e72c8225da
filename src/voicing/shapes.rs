//! Shape-family table
//!
//! Each [`RelativeShape`] is a movable fingering written relative to the fret
//! of its anchor root. Offsets assume standard-tuning string intervals.

use crate::chord::{Quality, Role};

use super::types::ShapeFamily;

/// Anchor strings in search order: lowest-pitched first
pub const ANCHOR_STRINGS: [u8; 2] = [6, 5];

/// One fretted string of a relative shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeNote {
    pub string: u8,
    pub offset: u8,
    pub role: Role,
}

/// A barre relative to the root fret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeBarre {
    pub offset: u8,
    pub high_string: u8,
    pub low_string: u8,
}

/// A movable fingering template for one quality on one anchor string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeShape {
    pub family: ShapeFamily,
    pub quality: Quality,
    pub anchor_string: u8,
    pub notes: &'static [ShapeNote],
    pub barres: &'static [RelativeBarre],
    pub muted: &'static [u8],
}

const fn note(string: u8, offset: u8, role: Role) -> ShapeNote {
    ShapeNote { string, offset, role }
}

const FULL_BARRE_6: RelativeBarre = RelativeBarre { offset: 0, high_string: 6, low_string: 1 };
const FULL_BARRE_5: RelativeBarre = RelativeBarre { offset: 0, high_string: 5, low_string: 1 };

/// Every shape the synthesizer knows.
///
/// The diminished shape only exists on string 5; strings 6 and 1 are left
/// for the open-string pass.
pub const SHAPES: &[RelativeShape] = &[
    RelativeShape {
        family: ShapeFamily::EShape,
        quality: Quality::Major,
        anchor_string: 6,
        notes: &[
            note(6, 0, Role::Root),
            note(5, 2, Role::Fifth),
            note(4, 2, Role::Root),
            note(3, 1, Role::Third),
            note(2, 0, Role::Fifth),
            note(1, 0, Role::Root),
        ],
        barres: &[FULL_BARRE_6],
        muted: &[],
    },
    RelativeShape {
        family: ShapeFamily::EShape,
        quality: Quality::Minor,
        anchor_string: 6,
        notes: &[
            note(6, 0, Role::Root),
            note(5, 2, Role::Fifth),
            note(4, 2, Role::Root),
            note(3, 0, Role::Third),
            note(2, 0, Role::Fifth),
            note(1, 0, Role::Root),
        ],
        barres: &[FULL_BARRE_6],
        muted: &[],
    },
    RelativeShape {
        family: ShapeFamily::AShape,
        quality: Quality::Major,
        anchor_string: 5,
        notes: &[
            note(5, 0, Role::Root),
            note(4, 2, Role::Fifth),
            note(3, 2, Role::Root),
            note(2, 2, Role::Third),
            note(1, 0, Role::Fifth),
        ],
        barres: &[FULL_BARRE_5],
        muted: &[6],
    },
    RelativeShape {
        family: ShapeFamily::AShape,
        quality: Quality::Minor,
        anchor_string: 5,
        notes: &[
            note(5, 0, Role::Root),
            note(4, 2, Role::Fifth),
            note(3, 2, Role::Root),
            note(2, 1, Role::Third),
            note(1, 0, Role::Fifth),
        ],
        barres: &[FULL_BARRE_5],
        muted: &[6],
    },
    RelativeShape {
        family: ShapeFamily::AShape,
        quality: Quality::Diminished,
        anchor_string: 5,
        notes: &[
            note(5, 0, Role::Root),
            note(4, 1, Role::Fifth),
            note(3, 2, Role::Root),
            note(2, 1, Role::Third),
        ],
        barres: &[],
        muted: &[],
    },
];

/// Shape for `quality` anchored on `anchor_string`, if the table has one.
pub fn shape_for(anchor_string: u8, quality: Quality) -> Option<&'static RelativeShape> {
    SHAPES
        .iter()
        .find(|shape| shape.anchor_string == anchor_string && shape.quality == quality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::Fretboard;

    #[test]
    fn test_shapes_sound_their_roles_in_standard_tuning() {
        let board = Fretboard::standard();
        for shape in SHAPES {
            // anchor the shape at fret 3 and check every note
            let root = board.pitch_at(shape.anchor_string, 3).unwrap();
            for n in shape.notes {
                let sounded = board.pitch_at(n.string, 3 + n.offset).unwrap();
                let expected = root.transpose(n.role.semitones(shape.quality) as i32);
                assert_eq!(
                    sounded, expected,
                    "{:?} {:?} string {} does not sound its {:?}",
                    shape.family, shape.quality, n.string, n.role
                );
            }
        }
    }

    #[test]
    fn test_shapes_anchor_on_root() {
        for shape in SHAPES {
            let anchor = shape
                .notes
                .iter()
                .find(|n| n.string == shape.anchor_string)
                .expect("anchor string must be fretted");
            assert_eq!(anchor.offset, 0);
            assert_eq!(anchor.role, Role::Root);
            assert!(!shape.muted.contains(&shape.anchor_string));
        }
    }

    #[test]
    fn test_shape_lookup() {
        assert_eq!(shape_for(6, Quality::Major).unwrap().family, ShapeFamily::EShape);
        assert_eq!(shape_for(5, Quality::Minor).unwrap().family, ShapeFamily::AShape);
        assert!(shape_for(6, Quality::Diminished).is_none());
        assert!(shape_for(5, Quality::Diminished).is_some());
        assert!(shape_for(4, Quality::Major).is_none());
    }
}
