use crate::LayoutError;
use cubespace_common::Face;
use serde::{Deserialize, Serialize};

/// A validated 54-character facelet string.
///
/// The string holds six 9-character faces in the fixed order U, F, D, L, R, B.
/// Each face reads row-major from its top-left sticker when the cube is
/// unfolded into the standard net:
///
/// ```text
///              +----------+
///              | U0 U1 U2 |
///              | U3 U4 U5 |
///              | U6 U7 U8 |
/// +----------+----------+----------+----------+
/// | L0 L1 L2 | F0 F1 F2 | R0 R1 R2 | B0 B1 B2 |
/// | L3 L4 L5 | F3 F4 F5 | R3 R4 R5 | B3 B4 B5 |
/// | L6 L7 L8 | F6 F7 F8 | R6 R7 R8 | B6 B7 B8 |
/// +----------+----------+----------+----------+
///              | D0 D1 D2 |
///              | D3 D4 D5 |
///              | D6 D7 D8 |
///              +----------+
/// ```
///
/// Symbols are opaque here; they only need an entry in the color scheme used
/// to build a layout. The face letters name sides of the cube, not colors, so
/// `DDDDDDDDDBBBBBBBBBUUUUUUUUURRRRRRRRRLLLLLLLLLFFFFFFFFF` is another valid
/// solved cube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceletString(String);

impl FaceletString {
    /// The canonical solved cube.
    pub const SOLVED: &'static str =
        "UUUUUUUUUFFFFFFFFFDDDDDDDDDLLLLLLLLLRRRRRRRRRBBBBBBBBB";

    /// Validate and wrap a facelet string: exactly 54 ASCII characters.
    /// Symbol coverage is checked against the color scheme when a layout is
    /// built.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let len = s.chars().count();
        if len != 54 {
            return Err(LayoutError::InvalidLength { len });
        }
        if let Some(symbol) = s.chars().find(|c| !c.is_ascii()) {
            return Err(LayoutError::NonAsciiSymbol { symbol });
        }
        Ok(Self(s.to_owned()))
    }

    /// The solved-cube facelet string.
    pub fn solved() -> Self {
        Self(Self::SOLVED.to_owned())
    }

    /// The 9-character segment for one face.
    pub fn face(&self, face: Face) -> &str {
        let start = face.index() * 9;
        &self.0[start..start + 9]
    }

    /// Symbol at a row-major sticker index (0..9) of a face.
    pub fn symbol_at(&self, face: Face, index: usize) -> char {
        debug_assert!(index < 9, "sticker index out of range");
        self.0.as_bytes()[face.index() * 9 + index] as char
    }

    /// The full 54-character string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FaceletString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_string_parses() {
        let s = FaceletString::parse(FaceletString::SOLVED).unwrap();
        assert_eq!(s.as_str().len(), 54);
        assert_eq!(s, FaceletString::solved());
    }

    #[test]
    fn faces_slice_in_canonical_order() {
        let s = FaceletString::solved();
        assert_eq!(s.face(Face::U), "UUUUUUUUU");
        assert_eq!(s.face(Face::F), "FFFFFFFFF");
        assert_eq!(s.face(Face::D), "DDDDDDDDD");
        assert_eq!(s.face(Face::L), "LLLLLLLLL");
        assert_eq!(s.face(Face::R), "RRRRRRRRR");
        assert_eq!(s.face(Face::B), "BBBBBBBBB");
    }

    #[test]
    fn symbol_at_reads_row_major() {
        let mut raw = String::from(FaceletString::SOLVED);
        // Replace U4 (the U face center) with a marker.
        raw.replace_range(4..5, "x");
        let s = FaceletString::parse(&raw).unwrap();
        assert_eq!(s.symbol_at(Face::U, 4), 'x');
        assert_eq!(s.symbol_at(Face::U, 0), 'U');
        assert_eq!(s.symbol_at(Face::B, 8), 'B');
    }

    #[test]
    fn wrong_length_is_rejected() {
        for bad in ["", "U", &FaceletString::SOLVED[..53]] {
            match FaceletString::parse(bad) {
                Err(LayoutError::InvalidLength { len }) => assert_eq!(len, bad.len()),
                other => panic!("expected InvalidLength, got {other:?}"),
            }
        }
        let long = format!("{}U", FaceletString::SOLVED);
        assert_eq!(
            FaceletString::parse(&long),
            Err(LayoutError::InvalidLength { len: 55 })
        );
    }

    #[test]
    fn non_ascii_symbols_are_rejected() {
        let raw = format!("é{}", &FaceletString::SOLVED[1..]);
        assert_eq!(raw.chars().count(), 54);
        assert_eq!(
            FaceletString::parse(&raw),
            Err(LayoutError::NonAsciiSymbol { symbol: 'é' })
        );
    }

    #[test]
    fn alternate_symbols_are_accepted() {
        // Face letters name sides, not colors; any symbol alphabet is fine.
        let s = "012345678".repeat(6);
        assert!(FaceletString::parse(&s).is_ok());
    }
}
