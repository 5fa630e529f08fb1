//! Facelet layout engine: deterministic mapping from a 54-character facelet
//! string to 27 cubelet descriptors in a fixed 3x3x3 arrangement.
//!
//! # Invariants
//! - Building a layout is pure with respect to its inputs; identical inputs
//!   produce deep-equal outputs in identical enumeration order.
//! - Malformed input never yields a partial layout; validation fails the
//!   whole build.

pub mod cube;
pub mod facelet;
pub mod scheme;

pub use cube::{CubeLayout, Cubelet, LayoutParams, PieceKind};
pub use facelet::FaceletString;
pub use scheme::ColorScheme;

use cubespace_common::Face;

/// Errors surfaced while parsing a facelet string or building a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("facelet string must be exactly 54 characters, got {len}")]
    InvalidLength { len: usize },
    #[error("facelet symbol {symbol:?} is not ASCII")]
    NonAsciiSymbol { symbol: char },
    #[error("facelet symbol {symbol:?} on face {face} has no color mapping")]
    UnmappedSymbol { symbol: char, face: Face },
}
