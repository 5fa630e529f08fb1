use cubespace_common::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from facelet symbols to sticker colors.
///
/// The scheme must cover every symbol that appears in the facelet string it
/// is used with; `CubeLayout::build` fails on the first symbol it cannot
/// resolve. The `filler` color is what interior-facing slots receive so that
/// renderers always see a complete six-entry material list.
///
/// Uses BTreeMap so serialized schemes are stable across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    colors: BTreeMap<char, Color>,
    filler: Color,
}

impl ColorScheme {
    /// Build a scheme from symbol/color pairs with the given filler.
    pub fn new(pairs: impl IntoIterator<Item = (char, Color)>, filler: Color) -> Self {
        Self {
            colors: pairs.into_iter().collect(),
            filler,
        }
    }

    /// The classic scheme: U white, F red, D yellow, L green, R blue,
    /// B orange, white filler.
    pub fn classic() -> Self {
        Self::new(
            [
                ('U', Color::WHITE),
                ('F', Color::RED),
                ('D', Color::YELLOW),
                ('L', Color::GREEN),
                ('R', Color::BLUE),
                ('B', Color::ORANGE),
            ],
            Color::WHITE,
        )
    }

    /// Color for a facelet symbol, if mapped.
    pub fn color(&self, symbol: char) -> Option<Color> {
        self.colors.get(&symbol).copied()
    }

    /// The color substituted into interior-facing slots.
    pub fn filler(&self) -> Color {
        self.filler
    }

    /// Number of mapped symbols.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the scheme maps no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_scheme_colors() {
        let scheme = ColorScheme::classic();
        assert_eq!(scheme.color('U'), Some(Color::WHITE));
        assert_eq!(scheme.color('F'), Some(Color::RED));
        assert_eq!(scheme.color('D'), Some(Color::YELLOW));
        assert_eq!(scheme.color('L'), Some(Color::GREEN));
        assert_eq!(scheme.color('R'), Some(Color::BLUE));
        assert_eq!(scheme.color('B'), Some(Color::ORANGE));
        assert_eq!(scheme.filler(), Color::WHITE);
        assert_eq!(scheme.len(), 6);
    }

    #[test]
    fn unmapped_symbol_is_none() {
        let scheme = ColorScheme::classic();
        assert_eq!(scheme.color('Q'), None);
        assert_eq!(scheme.color('u'), None);
    }

    #[test]
    fn caller_supplied_alphabet() {
        let scheme = ColorScheme::new(
            [('0', Color(0x111111)), ('1', Color(0x222222))],
            Color(0x000000),
        );
        assert_eq!(scheme.color('0'), Some(Color(0x111111)));
        assert_eq!(scheme.color('U'), None);
        assert_eq!(scheme.filler(), Color(0x000000));
    }
}
