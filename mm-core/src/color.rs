//! The fixed color palette.
//!
//! Six colors, ordinal-indexed so incidence tallies can use plain arrays
//! instead of hashing.

use std::fmt;

/// Number of colors in the palette.
pub const NUM_COLORS: usize = 6;

/// A peg color. The palette is closed; there is no "empty" peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

/// All colors in ordinal order. Used for uniform draws and tally iteration.
pub const ALL_COLORS: [Color; NUM_COLORS] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Purple,
];

impl Color {
    /// Stable ordinal of this color (0..NUM_COLORS). Indexes tally arrays.
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Orange => 1,
            Color::Yellow => 2,
            Color::Green => 3,
            Color::Blue => 4,
            Color::Purple => 5,
        }
    }

    /// Convert an ordinal (0..NUM_COLORS) back to a `Color`.
    ///
    /// # Panics
    /// Panics if `idx >= NUM_COLORS`.
    pub fn from_index(idx: usize) -> Color {
        assert!(idx < NUM_COLORS, "color index out of range: {}", idx);
        ALL_COLORS[idx]
    }

    /// Full color name, as shown when revealing the secret.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Purple => "Purple",
        }
    }

    /// The single-character input mapping: the uppercase first letter of the
    /// color name. The palette was picked so initials are unique.
    pub fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Purple => 'P',
        }
    }

    /// Inverse of [`Color::initial`]. Uppercase only; case folding is the
    /// parser's concern.
    pub fn from_initial(ch: char) -> Option<Color> {
        match ch {
            'R' => Some(Color::Red),
            'O' => Some(Color::Orange),
            'Y' => Some(Color::Yellow),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            'P' => Some(Color::Purple),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
