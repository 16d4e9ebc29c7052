//! Wheel segment colors.
//!
//! Segments are colored cyclically from a fixed palette, nudged so that no two
//! neighbours share a color. The wheel is circular, so the last segment also
//! borders the first.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("invalid color `{0}`: expected #rrggbb")]
    InvalidColor(String),
    #[error("a palette needs at least 2 colors, found {0}")]
    TooFewColors(usize),
    #[error("color {0} appears more than once in the palette")]
    DuplicateColor(SegmentColor),
}

/// An opaque RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SegmentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SegmentColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for SegmentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for SegmentColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaletteError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .ok_or_else(invalid)
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for SegmentColor {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SegmentColor> for String {
    fn from(color: SegmentColor) -> Self {
        color.to_string()
    }
}

/// Default wheel palette.
pub const DEFAULT_COLORS: [SegmentColor; 4] = [
    SegmentColor::rgb(0xff, 0x6b, 0x6b),
    SegmentColor::rgb(0x4e, 0xcd, 0xc4),
    SegmentColor::rgb(0xfe, 0xca, 0x57),
    SegmentColor::rgb(0x5f, 0x27, 0xcd),
];

/// Ordered set of at least two distinct colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<SegmentColor>,
}

impl Palette {
    pub fn new(colors: Vec<SegmentColor>) -> Result<Self, PaletteError> {
        if colors.len() < 2 {
            return Err(PaletteError::TooFewColors(colors.len()));
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(PaletteError::DuplicateColor(*color));
            }
        }
        Ok(Self { colors })
    }

    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let colors = colors
            .iter()
            .map(|c| c.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    pub fn colors(&self) -> &[SegmentColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}

/// Assigns one color per item.
///
/// Item `i` starts at palette entry `i mod k` and moves to the next entry when
/// it would repeat its predecessor. For two or more items the last color must
/// also differ from the first; it is swapped for the first palette entry that
/// differs from both the first and the second-to-last color. With a palette too
/// small to offer such an entry (two colors and an odd item count) the
/// wrap-around repeat stays.
///
/// Only the item count and the palette order matter, so repeated calls agree.
pub fn assign_colors<T>(items: &[T], palette: &Palette) -> Vec<SegmentColor> {
    let colors = palette.colors();
    let k = colors.len();
    let n = items.len();

    let mut assigned: Vec<SegmentColor> = Vec::with_capacity(n);
    for i in 0..n {
        let mut index = i % k;
        if assigned.last() == Some(&colors[index]) {
            index = (index + 1) % k;
        }
        assigned.push(colors[index]);
    }

    if n >= 2 && assigned[0] == assigned[n - 1] {
        let first = assigned[0];
        let before_last = assigned[n - 2];
        if let Some(alt) = colors.iter().find(|&&c| c != first && c != before_last) {
            assigned[n - 1] = *alt;
        }
    }
    assigned
}
