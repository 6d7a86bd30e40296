//! Fixed line/cluster palette.
//!
//! The chart draws the n-th ticker of the list in the n-th palette color, and the
//! cluster report prints the same color, so both outputs can be read side by side.

use std::fmt::{Display, Formatter};

use crate::domain::{Ticker, TickerList};
use crate::ValidationError;

/// A named palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

impl PaletteColor {
    const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { name, rgb: [r, g, b] }
    }
}

/// Renders as `r,g,b`.
impl Display for PaletteColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "{r},{g},{b}")
    }
}

pub const PALETTE_SIZE: usize = 30;

pub const PALETTE: [PaletteColor; PALETTE_SIZE] = [
    PaletteColor::new("blue", 0, 0, 255),
    PaletteColor::new("orange", 255, 165, 0),
    PaletteColor::new("green", 0, 128, 0),
    PaletteColor::new("red", 255, 0, 0),
    PaletteColor::new("purple", 128, 0, 128),
    PaletteColor::new("brown", 165, 42, 42),
    PaletteColor::new("pink", 255, 192, 203),
    PaletteColor::new("gray", 128, 128, 128),
    PaletteColor::new("olive", 128, 128, 0),
    PaletteColor::new("cyan", 0, 255, 255),
    PaletteColor::new("darkblue", 0, 0, 139),
    PaletteColor::new("darkorange", 255, 140, 0),
    PaletteColor::new("darkgreen", 0, 100, 0),
    PaletteColor::new("darkred", 139, 0, 0),
    PaletteColor::new("rebeccapurple", 102, 51, 153),
    PaletteColor::new("darkslategray", 47, 79, 79),
    PaletteColor::new("mediumvioletred", 199, 21, 133),
    PaletteColor::new("dimgray", 105, 105, 105),
    PaletteColor::new("seagreen", 46, 139, 87),
    PaletteColor::new("darkcyan", 0, 139, 139),
    PaletteColor::new("deepskyblue", 0, 191, 255),
    PaletteColor::new("yellow", 255, 255, 0),
    PaletteColor::new("lightgreen", 144, 238, 144),
    PaletteColor::new("lightcoral", 240, 128, 128),
    PaletteColor::new("plum", 221, 160, 221),
    PaletteColor::new("lightslategrey", 119, 136, 153),
    PaletteColor::new("lightpink", 255, 182, 193),
    PaletteColor::new("lightgray", 211, 211, 211),
    PaletteColor::new("lime", 0, 255, 0),
    PaletteColor::new("cadetblue", 95, 158, 160),
];

/// Look up a palette entry by position.
pub fn color_at(index: usize) -> Result<PaletteColor, ValidationError> {
    PALETTE
        .get(index)
        .copied()
        .ok_or(ValidationError::PaletteRange {
            index,
            size: PALETTE_SIZE,
        })
}

/// Palette entry for a chart line; wraps around after the last color.
pub fn cycled_color(index: usize) -> PaletteColor {
    PALETTE[index % PALETTE_SIZE]
}

/// Explicit ticker → color mapping, built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteAssignment {
    entries: Vec<(Ticker, PaletteColor)>,
}

impl PaletteAssignment {
    /// Assign colors by list position; fails if the list is longer than the palette.
    pub fn for_tickers(tickers: &TickerList) -> Result<Self, ValidationError> {
        let entries = tickers
            .iter()
            .enumerate()
            .map(|(index, ticker)| color_at(index).map(|color| (ticker.clone(), color)))
            .collect::<Result<Vec<_>, ValidationError>>()?;
        Ok(Self { entries })
    }

    pub fn color_of(&self, ticker: &Ticker) -> Option<PaletteColor> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == ticker)
            .map(|(_, color)| *color)
    }
}
