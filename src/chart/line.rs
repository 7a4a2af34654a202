//! Price-line options and level presentation

use serde::{Serialize, Serializer};

use crate::types::{Level, StrategyLevels};

/// Line style scale of the charting library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLineStyle {
    Solid = 0,
    Dotted = 1,
    Dashed = 2,
    LargeDashed = 3,
    SparseDotted = 4,
}

// The library wants the numeric code, not the name
impl Serialize for PriceLineStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Options accepted by `createPriceLine`
///
/// Serialized camelCase to match the library's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLineOptions {
    pub price: f64,
    pub color: String,
    pub line_width: u32,
    pub line_style: PriceLineStyle,
    pub title: String,
    pub axis_label_visible: bool,
}

/// The three strategy levels drawn on the chart, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelKind {
    Target,
    Entry,
    Stop,
}

impl LevelKind {
    /// Draw order: target, entry, stop
    pub const ALL: [LevelKind; 3] = [LevelKind::Target, LevelKind::Entry, LevelKind::Stop];

    pub fn color(self) -> &'static str {
        match self {
            LevelKind::Target => "#10b981",
            LevelKind::Entry => "#3b82f6",
            LevelKind::Stop => "#ef4444",
        }
    }

    /// Entry is dashed, target and stop are solid
    pub fn style(self) -> PriceLineStyle {
        match self {
            LevelKind::Entry => PriceLineStyle::Dashed,
            _ => PriceLineStyle::Solid,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LevelKind::Target => "\u{1f3af} TARGET",
            LevelKind::Entry => "\u{1f535} ENTRY",
            LevelKind::Stop => "\u{1f6d1} STOP",
        }
    }

    /// The matching level out of a strategy's level set
    pub fn pick(self, levels: &StrategyLevels) -> &Level {
        match self {
            LevelKind::Target => &levels.target,
            LevelKind::Entry => &levels.entry,
            LevelKind::Stop => &levels.stop,
        }
    }

    /// Full price-line options for this kind at the given price
    pub fn options(self, price: f64) -> PriceLineOptions {
        PriceLineOptions {
            price,
            color: self.color().to_string(),
            line_width: 2,
            line_style: self.style(),
            title: self.title().to_string(),
            axis_label_visible: true,
        }
    }
}
