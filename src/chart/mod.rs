//! Chart overlay module - strategy price lines on the candlestick chart
//!
//! The charting library is an external collaborator; everything here talks
//! to it through a narrow seam.
//!
//! # Architecture
//! - `line.rs`: price-line options and the per-level presentation table
//! - `overlay.rs`: the series seam and the clear-then-redraw overlay state
//! - `bindings.rs`: wasm32 externs for the library's series object

mod line;
mod overlay;

#[cfg(target_arch = "wasm32")]
mod bindings;

pub use line::{LevelKind, PriceLineOptions, PriceLineStyle};
pub use overlay::{PriceLineSeries, StrategyOverlay};

#[cfg(target_arch = "wasm32")]
pub use bindings::{CandlestickSeries, ChartSeries, PriceLine};
