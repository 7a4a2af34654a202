//! Strategy level overlay
//!
//! Owns the strategy list and the live price-line handles. Focusing a
//! strategy removes every previously drawn line before drawing the new
//! ones, so handles never leak across refocuses.

use crate::chart::line::{LevelKind, PriceLineOptions};
use crate::error::Result;
use crate::types::StrategyAnalysis;

/// The seam to the charting library's candlestick series
///
/// Implemented by the wasm32 bindings in production and by a recording
/// mock in tests.
pub trait PriceLineSeries {
    /// Handle for a drawn line, passed back on removal
    type Line;

    fn create_price_line(&self, options: &PriceLineOptions) -> Result<Self::Line>;

    fn remove_price_line(&self, line: &Self::Line) -> Result<()>;
}

/// Price-line overlay for the currently analyzed pair
pub struct StrategyOverlay<S: PriceLineSeries> {
    strategies: Vec<StrategyAnalysis>,
    active_lines: Vec<S::Line>,
}

impl<S: PriceLineSeries> Default for StrategyOverlay<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PriceLineSeries> StrategyOverlay<S> {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            active_lines: Vec::new(),
        }
    }

    /// Replace the strategy list (typically from a fresh `/analysis` call)
    ///
    /// Lines already on the chart stay until the next `focus` or `clear`;
    /// indices handed to `focus` refer to this new list.
    pub fn set_strategies(&mut self, strategies: Vec<StrategyAnalysis>) {
        self.strategies = strategies;
    }

    pub fn strategies(&self) -> &[StrategyAnalysis] {
        &self.strategies
    }

    pub fn strategy(&self, index: usize) -> Option<&StrategyAnalysis> {
        self.strategies.get(index)
    }

    /// Number of lines currently on the chart
    pub fn active_lines(&self) -> usize {
        self.active_lines.len()
    }

    /// Remove every line this overlay has drawn
    pub fn clear(&mut self, series: &S) -> Result<()> {
        for line in self.active_lines.drain(..) {
            series.remove_price_line(&line)?;
        }
        Ok(())
    }

    /// Draw the level lines for the strategy at `index`
    ///
    /// No-op when the index has no strategy (existing lines stay). Otherwise
    /// previously drawn lines are removed first, then target, entry and stop
    /// are drawn in that order, skipping levels without a parsable finite
    /// price. Returns the number of lines drawn.
    pub fn focus(&mut self, series: &S, index: usize) -> Result<usize> {
        let Some(strategy) = self.strategies.get(index) else {
            return Ok(0);
        };
        let levels = strategy.levels.clone();

        self.clear(series)?;

        let mut drawn = 0;
        for kind in LevelKind::ALL {
            let Some(price) = kind.pick(&levels).as_price() else {
                continue;
            };
            let line = series.create_price_line(&kind.options(price))?;
            self.active_lines.push(line);
            drawn += 1;
        }
        Ok(drawn)
    }
}
