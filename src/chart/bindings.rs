//! wasm32 bindings for the charting library's candlestick series
//!
//! The library object is created by the page (it owns the chart); this
//! module only imports the two price-line methods and adapts them to the
//! `PriceLineSeries` seam. Options cross the boundary as JSON.

use js_sys::JSON;
use wasm_bindgen::prelude::*;

use crate::chart::line::PriceLineOptions;
use crate::chart::overlay::PriceLineSeries;
use crate::error::{DashboardError, Result};

#[wasm_bindgen]
extern "C" {
    /// Candlestick series object from the charting library
    pub type CandlestickSeries;

    #[wasm_bindgen(method, catch, js_name = createPriceLine)]
    fn create_price_line(
        this: &CandlestickSeries,
        options: &JsValue,
    ) -> std::result::Result<PriceLine, JsValue>;

    #[wasm_bindgen(method, catch, js_name = removePriceLine)]
    fn remove_price_line(
        this: &CandlestickSeries,
        line: &PriceLine,
    ) -> std::result::Result<(), JsValue>;

    /// Opaque handle returned by `createPriceLine`
    pub type PriceLine;
}

/// `PriceLineSeries` adapter around the imported series object
pub struct ChartSeries {
    series: CandlestickSeries,
}

impl From<CandlestickSeries> for ChartSeries {
    fn from(series: CandlestickSeries) -> Self {
        Self { series }
    }
}

impl PriceLineSeries for ChartSeries {
    type Line = PriceLine;

    fn create_price_line(&self, options: &PriceLineOptions) -> Result<PriceLine> {
        let json = serde_json::to_string(options)?;
        let value = JSON::parse(&json).map_err(js_error)?;
        self.series.create_price_line(&value).map_err(js_error)
    }

    fn remove_price_line(&self, line: &PriceLine) -> Result<()> {
        self.series.remove_price_line(line).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> DashboardError {
    let detail = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    DashboardError::Chart(detail)
}
