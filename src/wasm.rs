//! Browser exports
//!
//! The page used to reach these as globals (`window.apiRequest`,
//! `window.formatNumber`, `window.focusStrategy`, ...); they are now
//! wasm-bindgen exports, with the stateful pieces grouped behind
//! `DashboardHandle`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::api::ApiClient;
use crate::chart::{CandlestickSeries, ChartSeries, StrategyOverlay};
use crate::config::Config;
use crate::error::DashboardError;
use crate::fmt;
use crate::notify::{self, NotificationLevel};
use crate::types::StrategyAnalysis;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Fixed-decimal number rendering, two decimals by default
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64, decimals: Option<u32>) -> String {
    fmt::format_number(value, decimals.unwrap_or(2) as usize)
}

/// Day-first date rendering; unparsable input comes back unchanged
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(raw: &str) -> String {
    fmt::format_date(raw)
}

/// Console-backed notification stub
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, level: Option<String>) {
    let level = NotificationLevel::from_name(level.as_deref().unwrap_or("info"));
    notify::show_notification(message, level);
}

/// Stateful dashboard entry point: API client plus the chart overlay
#[wasm_bindgen]
pub struct DashboardHandle {
    client: ApiClient,
    series: Rc<ChartSeries>,
    overlay: Rc<RefCell<StrategyOverlay<ChartSeries>>>,
}

#[wasm_bindgen]
impl DashboardHandle {
    /// Bind to the page's candlestick series, optionally overriding the
    /// default configuration with a JSON blob
    #[wasm_bindgen(constructor)]
    pub fn new(
        series: CandlestickSeries,
        config_json: Option<String>,
    ) -> std::result::Result<DashboardHandle, JsValue> {
        let config = match config_json {
            Some(raw) => Config::from_json(&raw).map_err(to_js)?,
            None => Config::default(),
        };
        Ok(Self {
            client: ApiClient::new(config),
            series: Rc::new(ChartSeries::from(series)),
            overlay: Rc::new(RefCell::new(StrategyOverlay::new())),
        })
    }

    /// Authenticate and persist the bearer token for later requests
    pub fn login(&self, username: String, password: String) -> js_sys::Promise {
        let client = self.client.clone();
        future_to_promise(async move {
            client.login(&username, &password).await.map_err(to_js)?;
            Ok(JsValue::TRUE)
        })
    }

    /// Authenticated GET returning the raw JSON payload as a string
    #[wasm_bindgen(js_name = apiRequest)]
    pub fn api_request(&self, endpoint: String) -> js_sys::Promise {
        let client = self.client.clone();
        future_to_promise(async move {
            let payload = client.get_json(&endpoint).await.map_err(to_js)?;
            let json = serde_json::to_string(&payload).map_err(|e| to_js(e.into()))?;
            Ok(JsValue::from_str(&json))
        })
    }

    /// Fetch the strategy matrix for a pair and keep it for focusing;
    /// resolves with the full analysis payload as a JSON string
    #[wasm_bindgen(js_name = loadAnalysis)]
    pub fn load_analysis(&self, pair: String) -> js_sys::Promise {
        let client = self.client.clone();
        let overlay = Rc::clone(&self.overlay);
        future_to_promise(async move {
            let analysis = client.analysis(&pair).await.map_err(to_js)?;
            overlay
                .borrow_mut()
                .set_strategies(analysis.strategies.clone());
            let json = serde_json::to_string(&analysis).map_err(|e| to_js(e.into()))?;
            Ok(JsValue::from_str(&json))
        })
    }

    /// Replace the strategy list from a JSON array the page already holds
    #[wasm_bindgen(js_name = setStrategies)]
    pub fn set_strategies(&self, json: &str) -> std::result::Result<(), JsValue> {
        let strategies: Vec<StrategyAnalysis> = serde_json::from_str(json)
            .map_err(|e| to_js(e.into()))?;
        self.overlay.borrow_mut().set_strategies(strategies);
        Ok(())
    }

    /// Draw the level lines for the strategy at `index`; returns the
    /// number of lines drawn
    #[wasm_bindgen(js_name = focusStrategy)]
    pub fn focus_strategy(&self, index: usize) -> std::result::Result<u32, JsValue> {
        let mut overlay = self.overlay.borrow_mut();
        let drawn = overlay.focus(self.series.as_ref(), index).map_err(to_js)?;
        if let Some(strategy) = overlay.strategy(index) {
            let line = format!("Showing levels for: {}", strategy.name);
            web_sys::console::log_1(&JsValue::from_str(&line));
        }
        Ok(drawn as u32)
    }

    /// Remove every line the overlay has drawn
    #[wasm_bindgen(js_name = clearPriceLines)]
    pub fn clear_price_lines(&self) -> std::result::Result<(), JsValue> {
        self.overlay
            .borrow_mut()
            .clear(self.series.as_ref())
            .map_err(to_js)
    }
}

fn to_js(err: DashboardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
