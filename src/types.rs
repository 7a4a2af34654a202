//! Wire types for the dashboard API
//!
//! Serde models for every payload the backend serves. Field names follow
//! the JSON the server emits; renames are marked explicitly.

use serde::{Deserialize, Serialize};

/// A price level as delivered by the backend
///
/// The analysis endpoint rounds levels to plain numbers, but older
/// payloads carried numeric strings and absent levels arrive as null.
/// `as_price` is the single guard between the wire and the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Level {
    /// Plain JSON number
    Number(f64),
    /// Numeric string, parsed on use
    Text(String),
    /// Absent or null
    #[default]
    Missing,
}

impl Level {
    /// Numeric value of the level, if it has one
    ///
    /// Strings are trimmed and parsed; NaN and infinities are rejected
    /// in all forms, so a `Some` is always drawable.
    pub fn as_price(&self) -> Option<f64> {
        let value = match self {
            Level::Number(n) => Some(*n),
            Level::Text(raw) => raw.trim().parse::<f64>().ok(),
            Level::Missing => None,
        }?;
        value.is_finite().then_some(value)
    }
}

/// Entry/exit price levels for one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StrategyLevels {
    #[serde(default)]
    pub target: Level,
    #[serde(default)]
    pub entry: Level,
    #[serde(default)]
    pub stop: Level,
}

/// One strategy row from the analysis matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyAnalysis {
    pub name: String,
    /// Raw signal label (e.g. "COMPRA", "VENTA", "NEUTRAL")
    pub signal: String,
    /// Recommendation bucket, `type` on the wire
    #[serde(rename = "type")]
    pub recommendation: String,
    /// Confidence score, clipped to 10-99 server-side
    pub reliability: u8,
    #[serde(default)]
    pub levels: StrategyLevels,
    #[serde(default)]
    pub desc: String,
    /// Whether this is the master strategy driving the global signal
    #[serde(default)]
    pub is_main: bool,
}

/// Fear & greed index snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FearGreedIndex {
    pub value: i32,
    pub classification: String,
}

/// Response of `GET /analysis/<pair>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub pair: String,
    /// Latest close price
    pub price: f64,
    /// Global recommendation from the master strategy
    pub recommendation: String,
    pub reliability: u8,
    #[serde(default)]
    pub fng_index: Option<FearGreedIndex>,
    /// Full strategy matrix; `StrategyOverlay` consumes this
    #[serde(default)]
    pub strategies: Vec<StrategyAnalysis>,
    /// Master strategy levels, kept top-level for older pages
    #[serde(default)]
    pub levels: StrategyLevels,
    #[serde(default)]
    pub support: Level,
    #[serde(default)]
    pub resistance: Level,
}

/// Response of `GET /ping`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
}

/// Response of `GET /version`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub bot_name: String,
    pub version: String,
    pub api_version: String,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Per-currency balance entry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurrencyBalance {
    #[serde(default)]
    pub free: f64,
    #[serde(default)]
    pub used: f64,
    #[serde(default)]
    pub total: f64,
}

/// Response of `GET /balance`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Currency code -> balance, only non-zero currencies
    pub currencies: std::collections::BTreeMap<String, CurrencyBalance>,
    pub total: usize,
    pub stake_currency: String,
}

/// One open trade as reported by `/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSummary {
    pub id: i64,
    pub pair: String,
    pub exchange: String,
    pub is_open: bool,
    pub stake_amount: f64,
    pub amount: f64,
    pub open_rate: f64,
    #[serde(default)]
    pub close_rate: Option<f64>,
    pub open_date: String,
    #[serde(default)]
    pub close_date: Option<String>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub profit_pct: Option<f64>,
    #[serde(default)]
    pub profit_abs: Option<f64>,
    #[serde(default)]
    pub exit_reason: Option<String>,
    #[serde(default)]
    pub strategy: Option<String>,
}

/// Response of `GET /status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotStatus {
    /// "running" while trades are open, "idle" otherwise
    pub status: String,
    pub dry_run: bool,
    pub max_open_trades: u32,
    pub open_trades: usize,
    #[serde(default)]
    pub trades: Vec<TradeSummary>,
}

/// Response of `GET /ticker/<pair>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    #[serde(default)]
    pub bid: Option<f64>,
    #[serde(default)]
    pub ask: Option<f64>,
    #[serde(default)]
    pub last: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    /// Exchange timestamp in milliseconds
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// One candle row: timestamp (ms), open, high, low, close, volume
pub type OhlcvRow = (i64, f64, f64, f64, f64, f64);

/// Response of `GET /ohlcv/<pair>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhlcvResponse {
    pub pair: String,
    pub timeframe: String,
    #[serde(default)]
    pub data: Vec<OhlcvRow>,
}

/// Response of `GET /markets`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketsResponse {
    pub markets: Vec<String>,
    pub total: usize,
}

/// Response of `GET /config` (sensitive keys stripped server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeConfig {
    pub bot_name: String,
    pub dry_run: bool,
    pub stake_currency: String,
    pub stake_amount: f64,
    pub max_open_trades: u32,
    pub exchange: String,
    pub timeframe: String,
    #[serde(default)]
    pub pairlist: Vec<String>,
    pub stoploss: f64,
    pub strategy: String,
}

/// Response of `POST /start` and `POST /stop`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlResponse {
    pub message: String,
    pub status: String,
}

/// Response of `POST /forcebuy`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceBuyResponse {
    pub message: String,
    pub pair: String,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Response of `POST /forcesell`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceSellResponse {
    pub message: String,
    pub trade_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_guard() {
        assert_eq!(Level::Number(104.5).as_price(), Some(104.5));
        assert_eq!(Level::Text("3.14".to_string()).as_price(), Some(3.14));
        assert_eq!(Level::Text(" 42 ".to_string()).as_price(), Some(42.0));
        assert_eq!(Level::Text("n/a".to_string()).as_price(), None);
        assert_eq!(Level::Text(String::new()).as_price(), None);
        assert_eq!(Level::Missing.as_price(), None);
        // Non-finite values never reach the chart
        assert_eq!(Level::Number(f64::NAN).as_price(), None);
        assert_eq!(Level::Text("inf".to_string()).as_price(), None);
    }

    #[test]
    fn test_level_deserialization_forms() {
        let levels: StrategyLevels =
            serde_json::from_str(r#"{"target": 110.0, "entry": "99.5", "stop": null}"#)
                .expect("levels parse");
        assert_eq!(levels.target.as_price(), Some(110.0));
        assert_eq!(levels.entry.as_price(), Some(99.5));
        assert_eq!(levels.stop.as_price(), None);

        // Absent keys behave like null
        let empty: StrategyLevels = serde_json::from_str("{}").expect("empty levels");
        assert_eq!(empty.target, Level::Missing);
    }

    #[test]
    fn test_analysis_response_deserialization() {
        let raw = r#"{
            "pair": "BTC/USDT",
            "price": 67000.5,
            "recommendation": "COMPRA",
            "reliability": 72,
            "fng_index": {"value": 55, "classification": "Greed"},
            "strategies": [
                {
                    "name": "CryptoSwing V1 (Master)",
                    "signal": "COMPRA",
                    "type": "COMPRA",
                    "reliability": 72,
                    "levels": {"entry": 66800.0, "stop": 64900.0, "target": 70100.0},
                    "desc": "Senal basada en CryptoSwing V1 (Master)",
                    "is_main": true
                },
                {
                    "name": "Volatilidad Bollinger",
                    "signal": "NEUTRAL",
                    "type": "WAIT",
                    "reliability": 44,
                    "levels": {"entry": 66100.0, "stop": 64100.0, "target": 68900.0}
                }
            ],
            "levels": {"entry": 66800.0, "stop": 64900.0, "target": 70100.0},
            "support": 64900.0,
            "resistance": 70100.0
        }"#;

        let analysis: AnalysisResponse = serde_json::from_str(raw).expect("analysis parse");
        assert_eq!(analysis.strategies.len(), 2);
        assert!(analysis.strategies[0].is_main);
        assert_eq!(analysis.strategies[0].recommendation, "COMPRA");
        assert!(!analysis.strategies[1].is_main);
        assert_eq!(analysis.support.as_price(), Some(64900.0));
        assert_eq!(
            analysis.strategies[1].levels.target.as_price(),
            Some(68900.0)
        );
    }

    #[test]
    fn test_status_response_deserialization() {
        let raw = r#"{
            "status": "running",
            "dry_run": true,
            "max_open_trades": 3,
            "open_trades": 1,
            "trades": [{
                "id": 7,
                "pair": "ETH/USDT",
                "exchange": "binance",
                "is_open": true,
                "stake_amount": 100.0,
                "amount": 0.031,
                "open_rate": 3210.55,
                "close_rate": null,
                "open_date": "2024-03-01T10:15:00+00:00",
                "stop_loss": 3050.0,
                "strategy": "CryptoSwingV1"
            }]
        }"#;

        let status: BotStatus = serde_json::from_str(raw).expect("status parse");
        assert_eq!(status.trades.len(), 1);
        assert_eq!(status.trades[0].pair, "ETH/USDT");
        assert!(status.trades[0].close_rate.is_none());
    }

    #[test]
    fn test_ohlcv_rows_deserialize_from_arrays() {
        let raw = r#"{
            "pair": "BTC/USDT",
            "timeframe": "1d",
            "data": [[1709251200000, 61000.0, 62500.0, 60800.0, 62100.0, 1834.2]]
        }"#;

        let ohlcv: OhlcvResponse = serde_json::from_str(raw).expect("ohlcv parse");
        assert_eq!(ohlcv.data.len(), 1);
        let (ts, open, .., close, volume) = ohlcv.data[0];
        assert_eq!(ts, 1_709_251_200_000);
        assert_eq!(open, 61000.0);
        assert_eq!(close, 62100.0);
        assert_eq!(volume, 1834.2);
    }

    #[test]
    fn test_balance_response_deserialization() {
        let raw = r#"{
            "currencies": {
                "BTC": {"free": 0.5, "used": 0.1, "total": 0.6},
                "USDT": {"free": 1500.0, "used": 0.0, "total": 1500.0}
            },
            "total": 2,
            "stake_currency": "USDT"
        }"#;

        let balance: BalanceResponse = serde_json::from_str(raw).expect("balance parse");
        assert_eq!(balance.currencies.len(), 2);
        assert_eq!(balance.currencies["USDT"].free, 1500.0);
    }
}
