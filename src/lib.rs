//! Dashboard Client - Browser support for the trading bot web dashboard
//!
//! The dashboard page is server-rendered; this crate is the client-side
//! half, compiled to wasm32 for the browser.
//!
//! # Architecture
//! - Authenticated API client over the bot's REST backend
//! - Formatting utilities for the tables and cards
//! - Strategy price-line overlay on the page's candlestick chart
//!
//! The pure pieces (types, formatting, overlay state, config) compile on
//! any target so unit tests run natively; fetch transport, token storage
//! and the charting bindings are wasm32-gated.

// Clippy configuration for dashboard code patterns
#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::map_unwrap_or)] // Explicit error handling preference

mod api;
mod auth;
mod chart;
mod config;
mod error;
mod fmt;
mod notify;
mod types;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use api::ApiClient;
pub use auth::TokenStore;
pub use chart::{LevelKind, PriceLineOptions, PriceLineSeries, PriceLineStyle, StrategyOverlay};
pub use config::Config;
pub use error::{DashboardError, Result};
pub use fmt::{
    PnlClass, format_date, format_number, format_percent, format_usd, parse_percent,
};
pub use notify::{NotificationLevel, show_notification};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use chart::{CandlestickSeries, ChartSeries, PriceLine};
