//! Dashboard API client
//!
//! Implements the backend's REST surface for the browser:
//! - Health/version probes
//! - Login and bot status
//! - Pair analysis (the strategy matrix), tickers, OHLCV
//! - Start/stop and forced entry/exit controls
//!
//! Every request goes through the same authenticated wrapper: JSON content
//! type, an `X-Request-Id` for server-side log correlation, and a bearer
//! token when one is stored. Non-2xx statuses reject with the status code
//! and body text.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::TokenStore;
use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::types::{
    AnalysisResponse, BalanceResponse, BotStatus, ControlResponse, ForceBuyResponse,
    ForceSellResponse, LoginRequest, LoginResponse, MarketsResponse, OhlcvResponse, PingResponse,
    SafeConfig, Ticker, VersionInfo,
};

/// Dashboard API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    tokens: TokenStore,
}

impl ApiClient {
    /// Create a client for the configured API base
    pub fn new(config: Config) -> Self {
        let tokens = TokenStore::new(config.token_key.clone());
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Health check
    pub async fn ping(&self) -> Result<PingResponse> {
        self.get("/ping").await
    }

    /// Backend name and version
    pub async fn version(&self) -> Result<VersionInfo> {
        self.get("/version").await
    }

    /// Authenticate and persist the returned bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("/login", &credentials).await?;
        self.tokens.store(&response.access_token)?;
        Ok(response)
    }

    /// Account balance, optionally narrowed to one currency
    pub async fn balance(&self, currency: Option<&str>) -> Result<BalanceResponse> {
        match currency {
            Some(currency) => self.get(&format!("/balance?currency={currency}")).await,
            None => self.get("/balance").await,
        }
    }

    /// Bot status and open trades
    pub async fn status(&self) -> Result<BotStatus> {
        self.get("/status").await
    }

    /// Full strategy matrix for a pair
    pub async fn analysis(&self, pair: &str) -> Result<AnalysisResponse> {
        self.get(&format!("/analysis/{pair}")).await
    }

    /// Latest ticker for a pair
    pub async fn ticker(&self, pair: &str) -> Result<Ticker> {
        self.get(&format!("/ticker/{pair}")).await
    }

    /// OHLCV candles for a pair
    pub async fn ohlcv(
        &self,
        pair: &str,
        timeframe: Option<&str>,
        limit: Option<u32>,
    ) -> Result<OhlcvResponse> {
        self.get(&Self::ohlcv_endpoint(pair, timeframe, limit)).await
    }

    /// Tradable markets, optionally filtered by stake currency
    pub async fn markets(&self, stake_currency: Option<&str>) -> Result<MarketsResponse> {
        match stake_currency {
            Some(stake) => self.get(&format!("/markets?stake_currency={stake}")).await,
            None => self.get("/markets").await,
        }
    }

    /// Bot configuration with sensitive keys stripped
    pub async fn bot_config(&self) -> Result<SafeConfig> {
        self.get("/config").await
    }

    /// Start the trading bot
    pub async fn start_bot(&self) -> Result<ControlResponse> {
        self.post("/start", &serde_json::json!({})).await
    }

    /// Stop the trading bot
    pub async fn stop_bot(&self) -> Result<ControlResponse> {
        self.post("/stop", &serde_json::json!({})).await
    }

    /// Force an entry on a pair, at market unless a price is given
    pub async fn force_buy(&self, pair: &str, price: Option<f64>) -> Result<ForceBuyResponse> {
        self.post(
            "/forcebuy",
            &serde_json::json!({ "pair": pair, "price": price }),
        )
        .await
    }

    /// Force an exit for an open trade
    pub async fn force_sell(&self, trade_id: i64) -> Result<ForceSellResponse> {
        self.post("/forcesell", &serde_json::json!({ "trade_id": trade_id }))
            .await
    }

    /// Untyped GET for endpoints without a dedicated wrapper
    pub async fn get_json(&self, endpoint: &str) -> Result<serde_json::Value> {
        self.get(endpoint).await
    }

    fn ohlcv_endpoint(pair: &str, timeframe: Option<&str>, limit: Option<u32>) -> String {
        let mut endpoint = format!("/ohlcv/{pair}");
        let mut separator = '?';
        if let Some(timeframe) = timeframe {
            endpoint.push_str(&format!("{separator}timeframe={timeframe}"));
            separator = '&';
        }
        if let Some(limit) = limit {
            endpoint.push_str(&format!("{separator}limit={limit}"));
        }
        endpoint
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.api_base, endpoint)
    }

    /// Perform GET request with authentication
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let request = self.http.get(self.endpoint_url(endpoint));
        let response = self.apply_headers(request).send().await?;
        Self::handle_response(response).await
    }

    /// Perform POST request with authentication
    async fn post<T: DeserializeOwned, B: Serialize>(&self, endpoint: &str, body: &B) -> Result<T> {
        let request = self.http.post(self.endpoint_url(endpoint)).json(body);
        let response = self.apply_headers(request).send().await?;
        Self::handle_response(response).await
    }

    /// Shared headers: JSON content type, request id, bearer token if stored
    fn apply_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .header("Content-Type", "application/json")
            .header("X-Request-Id", uuid::Uuid::new_v4().to_string());

        match self.tokens.bearer_token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Handle API response, checking for errors
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.as_u16() == 401 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unauthorized".into());
            return Err(DashboardError::Auth(body));
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(DashboardError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(DashboardError::from)
    }
}
