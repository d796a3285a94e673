pub mod coin_detail;
pub mod endpoint;
pub mod market_chart;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;

// Base URL for the CoinGecko v3 API
pub const BASE_URL: &str = "https://api.coingecko.com/api/v3";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct CoingeckoClient {
    reqwest: Client,
    base_url: String,
}

impl CoingeckoClient {
    /// Client against the public API. `api_key` is the optional demo key.
    pub fn new(api_key: Option<&str>) -> Self {
        Self::with_base_url(BASE_URL, api_key, DEFAULT_TIMEOUT)
    }

    /// Client against an alternate base URL, with a bounded request timeout.
    pub fn with_base_url(base_url: &str, api_key: Option<&str>, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            headers.insert(
                "x-cg-demo-api-key",
                HeaderValue::from_str(key).expect("Failed to create header value"),
            );
        }

        let reqwest = ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest client");

        Self {
            reqwest,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> reqwest::Result<T> {
        let response = self
            .reqwest
            .get(format!("{}/{}", self.base_url, path))
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(response)
    }

    pub async fn call<E: Endpoint>(&self, endpoint: &E) -> reqwest::Result<E::Response> {
        self.get(&endpoint.path(), &endpoint.query()).await
    }
}
