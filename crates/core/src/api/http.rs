use crate::api::{ApiError, CatalogApi};
use crate::config::Settings;
use crate::domain::analytics::{
    BrandCount, CategoryCount, CategoryPrice, ColorCount, CountryCount, DatasetSummary,
    MaterialCount, PriceDistribution,
};
use crate::domain::catalog::Product;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://ai-ml-product-reco-app.onrender.com/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CHAT_PATH: &str = "/recommendations/chat";
const SUMMARY_PATH: &str = "/analytics/summary";
const PRICE_DISTRIBUTION_PATH: &str = "/analytics/price-distribution";
const TOP_BRANDS_PATH: &str = "/analytics/top-brands";
const TOP_CATEGORIES_PATH: &str = "/analytics/top-categories";
const MATERIAL_DISTRIBUTION_PATH: &str = "/analytics/material-distribution";
const COLOR_DISTRIBUTION_PATH: &str = "/analytics/color-distribution";
const COUNTRY_ORIGIN_PATH: &str = "/analytics/country-origin";
const PRICE_BY_CATEGORY_PATH: &str = "/analytics/price-by-category";

#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let base_url = settings
            .api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build catalog http client")?;

        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn decode<T: DeserializeOwned>(
        res: reqwest::Response,
        endpoint: &'static str,
    ) -> Result<T, ApiError> {
        let status = res.status();
        let text = res.text().await.map_err(ApiError::Transport)?;
        if !status.is_success() {
            return Err(ApiError::Status { status, body: text });
        }
        serde_json::from_str::<T>(&text).map_err(|source| ApiError::Decode { endpoint, source })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ApiError> {
        let res = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(res, path).await
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    #[allow(dead_code)]
    query: String,
    recommendations: Vec<Product>,
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn chat_recommendations(
        &self,
        message: &str,
        top_k: u32,
    ) -> Result<Vec<Product>, ApiError> {
        let res = self
            .http
            .post(self.url(CHAT_PATH))
            .json(&ChatRequest { message, top_k })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let body: ChatResponse = Self::decode(res, CHAT_PATH).await?;
        Ok(body.recommendations)
    }

    async fn summary(&self) -> Result<DatasetSummary, ApiError> {
        self.get_json(SUMMARY_PATH).await
    }

    async fn price_distribution(&self) -> Result<PriceDistribution, ApiError> {
        self.get_json(PRICE_DISTRIBUTION_PATH).await
    }

    async fn top_brands(&self) -> Result<Vec<BrandCount>, ApiError> {
        self.get_json(TOP_BRANDS_PATH).await
    }

    async fn top_categories(&self) -> Result<Vec<CategoryCount>, ApiError> {
        self.get_json(TOP_CATEGORIES_PATH).await
    }

    async fn material_distribution(&self) -> Result<Vec<MaterialCount>, ApiError> {
        self.get_json(MATERIAL_DISTRIBUTION_PATH).await
    }

    async fn color_distribution(&self) -> Result<Vec<ColorCount>, ApiError> {
        self.get_json(COLOR_DISTRIBUTION_PATH).await
    }

    async fn country_origin(&self) -> Result<Vec<CountryCount>, ApiError> {
        self.get_json(COUNTRY_ORIGIN_PATH).await
    }

    async fn price_by_category(&self) -> Result<Vec<CategoryPrice>, ApiError> {
        self.get_json(PRICE_BY_CATEGORY_PATH).await
    }
}
