pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::HttpCatalogApi;

use crate::domain::analytics::{
    BrandCount, CategoryCount, CategoryPrice, ColorCount, CountryCount, DatasetSummary,
    MaterialCount, PriceDistribution,
};
use crate::domain::catalog::Product;

/// Backend surface consumed by the flows. One method per wire operation; the
/// HTTP implementation lives in [`http`], tests substitute stubs.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    async fn chat_recommendations(
        &self,
        message: &str,
        top_k: u32,
    ) -> Result<Vec<Product>, ApiError>;

    async fn summary(&self) -> Result<DatasetSummary, ApiError>;

    async fn price_distribution(&self) -> Result<PriceDistribution, ApiError>;

    async fn top_brands(&self) -> Result<Vec<BrandCount>, ApiError>;

    async fn top_categories(&self) -> Result<Vec<CategoryCount>, ApiError>;

    async fn material_distribution(&self) -> Result<Vec<MaterialCount>, ApiError>;

    async fn color_distribution(&self) -> Result<Vec<ColorCount>, ApiError>;

    async fn country_origin(&self) -> Result<Vec<CountryCount>, ApiError>;

    async fn price_by_category(&self) -> Result<Vec<CategoryPrice>, ApiError>;
}
