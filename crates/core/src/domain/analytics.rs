use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline dataset statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_products: u64,
    pub unique_brands: u64,
    #[serde(default)]
    pub unique_materials: u64,
    #[serde(default)]
    pub unique_colors: u64,
    pub price_range: PriceRange,
    pub products_with_images: u64,
    pub image_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    #[serde(default)]
    pub median: f64,
}

/// Histogram of prices. Fetched and stored with the snapshot; no chart in the
/// current screens consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDistribution {
    #[serde(default)]
    pub bins: Vec<String>,
    #[serde(default)]
    pub counts: Vec<u64>,
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandCount {
    pub brand: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCount {
    pub material: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCount {
    pub color: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPrice {
    pub category: String,
    pub avg_price: f64,
    #[serde(default)]
    pub product_count: Option<u64>,
}

/// Aggregate of the eight analytics sub-datasets.
///
/// Valid for rendering only when assembled from eight successful fetches;
/// replaced wholesale on every reload, never mutated field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    pub summary: DatasetSummary,
    pub price_distribution: PriceDistribution,
    pub top_brands: Vec<BrandCount>,
    pub top_categories: Vec<CategoryCount>,
    pub materials: Vec<MaterialCount>,
    pub colors: Vec<ColorCount>,
    pub countries: Vec<CountryCount>,
    pub price_by_category: Vec<CategoryPrice>,
    pub loaded_at: DateTime<Utc>,
}
