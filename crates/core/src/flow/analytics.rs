use crate::api::{ApiError, CatalogApi};
use crate::domain::analytics::{
    AnalyticsSnapshot, BrandCount, CategoryCount, CategoryPrice, ColorCount, CountryCount,
    DatasetSummary, MaterialCount, PriceDistribution,
};
use crate::state::RequestState;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shown to the user when any of the eight analytics fetches fails.
pub const ANALYTICS_FAILED: &str = "Failed to load analytics data.";

/// Owns the analytics screen lifecycle: eight parameterless reads launched
/// together, joined all-or-nothing into one snapshot.
pub struct AnalyticsFlow<A> {
    api: Arc<A>,
    state: Mutex<RequestState<AnalyticsSnapshot>>,
}

impl<A: CatalogApi> AnalyticsFlow<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: Mutex::new(RequestState::Idle),
        }
    }

    pub async fn state(&self) -> RequestState<AnalyticsSnapshot> {
        self.state.lock().await.clone()
    }

    /// Issues all eight requests concurrently and waits for every one to
    /// settle. All successes assemble a fresh snapshot; one failure discards
    /// the partial results and resolves to `Failed`. A later call re-issues
    /// all eight and replaces the snapshot wholesale.
    pub async fn load(&self) -> RequestState<AnalyticsSnapshot> {
        {
            *self.state.lock().await = RequestState::Pending;
        }

        let (summary, price_distribution, top_brands, top_categories, materials, colors, countries, price_by_category) = tokio::join!(
            self.api.summary(),
            self.api.price_distribution(),
            self.api.top_brands(),
            self.api.top_categories(),
            self.api.material_distribution(),
            self.api.color_distribution(),
            self.api.country_origin(),
            self.api.price_by_category(),
        );

        let assembled = assemble(
            summary,
            price_distribution,
            top_brands,
            top_categories,
            materials,
            colors,
            countries,
            price_by_category,
        );

        let mut state = self.state.lock().await;
        *state = match assembled {
            Ok(snapshot) => {
                tracing::debug!(
                    total_products = snapshot.summary.total_products,
                    brands = snapshot.top_brands.len(),
                    "analytics snapshot ready"
                );
                RequestState::Ready(snapshot)
            }
            Err(err) => {
                tracing::error!(error = %err, "analytics load failed");
                RequestState::Failed(ANALYTICS_FAILED)
            }
        };
        state.clone()
    }
}

/// All-or-nothing join: the first error (in fixed endpoint order) wins and the
/// remaining successes are dropped with it.
#[allow(clippy::too_many_arguments)]
fn assemble(
    summary: Result<DatasetSummary, ApiError>,
    price_distribution: Result<PriceDistribution, ApiError>,
    top_brands: Result<Vec<BrandCount>, ApiError>,
    top_categories: Result<Vec<CategoryCount>, ApiError>,
    materials: Result<Vec<MaterialCount>, ApiError>,
    colors: Result<Vec<ColorCount>, ApiError>,
    countries: Result<Vec<CountryCount>, ApiError>,
    price_by_category: Result<Vec<CategoryPrice>, ApiError>,
) -> Result<AnalyticsSnapshot, ApiError> {
    Ok(AnalyticsSnapshot {
        summary: summary?,
        price_distribution: price_distribution?,
        top_brands: top_brands?,
        top_categories: top_categories?,
        materials: materials?,
        colors: colors?,
        countries: countries?,
        price_by_category: price_by_category?,
        loaded_at: chrono::Utc::now(),
    })
}
