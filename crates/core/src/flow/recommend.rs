use crate::api::CatalogApi;
use crate::domain::catalog::{Product, Query};
use crate::state::RequestState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shown to the user whenever a submit fails, regardless of the underlying
/// error kind. The detail goes to tracing only.
pub const RECOMMENDATIONS_FAILED: &str = "Failed to get recommendations. Please try again.";

/// Owns the request/response lifecycle of the recommendation screen.
///
/// Concurrent submits are allowed; each one stamps a monotonically increasing
/// generation and only the response matching the latest generation updates the
/// visible state. A completion from a superseded submit is dropped, so the
/// screen always reflects the most recent query rather than whichever request
/// happened to resolve last.
pub struct RecommendationFlow<A> {
    api: Arc<A>,
    visible: Mutex<Visible>,
    generation: AtomicU64,
}

struct Visible {
    state: RequestState<Vec<Product>>,
    generation: u64,
}

impl<A: CatalogApi> RecommendationFlow<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            visible: Mutex::new(Visible {
                state: RequestState::Idle,
                generation: 0,
            }),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn state(&self) -> RequestState<Vec<Product>> {
        self.visible.lock().await.state.clone()
    }

    /// Issues exactly one request for a non-blank query and resolves the
    /// visible state to `Ready` or `Failed`. Blank queries are a silent no-op.
    pub async fn submit(&self, query: Query) -> RequestState<Vec<Product>> {
        if query.is_blank() {
            return self.state().await;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut visible = self.visible.lock().await;
            visible.state = RequestState::Pending;
            visible.generation = generation;
        }

        let result = self
            .api
            .chat_recommendations(&query.message, query.top_k)
            .await;

        let mut visible = self.visible.lock().await;
        if visible.generation != generation {
            // A later submit owns the screen now; drop this completion.
            tracing::debug!(generation, "stale recommendation response dropped");
            return visible.state.clone();
        }

        visible.state = match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "recommendations ready");
                RequestState::Ready(products)
            }
            Err(err) => {
                tracing::error!(error = %err, "recommendation request failed");
                RequestState::Failed(RECOMMENDATIONS_FAILED)
            }
        };
        visible.state.clone()
    }
}
