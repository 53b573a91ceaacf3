pub mod analytics;
pub mod recommend;

pub use analytics::AnalyticsFlow;
pub use recommend::RecommendationFlow;
