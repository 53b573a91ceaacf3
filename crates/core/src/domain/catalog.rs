use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_K: u32 = 5;

/// One free-text recommendation request. Created on submission and discarded
/// after dispatch.
#[derive(Debug, Clone)]
pub struct Query {
    pub message: String,
    pub top_k: u32,
}

impl Query {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// A query with nothing but whitespace carries no intent; submitting it
    /// is a no-op rather than an error.
    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty()
    }
}

/// One ranked product match as returned by the backend. Immutable once
/// received; list order reflects backend-assigned rank and is preserved
/// through rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub uniq_id: String,
    pub title: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_to_top_5() {
        let q = Query::new("comfortable office chair");
        assert_eq!(q.top_k, 5);
        assert!(!q.is_blank());
        assert!(Query::new("   \n\t").is_blank());
        assert!(Query::new("").is_blank());
    }

    #[test]
    fn decodes_product_with_optional_fields_absent() {
        let s = r#"{"uniq_id": "p-1", "title": "Oak Desk"}"#;
        let p: Product = serde_json::from_str(s).unwrap();
        assert_eq!(p.uniq_id, "p-1");
        assert_eq!(p.title, "Oak Desk");
        assert!(p.brand.is_none());
        assert!(p.description.is_none());
        assert!(p.price.is_none());
        assert!(p.categories.is_empty());
        assert!(p.image.is_none());
        assert!(p.score.is_none());
    }

    #[test]
    fn decodes_product_with_all_fields() {
        let s = r#"{
            "uniq_id": "p-2",
            "title": "Velvet Armchair",
            "brand": "Acme",
            "description": "Plush seating",
            "price": 129.999,
            "categories": ["Chairs", "Living Room"],
            "image": "https://example.com/armchair.jpg",
            "score": 0.873,
            "extra": {"sku": "A-42"}
        }"#;
        let p: Product = serde_json::from_str(s).unwrap();
        assert_eq!(p.price, Some(129.999));
        assert_eq!(p.categories, vec!["Chairs", "Living Room"]);
        assert_eq!(p.score, Some(0.873));
    }
}
