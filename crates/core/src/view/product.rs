use crate::domain::catalog::Product;

const MAX_DESCRIPTION_CHARS: usize = 150;
const MAX_CATEGORY_TAGS: usize = 3;
const ELLIPSIS: &str = "...";

/// Local image swapped in by the renderer when a product image URL fails to
/// load at display time.
pub const PLACEHOLDER_IMAGE: &str = "placeholder-image.png";

/// What a product card renders instead of an image element.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductImage {
    Url(String),
    Placeholder,
}

/// One product match shaped for rendering: truncation, formatting and
/// fallbacks already applied, nothing left for the renderer to decide.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub title: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub categories: Vec<String>,
    pub score: Option<String>,
    pub image: ProductImage,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.as_deref().map(truncate_description),
            price: product.price.map(format_price),
            categories: product
                .categories
                .iter()
                .take(MAX_CATEGORY_TAGS)
                .cloned()
                .collect(),
            score: product.score.and_then(format_score),
            image: match &product.image {
                Some(url) => ProductImage::Url(url.clone()),
                None => ProductImage::Placeholder,
            },
        }
    }
}

/// First 150 characters plus an ellipsis marker; shorter text passes through
/// unmodified.
fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(MAX_DESCRIPTION_CHARS) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Relevance as a percentage with one decimal place. A zero score renders
/// nothing, matching the backend convention that zero means "no signal".
fn format_score(score: f64) -> Option<String> {
    if score == 0.0 {
        return None;
    }
    Some(format!("{:.1}%", score * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            uniq_id: "p-1".to_string(),
            title: "Oak Desk".to_string(),
            brand: None,
            description: None,
            price: None,
            categories: Vec::new(),
            image: None,
            score: None,
        }
    }

    #[test]
    fn long_description_truncates_at_150_chars() {
        let text = "x".repeat(200);
        let mut p = product();
        p.description = Some(text.clone());

        let card = ProductCard::from_product(&p);
        let shown = card.description.unwrap();
        assert_eq!(shown, format!("{}...", &text[..150]));
        assert_eq!(shown.chars().count(), 153);
    }

    #[test]
    fn exact_150_char_description_passes_through() {
        let text = "y".repeat(150);
        let mut p = product();
        p.description = Some(text.clone());

        let card = ProductCard::from_product(&p);
        assert_eq!(card.description.unwrap(), text);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(200);
        let mut p = product();
        p.description = Some(text);

        let shown = ProductCard::from_product(&p).description.unwrap();
        assert_eq!(shown.chars().count(), 153);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn absent_description_renders_nothing() {
        let card = ProductCard::from_product(&product());
        assert!(card.description.is_none());
    }

    #[test]
    fn price_renders_with_two_decimals_only_when_present() {
        let mut p = product();
        p.price = Some(129.999);
        assert_eq!(
            ProductCard::from_product(&p).price,
            Some("$130.00".to_string())
        );

        assert!(ProductCard::from_product(&product()).price.is_none());
    }

    #[test]
    fn score_renders_as_one_decimal_percent() {
        let mut p = product();
        p.score = Some(0.873);
        assert_eq!(
            ProductCard::from_product(&p).score,
            Some("87.3%".to_string())
        );
    }

    #[test]
    fn zero_or_absent_score_renders_nothing() {
        let mut p = product();
        p.score = Some(0.0);
        assert!(ProductCard::from_product(&p).score.is_none());
        assert!(ProductCard::from_product(&product()).score.is_none());
    }

    #[test]
    fn at_most_first_three_categories_render_in_order() {
        let mut p = product();
        p.categories = vec!["a", "b", "c", "d", "e"]
            .into_iter()
            .map(String::from)
            .collect();

        let card = ProductCard::from_product(&p);
        assert_eq!(card.categories, vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_image_falls_back_to_placeholder_marker() {
        assert_eq!(
            ProductCard::from_product(&product()).image,
            ProductImage::Placeholder
        );

        let mut p = product();
        p.image = Some("https://example.com/desk.jpg".to_string());
        assert_eq!(
            ProductCard::from_product(&p).image,
            ProductImage::Url("https://example.com/desk.jpg".to_string())
        );
    }
}
