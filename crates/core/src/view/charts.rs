use crate::domain::analytics::{
    BrandCount, CategoryCount, CategoryPrice, ColorCount, CountryCount, DatasetSummary,
    MaterialCount,
};
use crate::view::product::format_price;

/// Segment colors assigned by position, cycling when a dataset outgrows the
/// palette.
pub const DOUGHNUT_PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384", "#C9CBCF",
    "#4BC0C0", "#FF6384",
];

/// Labels and values positionally aligned, in received order. No client-side
/// sorting or top-N filtering; the server already limits the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDataset {
    pub label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoughnutDataset {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: String,
    pub count: String,
}

/// Formatted text for the four headline cards.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub total_products: String,
    pub unique_brands: String,
    pub average_price: String,
    pub products_with_images: String,
}

pub fn brand_bar_dataset(rows: &[BrandCount]) -> BarDataset {
    BarDataset {
        label: "Number of Products",
        labels: rows.iter().map(|r| r.brand.clone()).collect(),
        values: rows.iter().map(|r| r.count as f64).collect(),
    }
}

pub fn category_bar_dataset(rows: &[CategoryCount]) -> BarDataset {
    BarDataset {
        label: "Number of Products",
        labels: rows.iter().map(|r| r.category.clone()).collect(),
        values: rows.iter().map(|r| r.count as f64).collect(),
    }
}

pub fn material_doughnut_dataset(rows: &[MaterialCount]) -> DoughnutDataset {
    DoughnutDataset {
        labels: rows.iter().map(|r| r.material.clone()).collect(),
        values: rows.iter().map(|r| r.count as f64).collect(),
        colors: (0..rows.len())
            .map(|i| DOUGHNUT_PALETTE[i % DOUGHNUT_PALETTE.len()])
            .collect(),
    }
}

/// `None` when the sub-dataset is empty; the chart is simply not rendered.
pub fn price_by_category_dataset(rows: &[CategoryPrice]) -> Option<BarDataset> {
    if rows.is_empty() {
        return None;
    }
    Some(BarDataset {
        label: "Average Price ($)",
        labels: rows.iter().map(|r| r.category.clone()).collect(),
        values: rows.iter().map(|r| r.avg_price).collect(),
    })
}

pub fn color_table_rows(rows: &[ColorCount]) -> Vec<TableRow> {
    rows.iter()
        .map(|r| TableRow {
            label: r.color.clone(),
            count: group_thousands(r.count),
        })
        .collect()
}

pub fn country_table_rows(rows: &[CountryCount]) -> Vec<TableRow> {
    rows.iter()
        .map(|r| TableRow {
            label: r.country.clone(),
            count: group_thousands(r.count),
        })
        .collect()
}

pub fn summary_cards(summary: &DatasetSummary) -> SummaryCards {
    SummaryCards {
        total_products: group_thousands(summary.total_products),
        unique_brands: group_thousands(summary.unique_brands),
        average_price: format_price(summary.price_range.mean),
        products_with_images: format!(
            "{} ({:.1}%)",
            group_thousands(summary.products_with_images),
            summary.image_percentage
        ),
    }
}

/// Thousands separators for integer counts.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::PriceRange;

    #[test]
    fn bar_dataset_keeps_received_order_and_alignment() {
        let rows = vec![
            BrandCount {
                brand: "Zenith".to_string(),
                count: 3,
            },
            BrandCount {
                brand: "Acme".to_string(),
                count: 120,
            },
        ];

        let ds = brand_bar_dataset(&rows);
        assert_eq!(ds.labels, vec!["Zenith", "Acme"]);
        assert_eq!(ds.values, vec![3.0, 120.0]);
    }

    #[test]
    fn doughnut_palette_cycles_past_ten_rows() {
        let rows: Vec<MaterialCount> = (0..12)
            .map(|i| MaterialCount {
                material: format!("m{i}"),
                count: i,
            })
            .collect();

        let ds = material_doughnut_dataset(&rows);
        assert_eq!(ds.colors.len(), 12);
        assert_eq!(ds.colors[10], DOUGHNUT_PALETTE[0]);
        assert_eq!(ds.colors[11], DOUGHNUT_PALETTE[1]);
    }

    #[test]
    fn empty_price_by_category_renders_no_chart() {
        assert!(price_by_category_dataset(&[]).is_none());

        let rows = vec![CategoryPrice {
            category: "Chairs".to_string(),
            avg_price: 211.5,
            product_count: None,
        }];
        let ds = price_by_category_dataset(&rows).unwrap();
        assert_eq!(ds.labels, vec!["Chairs"]);
        assert_eq!(ds.values, vec![211.5]);
    }

    #[test]
    fn tables_keep_received_order() {
        let rows = vec![
            ColorCount {
                color: "Walnut".to_string(),
                count: 1210,
            },
            ColorCount {
                color: "White".to_string(),
                count: 95,
            },
        ];

        let table = color_table_rows(&rows);
        assert_eq!(table[0].label, "Walnut");
        assert_eq!(table[0].count, "1,210");
        assert_eq!(table[1].label, "White");
    }

    #[test]
    fn summary_cards_apply_display_formats() {
        let summary = DatasetSummary {
            total_products: 1234567,
            unique_brands: 412,
            unique_materials: 0,
            unique_colors: 0,
            price_range: PriceRange {
                min: 4.99,
                max: 8999.0,
                mean: 312.457,
                median: 189.0,
            },
            products_with_images: 29800,
            image_percentage: 94.37,
        };

        let cards = summary_cards(&summary);
        assert_eq!(cards.total_products, "1,234,567");
        assert_eq!(cards.unique_brands, "412");
        assert_eq!(cards.average_price, "$312.46");
        assert_eq!(cards.products_with_images, "29,800 (94.4%)");
    }

    #[test]
    fn group_thousands_handles_small_and_large_counts() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
