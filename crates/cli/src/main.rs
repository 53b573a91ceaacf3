use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mobler_core::api::HttpCatalogApi;
use mobler_core::config::Settings;
use mobler_core::domain::catalog::Query;
use mobler_core::flow::{AnalyticsFlow, RecommendationFlow};
use mobler_core::state::RequestState;
use mobler_core::view::charts::{
    brand_bar_dataset, category_bar_dataset, color_table_rows, country_table_rows,
    material_doughnut_dataset, price_by_category_dataset, summary_cards, BarDataset, TableRow,
};
use mobler_core::view::product::{ProductCard, ProductImage};

#[derive(Debug, Parser)]
#[command(name = "mobler")]
struct Args {
    /// Backend base URL. Overrides API_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Describe the furniture you need and print ranked matches.
    Recommend {
        message: String,

        /// How many matches to request.
        #[arg(long, default_value_t = 5)]
        top_k: u32,
    },
    /// Fetch dataset statistics and print them as charts and tables.
    Analytics,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut settings = Settings::from_env()?;
    if args.base_url.is_some() {
        settings.api_base_url = args.base_url.clone();
    }

    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let result = run(args.command, &settings).await;
    if let Err(err) = &result {
        sentry_anyhow::capture_anyhow(err);
    }
    result
}

async fn run(command: Command, settings: &Settings) -> anyhow::Result<()> {
    let api = Arc::new(HttpCatalogApi::from_settings(settings)?);

    match command {
        Command::Recommend { message, top_k } => {
            let flow = RecommendationFlow::new(api);
            let state = flow.submit(Query::new(message).with_top_k(top_k)).await;
            match state {
                RequestState::Ready(products) => {
                    if products.is_empty() {
                        println!("No matches found.");
                    }
                    for product in &products {
                        print_card(&ProductCard::from_product(product));
                    }
                    Ok(())
                }
                RequestState::Failed(reason) => anyhow::bail!("{reason}"),
                // A blank message is a silent no-op.
                RequestState::Idle | RequestState::Pending => Ok(()),
            }
        }
        Command::Analytics => {
            let flow = AnalyticsFlow::new(api);
            let state = flow.load().await;
            match state {
                RequestState::Ready(snapshot) => {
                    let cards = summary_cards(&snapshot.summary);
                    println!("Dataset Analytics");
                    println!("  Total Products:       {}", cards.total_products);
                    println!("  Unique Brands:        {}", cards.unique_brands);
                    println!("  Average Price:        {}", cards.average_price);
                    println!("  Products with Images: {}", cards.products_with_images);

                    print_bar("Top Brands", &brand_bar_dataset(&snapshot.top_brands));
                    print_bar(
                        "Top Categories",
                        &category_bar_dataset(&snapshot.top_categories),
                    );

                    let doughnut = material_doughnut_dataset(&snapshot.materials);
                    println!("\nMaterial Distribution");
                    for ((label, value), color) in doughnut
                        .labels
                        .iter()
                        .zip(&doughnut.values)
                        .zip(&doughnut.colors)
                    {
                        println!("  {label}: {value} [{color}]");
                    }

                    if let Some(prices) = price_by_category_dataset(&snapshot.price_by_category) {
                        print_bar("Price Range by Category", &prices);
                    }

                    print_table("Color Distribution", &color_table_rows(&snapshot.colors));
                    print_table(
                        "Country of Origin",
                        &country_table_rows(&snapshot.countries),
                    );
                    Ok(())
                }
                RequestState::Failed(reason) => anyhow::bail!("{reason}"),
                RequestState::Idle | RequestState::Pending => Ok(()),
            }
        }
    }
}

fn print_card(card: &ProductCard) {
    println!("\n{}", card.title);
    match &card.image {
        ProductImage::Url(url) => println!("  image: {url}"),
        ProductImage::Placeholder => println!("  image: (none)"),
    }
    if let Some(description) = &card.description {
        println!("  {description}");
    }
    if let Some(price) = &card.price {
        println!("  price: {price}");
    }
    if !card.categories.is_empty() {
        println!("  tags: {}", card.categories.join(", "));
    }
    if let Some(score) = &card.score {
        println!("  match: {score}");
    }
}

fn print_bar(title: &str, dataset: &BarDataset) {
    println!("\n{title} ({})", dataset.label);
    for (label, value) in dataset.labels.iter().zip(&dataset.values) {
        println!("  {label}: {value}");
    }
}

fn print_table(title: &str, rows: &[TableRow]) {
    println!("\n{title}");
    for row in rows {
        println!("  {}: {}", row.label, row.count);
    }
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
