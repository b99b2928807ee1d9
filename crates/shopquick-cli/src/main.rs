mod render;

use clap::{Args, Parser, Subcommand};
use shopquick_client::CatalogClient;
use shopquick_core::{CatalogConfig, ProductId, SortOrder};
use shopquick_store::{lookup_product, CatalogStore, PageLoad, ProductDetail, ReviewOrder};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopquick-cli")]
#[command(about = "Browse the ShopQuick product catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show one page of the catalog, filtered and sorted within that page
    List(ListArgs),
    /// Show a single product with its reviews
    Show {
        id: String,
        /// Review order: date (newest first) or rating (highest first)
        #[arg(long, default_value = "date")]
        reviews: ReviewOrder,
    },
    /// List known categories
    Categories,
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Exact category name; "all" disables the filter
    #[arg(long)]
    category: Option<String>,
    /// Case-insensitive title search
    #[arg(long)]
    search: Option<String>,
    /// none, low (price ascending) or high (price descending)
    #[arg(long, default_value = "none")]
    sort: SortOrder,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = shopquick_core::load_catalog_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = CatalogClient::new(&config)?;

    match cli.command {
        Commands::List(args) => run_list(client, &config, args).await,
        Commands::Show { id, reviews } => run_show(&client, &id, reviews).await,
        Commands::Categories => run_categories(client, &config).await,
    }
}

async fn run_list(
    client: CatalogClient,
    config: &CatalogConfig,
    args: ListArgs,
) -> anyhow::Result<()> {
    let store = CatalogStore::new(client, config.page_size);
    let categories_available = store.load_categories().await;

    let load = store.set_page(args.page).await?;

    if let Some(category) = args.category {
        if categories_available {
            store.set_category(category.as_str());
        } else {
            tracing::warn!(%category, "category list unavailable; ignoring --category");
        }
    }
    if let Some(search) = args.search {
        store.set_search_text(search);
    }
    store.set_sort_order(args.sort);

    print!("{}", render::catalog_page(&store.snapshot()));

    if load == PageLoad::Failed {
        anyhow::bail!("page {} could not be loaded", args.page);
    }
    Ok(())
}

async fn run_show(client: &CatalogClient, id: &str, order: ReviewOrder) -> anyhow::Result<()> {
    let detail = lookup_product(client, &ProductId::new(id)).await;
    print!("{}", render::product_detail(&detail, order));

    if let ProductDetail::Failed { message } = detail {
        anyhow::bail!(message);
    }
    Ok(())
}

async fn run_categories(client: CatalogClient, config: &CatalogConfig) -> anyhow::Result<()> {
    let store = CatalogStore::new(client, config.page_size);
    store.load_categories().await;
    print!("{}", render::category_list(store.categories().as_deref()));
    Ok(())
}
