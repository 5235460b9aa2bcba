//! merchant-bulk - apply a bulk action from the command line
//!
//! ```text
//! merchant-bulk --target products --ids p1,p2 --action change_status --status inactive
//! merchant-bulk --target variants --product p1 --all \
//!     --action update_price --value 10 --direction decrease
//! merchant-bulk --target gallery --product p1 --ids g3 --action delete --yes
//! ```

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use merchant_client::bulk::{
    ActionForm, BulkBackend, BulkSession, GalleryTarget, ProductsTarget, VariantsTarget,
};
use merchant_client::services::ProductsService;
use merchant_client::{ClientConfig, logger};
use shared::models::AmountType;
use shared::{BulkActionType, PriceDirection};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetArg {
    Products,
    Variants,
    Gallery,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AmountArg {
    Percentage,
    Fixed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    Increase,
    Decrease,
}

#[derive(Parser, Debug)]
#[command(name = "merchant-bulk")]
#[command(about = "Apply a bulk action to products, variants or gallery items")]
#[command(version)]
struct Cli {
    #[arg(long, value_enum, default_value = "products")]
    target: TargetArg,

    /// Parent product, required for variants and gallery
    #[arg(long)]
    product: Option<String>,

    /// Comma-separated IDs to select
    #[arg(long, value_delimiter = ',')]
    ids: Vec<String>,

    /// Select every item on the loaded page
    #[arg(long)]
    all: bool,

    /// Filter the list before selecting
    #[arg(long)]
    search: Option<String>,

    /// change_category, update_price, change_status, delete, apply_discount, activate, deactivate
    #[arg(long)]
    action: BulkActionType,

    #[arg(long, default_value = "")]
    value: String,

    #[arg(long = "price-type", value_enum, default_value = "percentage")]
    price_type: AmountArg,

    #[arg(long, value_enum, default_value = "increase")]
    direction: DirectionArg,

    #[arg(long, default_value = "")]
    category: String,

    #[arg(long, default_value = "")]
    status: String,

    /// Confirm destructive actions without prompting
    #[arg(long)]
    yes: bool,
}

impl Cli {
    fn form(&self) -> ActionForm {
        ActionForm::new(self.action)
            .value(self.value.clone())
            .category(self.category.clone())
            .status(self.status.clone())
            .amount_type(match self.price_type {
                AmountArg::Percentage => AmountType::Percentage,
                AmountArg::Fixed => AmountType::Fixed,
            })
            .direction(match self.direction {
                DirectionArg::Increase => PriceDirection::Increase,
                DirectionArg::Decrease => PriceDirection::Decrease,
            })
    }

    fn product_id(&self) -> anyhow::Result<&str> {
        self.product
            .as_deref()
            .context("--product is required for this target")
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = ClientConfig::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    let http = config.build_http_client()?;
    let products = ProductsService::new(http);

    match cli.target {
        TargetArg::Products => {
            run(BulkSession::new(ProductsTarget::new(products), &config), &cli).await
        }
        TargetArg::Variants => {
            let target = VariantsTarget::new(products, cli.product_id()?);
            run(BulkSession::new(target, &config), &cli).await
        }
        TargetArg::Gallery => {
            let target = GalleryTarget::new(products, cli.product_id()?);
            run(BulkSession::new(target, &config), &cli).await
        }
    }
}

async fn run<B: BulkBackend>(mut session: BulkSession<B>, cli: &Cli) -> anyhow::Result<()> {
    match &cli.search {
        Some(text) => {
            let ticket = session.search(text);
            ticket.settle().await;
            session.apply_search(&ticket).await?;
        }
        None => session.load().await?,
    }

    if cli.all {
        session.select_all_loaded();
    }
    for id in &cli.ids {
        if !session.selection().contains(id) {
            session.toggle(id);
        }
    }
    if session.selection().is_empty() {
        bail!("nothing selected; pass --ids or --all");
    }

    let pending = session.prepare(&cli.form())?;
    let label = pending.action.label();
    if !pending.confirmed {
        if !cli.yes {
            bail!("'{}' is destructive; rerun with --yes to confirm", label);
        }
        session.confirm()?;
    }

    let count = session.selection().len();
    let result = session.submit().await?;
    println!(
        "{}: {} of {} {} updated, {} failed",
        label,
        result.successful,
        count,
        session.target().noun(),
        result.failed
    );
    for failure in &result.failures {
        println!(
            "  {}: {}",
            failure.id,
            failure.reason.as_deref().unwrap_or("failed")
        );
    }
    if let Some(entry) = session.history().latest() {
        println!("{}", serde_json::to_string_pretty(entry)?);
    }
    Ok(())
}
