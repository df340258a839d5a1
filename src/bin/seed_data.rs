//! Populates the database with demo data.
//!
//! Run with: cargo run --bin seed-data -- standard
//!
//! Profiles:
//! - `standard`: admins, categories, customers, two sellers and a curated
//!   catalog with reviews, orders, carts, wishlists and payouts
//! - `large`: generated catalog across twelve categories
//! - `jerseys`: football jerseys sold by "Jersey Kingdom"
//! - `products-only`: replaces the catalog without touching accounts
//! - `all`: sellers with fixed ids, categories, products and jerseys

use clap::{Parser, Subcommand};
use tracing::info;

use marketplace_api::{
    config, db,
    seed::{Profile, Seeder},
};

#[derive(Parser, Debug)]
#[command(name = "seed-data", about = "Populate the marketplace database with demo data")]
struct Cli {
    /// Seed for the random generator, for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Do not apply pending migrations before seeding
    #[arg(long, global = true)]
    skip_migrations: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample data across every table
    Standard,
    /// Large generated catalog with many customers and orders
    Large,
    /// Football jerseys for the Jersey Kingdom seller
    Jerseys,
    /// Replace the product catalog only
    ProductsOnly,
    /// Fixed sellers, categories, products and jerseys
    All,
}

impl From<Command> for Profile {
    fn from(command: Command) -> Self {
        match command {
            Command::Standard => Profile::Standard,
            Command::Large => Profile::Large,
            Command::Jerseys => Profile::Jerseys,
            Command::ProductsOnly => Profile::ProductsOnly,
            Command::All => Profile::All,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    config::init_tracing(cfg.log_level(), cfg.log_json);

    info!("=== Marketplace Seed Data ===");
    let pool = db::establish_connection_from_app_config(&cfg).await?;
    if !cli.skip_migrations {
        db::run_migrations(&pool).await?;
    }

    let profile = Profile::from(cli.command);
    let mut seeder = Seeder::new(&pool, cli.seed)?;
    let summary = seeder.run(profile).await?;

    info!("=== Database summary ===");
    for (table, count) in &summary.tables {
        info!("  {:<18} {}", table, count);
    }
    info!("");
    info!("Login credentials (password: secret):");
    info!("  Admin:    admin@admin.com");
    info!("  Customer: john@customer.com");
    info!("  Seller:   collins@techstore.com");
    info!(
        "Storefront: http://localhost:{}  Dashboard: http://localhost:{}",
        marketplace_api::discovery::STOREFRONT_PORT,
        marketplace_api::discovery::DASHBOARD_PORT
    );

    Ok(())
}
