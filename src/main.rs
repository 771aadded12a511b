use anyhow::Result;
use clap::{Parser, Subcommand};
use gapchef_recipe::SortOption;

mod cli;

/// gapchef - recipes from what is already in the kitchen
#[derive(Parser)]
#[command(name = "gapchef")]
#[command(about = "Match available ingredients against a recipe catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Rank the catalog against a list of ingredients and print JSON
    Match {
        /// Available ingredient, repeat for each one
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,

        /// Result page size (overrides config file)
        #[arg(long)]
        max_results: Option<usize>,

        /// Result order
        #[arg(long, default_value = "match")]
        sort: SortOption,
    },
    /// Print catalog statistics
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = gapchef::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    gapchef::observability::init_observability(
        "gapchef",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let catalog = gapchef::catalog::load(&config.catalog)?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, catalog, host, port).await,
        Commands::Match {
            ingredients,
            max_results,
            sort,
        } => cli::matching::run(
            &config,
            &catalog,
            ingredients,
            max_results,
            sort,
            &mut std::io::stdout().lock(),
        ),
        Commands::Catalog => cli::catalog::stats(&catalog, &mut std::io::stdout().lock()),
    }
}
