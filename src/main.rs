use anyhow::Result;
use clap::Parser;
use pickmeal_mealplan::generate_plan;
use pickmeal_recipe::MealCatalog;
use std::path::PathBuf;

/// pickmeal - weekly meal plan picker
#[derive(Parser)]
#[command(name = "pickmeal")]
#[command(about = "Pick a random weekly set of recipes for each mealtime", long_about = None)]
struct Cli {
    /// Path to the JSON file containing the recipe catalog
    json_path: PathBuf,

    /// Path to configuration file
    #[arg(long)]
    config: Option<String>,

    /// Seed for the random selection, for reproducible plans
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = pickmeal::config::Config::load(cli.config.clone())?;

    // Initialize observability (tracing + logging)
    pickmeal::observability::init_observability(
        "pickmeal",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    tracing::debug!(path = %cli.json_path.display(), "loading recipe catalog");
    let catalog = MealCatalog::load(&cli.json_path)?;

    let plan = generate_plan(&catalog, &config.plan, cli.seed)?;

    println!("{plan}");

    Ok(())
}
