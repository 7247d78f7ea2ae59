use clap::Parser;
use tracing_subscriber::EnvFilter;

use food_resolver::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("food_resolver=debug,info")
    } else {
        EnvFilter::new("food_resolver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let catalog = cli::load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        cli::Commands::Search(args) => cli::search::run(&args, catalog, cli.format)?,
        cli::Commands::Category(args) => cli::category::run(&args, catalog, cli.format)?,
        cli::Commands::Compare(args) => cli::compare::run(&args, catalog, cli.format)?,
        cli::Commands::Meals(args) => cli::meals::run(&args, catalog, cli.format)?,
        cli::Commands::Labels(args) => cli::labels::run(&args, catalog, cli.format)?,
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, catalog, cli.format, cli.verbose)?;
        }
        cli::Commands::Menu => cli::menu::run(catalog)?,
        cli::Commands::Serve(args) => web::server::run(args, catalog)?,
    }

    Ok(())
}
