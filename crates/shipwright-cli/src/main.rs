mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use shipwright_lib::CatalogSource;

use shipwright_cli::output::OutputFormat;
use shipwright_cli::terminal::ColorPalette;

use commands::options::{handle_options, OptionsArgs};
use commands::plan::{handle_plan, PlanArgs};
use commands::ships::handle_list_ships;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Ship configurator: eligible parts, selections and material totals"
)]
struct Cli {
    /// Catalog file path or http(s) URL. Overrides SHIPWRIGHT_CATALOG.
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the ships in the catalog.
    Ships,
    /// Show the eligible parts and facilities for a ship.
    Options(OptionsArgs),
    /// Apply selections and report required levels and materials.
    Plan(PlanArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = CatalogSource::resolve(cli.catalog.as_deref())
        .context("failed to resolve the ship catalog location")?;
    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match cli.command {
        Command::Ships => handle_list_ships(&source, cli.format, palette),
        Command::Options(args) => handle_options(&source, &args, cli.format, palette),
        Command::Plan(args) => handle_plan(&source, &args, cli.format, palette),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
