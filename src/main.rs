use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lavka::config::Config;

#[derive(Parser)]
#[command(name = "lavka", version, about = "Terminal storefront client")]
struct Args {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    lavka::logging::init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    lavka::ui::runtime::run(&config, runtime.handle().clone())
}
