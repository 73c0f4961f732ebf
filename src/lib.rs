pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod runner;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, error};

pub use error::PredictionError;

#[derive(Parser)]
#[clap(name = "retail-predictions")]
#[clap(about = "CLI tool for requesting product predictions from a retail recommendation service")]
#[clap(version)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Predict(commands::predict::PredictArgs),
    Batch(commands::batch::BatchArgs),
}

impl Cli {
    fn verbose(&self) -> bool {
        match &self.command {
            Commands::Predict(args) => args.verbose,
            Commands::Batch(args) => args.verbose,
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    // One logging handle per run: verbosity is fixed here and the scoped
    // default is released when the run returns.
    let level = if cli.verbose() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let result = match cli.command {
        Commands::Predict(args) => commands::predict::run(args).await,
        Commands::Batch(args) => commands::batch::run(args).await,
    };

    if let Err(err) = &result {
        match err.downcast_ref::<PredictionError>() {
            // The caller prints usage for bad arguments.
            Some(PredictionError::Validation(_)) => {}
            _ => {
                let chain = format!("{err:#}");
                error!(error = %chain, "Prediction request failed");
            }
        }
    }
    result
}
