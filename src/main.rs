use std::process;

use clap::{CommandFactory, Parser};
use retail_predictions::{Cli, PredictionError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = retail_predictions::run(cli).await {
        if let Some(PredictionError::Validation(_)) = err.downcast_ref::<PredictionError>() {
            eprintln!("Error: {err}");
            eprintln!("{}", Cli::command().render_help());
        }
        process::exit(1);
    }
}
