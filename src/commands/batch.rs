use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::api::retail::RetailClient;
use crate::config::PredictionConfig;
use crate::error::PredictionError;
use crate::models::user_event::UserEvent;
use crate::runner::PredictionRunner;

#[derive(Parser)]
#[clap(about = "Request predictions for each user event in a JSON batch file")]
pub struct BatchArgs {
    #[clap(short = 'p', long, default_value = "", help = "Google Cloud project number")]
    pub project: String,

    #[clap(short = 'l', long, default_value = "global", help = "Location")]
    pub location: String,

    #[clap(short = 'c', long, default_value = "default_catalog", help = "Catalog")]
    pub catalog: String,

    #[clap(short = 'b', long, default_value = "0", help = "Branch")]
    pub branch: String,

    #[clap(short = 's', long, default_value = "", help = "Serving config")]
    pub serving_config: String,

    #[clap(short = 'i', long, default_value = "", help = "User event input file")]
    pub input: String,

    #[clap(
        short = 'n',
        long = "count",
        default_value = "5",
        help = "Number of predictions (1-100)"
    )]
    pub count: u32,

    #[clap(short = 'f', long, help = "Filter expression")]
    pub filter: Option<String>,

    #[clap(short = 'v', long, help = "Output verbose detail")]
    pub verbose: bool,
}

pub async fn run(args: BatchArgs) -> Result<()> {
    // Required-flag and range checks happen before any file or network I/O.
    if args.input.is_empty() {
        return Err(PredictionError::Validation("missing required flag: --input".to_string()).into());
    }
    if !(1..=100).contains(&args.count) {
        return Err(PredictionError::Validation(format!(
            "number of predictions must be between 1 and 100, got {}",
            args.count
        ))
        .into());
    }

    let config = PredictionConfig::new(
        &args.project,
        &args.location,
        &args.catalog,
        Some(&args.branch),
        &args.serving_config,
        args.count,
        args.filter.clone(),
        None,
    )?;

    info!(
        project = %config.project(),
        location = %config.location(),
        catalog = %config.catalog(),
        branch = config.branch().unwrap_or(""),
        serving_config = %config.serving_config(),
        input = %args.input,
        count = config.page_size(),
        filter = config.filter().unwrap_or(""),
        "Arguments"
    );
    info!("Begin");

    let user_events = UserEvent::load_batch(Path::new(&args.input)).await?;
    if user_events.is_empty() {
        info!("No user events in the input file");
        return Ok(());
    }

    let client = RetailClient::new().await?;
    let runner = PredictionRunner::new(&client, &config);
    let results = runner.execute_all(&user_events).await?;

    info!(
        user_events = user_events.len(),
        results = results.len(),
        "End"
    );
    Ok(())
}
