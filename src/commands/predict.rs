use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::api::retail::RetailClient;
use crate::config::PredictionConfig;
use crate::error::PredictionError;
use crate::models::user_event::UserEvent;
use crate::runner::PredictionRunner;

#[derive(Parser)]
#[clap(about = "Request predictions for a single user event")]
pub struct PredictArgs {
    #[clap(short = 'p', long, default_value = "", help = "Google Cloud project number")]
    pub project: String,

    #[clap(short = 'l', long, default_value = "global", help = "Location")]
    pub location: String,

    #[clap(short = 'c', long, default_value = "default_catalog", help = "Catalog")]
    pub catalog: String,

    #[clap(short = 's', long, default_value = "", help = "Serving config")]
    pub serving_config: String,

    #[clap(short = 'n', long = "count", default_value = "10", help = "Number of predictions")]
    pub count: u32,

    #[clap(long = "type", default_value = "", help = "User event type")]
    pub event_type: String,

    #[clap(long, default_value = "", help = "Visitor ID")]
    pub visitor: String,

    #[clap(long, default_value = "", help = "Product ID")]
    pub product: String,

    #[clap(long, help = "Filter expression")]
    pub filter: Option<String>,

    #[clap(long, help = "Experiment group")]
    pub experiment: Option<String>,

    #[clap(short = 'v', long, help = "Output verbose detail")]
    pub verbose: bool,
}

pub async fn run(args: PredictArgs) -> Result<()> {
    // Required-flag checks happen before anything touches the network.
    for (flag, value) in [
        ("--type", &args.event_type),
        ("--visitor", &args.visitor),
        ("--product", &args.product),
    ] {
        if value.is_empty() {
            return Err(
                PredictionError::Validation(format!("missing required flag: {flag}")).into(),
            );
        }
    }

    let config = PredictionConfig::new(
        &args.project,
        &args.location,
        &args.catalog,
        None,
        &args.serving_config,
        args.count,
        args.filter.clone(),
        args.experiment.clone(),
    )?;

    info!(
        project = %config.project(),
        location = %config.location(),
        catalog = %config.catalog(),
        serving_config = %config.serving_config(),
        count = config.page_size(),
        event_type = %args.event_type,
        visitor = %args.visitor,
        product = %args.product,
        filter = config.filter().unwrap_or(""),
        experiment = config.experiment().unwrap_or(""),
        "Arguments"
    );
    info!("Begin");

    let user_event = UserEvent::for_product(
        &args.event_type,
        &args.visitor,
        &args.product,
        config.experiment(),
    );

    let client = RetailClient::new().await?;
    let runner = PredictionRunner::new(&client, &config);
    let results = runner.execute_all(std::slice::from_ref(&user_event)).await?;

    info!(results = results.len(), "End");
    Ok(())
}
