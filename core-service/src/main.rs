//! AirWise - command line entry point

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use airwise_core::constants;
use airwise_core::logic::assessment::{evaluate_reading, render_text, AssessmentSummary};
use airwise_core::logic::feeds::{FeedConfig, OpenWeatherClient};
use airwise_core::logic::model::load_health_model;
use airwise_core::{Assessment, AssessmentRequest, Assessor, EnvironmentalReading};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("Starting {} v{}", constants::APP_NAME, constants::APP_VERSION);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let model_path = cli.model.clone().or_else(constants::get_model_path);
    let model = load_health_model(model_path.as_deref()).context("loading health model")?;

    let assessment = match cli.command {
        Commands::Assess {
            location,
            profile,
            local_health,
            api_key,
        } => {
            let mut config = FeedConfig::default();
            if let Some(key) = api_key {
                config = config.with_api_key(key);
            }
            let client = OpenWeatherClient::new(config)?;
            let assessor = Assessor::new(Arc::new(client), model);

            log::info!("Fetching conditions for {}", location);
            let request = AssessmentRequest {
                coordinates: location,
                profile: profile.into(),
                local_health: local_health.into(),
            };
            assessor.assess(&request).await?
        }
        Commands::Evaluate { reading, profile } => {
            let raw = std::fs::read_to_string(&reading)
                .with_context(|| format!("reading {}", reading.display()))?;
            let parsed: EnvironmentalReading = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", reading.display()))?;
            evaluate_reading(&parsed, &profile.into(), model.as_deref())?
        }
    };

    print_assessment(&assessment, cli.json)
}

fn print_assessment(assessment: &Assessment, json: bool) -> anyhow::Result<()> {
    if json {
        let body = serde_json::json!({
            "assessment": assessment,
            "summary": AssessmentSummary::from_assessment(assessment),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render_text(assessment));
    }
    Ok(())
}
