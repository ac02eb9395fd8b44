use clap::{Parser, Subcommand};
use dotenv::dotenv;

mod config;
mod estimator;
mod form;
mod gemini;
mod logger;
mod profile;
mod prompt;
mod provider;
mod requester;
mod ui;

use config::Config;
use gemini::GeminiProvider;
use profile::WEIGHT_RANGE;
use requester::PlanOutcome;

#[derive(Parser)]
#[command(name = "dietplan", version, about = "AI-powered diet and exercise plan generator")]
struct Args {
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Path to a config file
    #[arg(short, long)]
    config: Option<String>,
    /// Override the configured model identifier
    #[arg(long)]
    model: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the date you'll reach your target weight
    GoalDate {
        /// Current weight in kilograms
        #[arg(long, value_parser = parse_weight)]
        current: f64,
        /// Target weight in kilograms
        #[arg(long, value_parser = parse_weight)]
        target: f64,
    },
}

fn parse_weight(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| "Enter a weight in kilograms".to_string())?;
    if WEIGHT_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "Weight must be between {} and {} kg",
            WEIGHT_RANGE.start(),
            WEIGHT_RANGE.end()
        ))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();
    logger::init(args.verbose);

    let config = Config::load(&args.config)?;
    if !config.ui.colorful {
        colored::control::set_override(false);
    }

    // Missing key halts the whole session before any form is rendered.
    let api_key = match config::api_key() {
        Ok(key) => key,
        Err(e) => {
            log::info!("API key resolution failed: {e}");
            ui::error("🚨 API key is missing! Set GEMINI_API_KEY or GOOGLE_API_KEY.");
            std::process::exit(1);
        }
    };

    match args.command {
        Some(Command::GoalDate { current, target }) => {
            let estimate = estimator::estimate_from_today(current, target);
            ui::success(&format!(
                "🎉 You'll reach {} kg by {}!",
                target,
                estimator::format_goal_date(estimate.goal_date)
            ));
        }
        None => {
            ui::banner();
            let profile = form::collect_profile()?;

            let model = args.model.unwrap_or_else(|| config.provider.model.clone());
            let provider = GeminiProvider::new(
                api_key,
                model,
                config.provider.temperature,
                config.provider.max_output_tokens,
            );

            let spinner = ui::spinner("Generating your diet plan...");
            let outcome = requester::request_plan(&provider, &profile).await;
            spinner.finish_and_clear();

            match &outcome {
                PlanOutcome::Generated(text) => {
                    ui::success(requester::SUCCESS_HEADER);
                    ui::render_plan(text);
                }
                _ => {
                    if let Some(message) = outcome.error_message() {
                        ui::error(&message);
                    }
                }
            }
        }
    }

    Ok(())
}
