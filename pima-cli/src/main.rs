//! Pima CLI - command-line diabetes risk assessment

#![deny(warnings)]

// Global invariants enforced:
// - One assessment per invocation; no resubmission while a call is pending
// - Returned fields are rendered verbatim

use anyhow::Context;
use clap::{Parser, Subcommand};
use pima_core::{config, metrics, render_json, render_text, FixedDelay, HealthMetrics, RiskScorer};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pima")]
#[command(about = "Diabetes risk assessment from basic health metrics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess diabetes risk for one set of metrics
    Assess {
        /// Number of pregnancies (0-20)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=20))]
        pregnancies: u32,

        /// Plasma glucose concentration in mg/dL (0-300)
        #[arg(long)]
        glucose: f64,

        /// Diastolic blood pressure in mmHg (0-200)
        #[arg(long)]
        blood_pressure: f64,

        /// Triceps skin fold thickness in mm (0-100)
        #[arg(long)]
        skin_thickness: f64,

        /// Serum insulin in μU/mL (0-900)
        #[arg(long)]
        insulin: f64,

        /// Body mass index in kg/m² (0-70)
        #[arg(long)]
        bmi: f64,

        /// Diabetes pedigree function score (0-3)
        #[arg(long)]
        pedigree: f64,

        /// Age in years (0-120)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=120))]
        age: u32,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Simulated backend latency in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Path to a config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the accepted input range for every metric field
    Limits {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            pregnancies,
            glucose,
            blood_pressure,
            skin_thickness,
            insulin,
            bmi,
            pedigree,
            age,
            format,
            delay_ms,
            config,
        } => {
            let submitted = HealthMetrics {
                pregnancies,
                glucose,
                blood_pressure,
                skin_thickness,
                insulin,
                bmi,
                pedigree,
                age,
            };
            run_assess(submitted, format, delay_ms, config.as_deref()).await?;
        }
        Commands::Limits { format } => match format {
            OutputFormat::Text => print!("{}", render_limits_text()),
            OutputFormat::Json => println!("{}", metrics::render_limits_json()),
        },
    }

    Ok(())
}

/// Clamp the submitted metrics, run one assessment, and print the report
async fn run_assess(
    submitted: HealthMetrics,
    format: OutputFormat,
    delay_ms: Option<u64>,
    config_path: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let mut resolved = config::load_and_resolve(&cwd, config_path)?;

    // CLI flag takes precedence over the config file
    if let Some(ms) = delay_ms {
        resolved.delay = Duration::from_millis(ms);
    }

    let metrics = submitted.clamped();
    let scorer = RiskScorer::with_config(
        FixedDelay::new(resolved.delay),
        resolved.weights,
        resolved.thresholds,
    );
    let assessment = scorer.assess(&metrics).await;

    match format {
        OutputFormat::Text => print!("{}", render_text(&assessment)),
        OutputFormat::Json => println!("{}", render_json(&assessment)),
    }

    Ok(())
}

/// Render the input constraint table as text
fn render_limits_text() -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:>8} {:>8} {:>6}\n",
        "FIELD", "MIN", "MAX", "STEP"
    ));
    for limits in &metrics::FIELD_LIMITS {
        output.push_str(&format!(
            "{:<16} {:>8} {:>8} {:>6}\n",
            limits.name, limits.min, limits.max, limits.step
        ));
    }
    output
}
