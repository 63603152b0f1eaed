use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use bundle_check::decider::{examples, render_text, Evaluator};
use bundle_check::models::{BundleCheckConfig, EvaluationReport, PriceInput};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bundle-check",
    about = "Decide whether a pre-built computer bundle is worth its price over buying parts separately"
)]
struct Cli {
    /// Path to a TOML configuration file. Falls back to config/bundle-check.toml
    /// when present, otherwise built-in defaults
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print the evaluation report as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Pretty-print the output JSON
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a bundle price against the price of its parts
    Check {
        /// Price of the computer bundle
        #[arg(short, long, allow_hyphen_values = true)]
        bundle: String,

        /// Price of buying the parts separately
        #[arg(short, long, allow_hyphen_values = true)]
        parts: String,
    },
    /// Run one of the built-in examples
    Example {
        /// Example number (1 or 2)
        number: u8,
    },
    /// Run every built-in example
    Demo,
    /// Read a PriceInput JSON document from a file or stdin
    Input {
        /// Read from a file instead of stdin
        #[arg(short, long)]
        file: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(|| {
        Path::new(bundle_check::DEFAULT_CONFIG_PATH)
            .exists()
            .then(|| bundle_check::DEFAULT_CONFIG_PATH.to_string())
    });
    let config = match &config_path {
        Some(path) => bundle_check::load_config(path)
            .with_context(|| format!("Failed to load config: {path}"))?,
        None => BundleCheckConfig::default(),
    };
    let evaluator = bundle_check::build_evaluator(&config);
    tracing::debug!(
        threshold = %evaluator.threshold(),
        currency_symbol = evaluator.currency_symbol(),
        "Evaluator ready"
    );

    match &cli.command {
        Command::Check { bundle, parts } => {
            let report = bundle_check::check_raw(&evaluator, bundle, parts)?;
            print_report(&cli, &report)?;
        }
        Command::Example { number } => {
            let input = bundle_check::decider::example(*number)
                .with_context(|| format!("Unknown example: {number}"))?;
            let report = bundle_check::check(&evaluator, input)?;
            print_report(&cli, &report)?;
        }
        Command::Demo => run_demo(&cli, &evaluator)?,
        Command::Input { file } => {
            let input_json = if let Some(path) = file {
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input: {path}"))?
            } else {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read from stdin")?;
                buf
            };
            let input: PriceInput =
                serde_json::from_str(&input_json).context("Failed to parse PriceInput JSON")?;
            let report = bundle_check::check(&evaluator, input)?;
            print_report(&cli, &report)?;
        }
    }

    Ok(())
}

fn run_demo(cli: &Cli, evaluator: &Evaluator) -> Result<()> {
    let mut reports = Vec::new();
    for example in examples() {
        let report = bundle_check::check(evaluator, example.input)?;
        if !cli.json {
            println!("Example {}: {}", example.number, example.label);
            println!("{}\n", render_text(&report));
        }
        reports.push(report);
    }

    if cli.json {
        println!("{}", to_json(cli, &reports)?);
    }
    Ok(())
}

fn print_report(cli: &Cli, report: &EvaluationReport) -> Result<()> {
    if cli.json {
        println!("{}", to_json(cli, report)?);
    } else {
        println!("{}", render_text(report));
    }
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(cli: &Cli, value: &T) -> Result<String> {
    let output = if cli.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}
