//! Materiality CLI - terminal front end for materiality assessments
//!
//! This CLI lets analysts:
//! - Assess a company profile (sector, geography, size)
//! - List the accepted profile values and the active score scale

use clap::{Parser, Subcommand};
use materiality_core::Classifier;
use materiality_types::ScoringPolicy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{assess, catalog};
use error::CliResult;

/// Materiality CLI application
#[derive(Parser)]
#[command(name = "materiality")]
#[command(about = "Materiality - ESG materiality and PCAP-style risk scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Scoring policy (percentage, five-point)
    #[arg(short, long, global = true, env = "MATERIALITY_POLICY", default_value = "percentage")]
    policy: ScoringPolicy,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Assess a company profile
    Assess(assess::AssessArgs),

    /// List accepted profile values
    Catalog,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let classifier = Classifier::new(cli.policy);

    match cli.command {
        Commands::Assess(args) => assess::execute(args, &classifier, cli.output),
        Commands::Catalog => catalog::execute(&classifier, cli.output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use materiality_types::{CompanySize, Geography, Sector};

    #[test]
    fn test_parse_assess() {
        let cli = Cli::try_parse_from([
            "materiality",
            "assess",
            "--sector",
            "financial-services",
            "--geography",
            "United States",
            "--size",
            "large",
        ])
        .unwrap();

        assert_eq!(cli.policy, ScoringPolicy::Percentage);
        match cli.command {
            Commands::Assess(args) => {
                assert_eq!(args.sector, Sector::FinancialServices);
                assert_eq!(args.geography, Geography::UnitedStates);
                assert_eq!(args.size, CompanySize::Large);
            }
            Commands::Catalog => panic!("expected assess"),
        }
    }

    #[test]
    fn test_parse_policy_after_subcommand() {
        let cli = Cli::try_parse_from([
            "materiality",
            "assess",
            "-s",
            "Energy",
            "-g",
            "Global",
            "-z",
            "Small",
            "--policy",
            "five-point",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.policy, ScoringPolicy::FivePoint);
        assert!(matches!(cli.output, output::OutputFormat::Json));
    }

    #[test]
    fn test_invalid_sector_is_rejected() {
        let result = Cli::try_parse_from([
            "materiality",
            "assess",
            "--sector",
            "Mining",
            "--geography",
            "Canada",
            "--size",
            "Large",
        ]);
        let err = match result {
            Ok(_) => panic!("expected parse failure"),
            Err(err) => err.to_string(),
        };
        assert!(err.contains("Mining"));
        assert!(err.contains("Financial Services"));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
