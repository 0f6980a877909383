//! Output formatting utilities

use crate::error::CliResult;
use colored::*;
use materiality_types::{RiskBand, RiskScore};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print rows as a table
pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("{}", "No results".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a single item as JSON or YAML
pub fn print_structured<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(data)?);
        }
    }
    Ok(())
}

/// Print a section heading
pub fn print_heading(title: &str) {
    println!();
    println!("{}", title.bold());
}

/// Text gauge for a score, `width` cells wide
pub fn gauge(score: RiskScore, width: usize) -> String {
    let filled = ((score.ratio() * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Color a band by severity
pub fn colorize_band(band: RiskBand) -> ColoredString {
    match band {
        RiskBand::Low => band.label().green(),
        RiskBand::LowMedium => band.label().bright_green(),
        RiskBand::Medium => band.label().yellow(),
        RiskBand::MediumHigh => band.label().bright_red(),
        RiskBand::High => band.label().red().bold(),
    }
}
