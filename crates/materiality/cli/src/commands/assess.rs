//! Assessment command

use crate::error::CliResult;
use crate::output::{colorize_band, gauge, print_heading, print_structured, OutputFormat};
use clap::Args;
use colored::*;
use materiality_core::Classifier;
use materiality_types::{CompanyProfile, CompanySize, Geography, MaterialityAssessment, Sector};

const GAUGE_WIDTH: usize = 40;

const PROTOTYPE_NOTE: &str = "Note: This is a prototype. In a production version, scoring logic, \
     sector mappings and narratives would be aligned with ESG taxonomies, regulations, and \
     client datasets.";

/// Profile flags for the assess command
#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Company sector
    #[arg(short, long)]
    pub sector: Sector,

    /// Operating geography
    #[arg(short, long)]
    pub geography: Geography,

    /// Company size: approximate scale based on revenue, assets or headcount
    #[arg(short = 'z', long)]
    pub size: CompanySize,
}

impl AssessArgs {
    pub fn profile(&self) -> CompanyProfile {
        CompanyProfile::new(self.sector, self.geography, self.size)
    }
}

/// Execute the assess command
pub fn execute(args: AssessArgs, classifier: &Classifier, format: OutputFormat) -> CliResult<()> {
    let assessment = classifier.assess(&args.profile());

    match format {
        OutputFormat::Table => {
            print_report(&assessment);
            Ok(())
        }
        _ => print_structured(&assessment, format),
    }
}

fn print_report(assessment: &MaterialityAssessment) {
    let score = assessment.risk_score();

    println!("{} {}", "Company Profile:".bold(), assessment.profile);

    print_heading("PCAP-style Risk Scoring");
    println!("PCAP Risk Score: {}", score.to_string().bold());
    println!("{}", gauge(score, GAUGE_WIDTH));
    println!("Risk Band: {}", colorize_band(assessment.band));

    print_heading("Likely Material Emission Scopes");
    println!("{}", list_or(&assessment.scopes, "No scopes identified."));

    print_heading("Key ESG and Climate Topics");
    println!("{}", list_or(&assessment.topics, "No topics identified."));

    print_heading("Narrative");
    println!("{}", assessment.narrative);

    println!();
    println!("{}", PROTOTYPE_NOTE.dimmed());
}

fn list_or(labels: &[String], empty: &str) -> String {
    if labels.is_empty() {
        empty.to_string()
    } else {
        labels.join(", ")
    }
}
