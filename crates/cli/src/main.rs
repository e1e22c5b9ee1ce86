//! Petal CLI - Recommendation engine tools.
//!
//! # Usage
//!
//! ```bash
//! # Run an answer set through the recommendation rules
//! petal evaluate -p hormone-free -p cost --lifestyle somewhat-consistent --plans no
//!
//! # Include medical history flags
//! petal evaluate -p low-maintenance --smoker-over-35 --vte-risk
//!
//! # List every product in the catalog
//! petal catalog
//! ```
//!
//! # Commands
//!
//! - `evaluate` - Run an answer set through the recommendation rules
//! - `catalog` - List the product catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use petal_core::MedicalFlags;

mod commands;

#[derive(Parser)]
#[command(name = "petal")]
#[command(author, version, about = "Petal Health CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an answer set through the recommendation rules
    Evaluate {
        /// Priority to include, repeatable: low-maintenance, hormone-free,
        /// regulating-periods, improving-acne-mood, short-term-flexibility,
        /// cost
        #[arg(short, long = "priority", value_name = "PRIORITY")]
        priorities: Vec<String>,

        /// Daily routine consistency: very-consistent, somewhat-consistent,
        /// not-consistent
        #[arg(short, long, default_value = "very-consistent")]
        lifestyle: String,

        /// Pregnancy plans in the next 1-2 years: yes, no, unsure
        #[arg(long, default_value = "no")]
        plans: String,

        /// Over 35 years old and smokes cigarettes
        #[arg(long)]
        smoker_over_35: bool,

        /// Migraines with aura
        #[arg(long)]
        migraine_aura: bool,

        /// Personal or family history of blood clots
        #[arg(long)]
        vte_risk: bool,

        /// BMI over 30
        #[arg(long)]
        bmi_over_30: bool,
    },
    /// List the product catalog
    Catalog,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Evaluate {
            priorities,
            lifestyle,
            plans,
            smoker_over_35,
            migraine_aura,
            vte_risk,
            bmi_over_30,
        } => {
            let medical = MedicalFlags {
                smoker_over_35,
                migraine_aura,
                vte_risk,
                bmi_over_30,
            };
            commands::evaluate::run(&priorities, &lifestyle, &plans, medical)?;
        }
        Commands::Catalog => commands::catalog::run(),
    }
    Ok(())
}
