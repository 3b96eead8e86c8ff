//! Career compass: tiered job recommendations from the command line

mod cli;
mod config;
mod engine;
mod error;
mod model;
mod output;
mod supply;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::Config;
use engine::RecommendationEngine;
use error::{CareerCompassError, Result};
use log::{error, info};
use model::{CandidateSkillProfile, SearchCriteria};
use output::{RecommendationReport, ReportGenerator};
use std::path::{Path, PathBuf};
use std::process;
use supply::{JsonFileSupplier, MemoryCache, NoopCache};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Recommend {
            criteria,
            jobs,
            profile,
            max_per_tier,
            detailed,
            output,
            save,
            no_cache,
        } => {
            info!("Starting recommendation run");

            cli::validate_file_extension(&criteria, &["toml", "json"])
                .map_err(|e| CareerCompassError::InvalidInput(format!("Criteria file: {}", e)))?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| CareerCompassError::InvalidInput(format!("Job pool file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(CareerCompassError::InvalidInput)?;

            let search_criteria = load_criteria(&criteria)?;
            let skill_profile = match &profile {
                Some(path) => Some(CandidateSkillProfile::load(path)?),
                None => None,
            };

            println!("🧭 Career compass recommendation run");
            println!("📋 Criteria: {}", criteria.display());
            println!("💼 Job pool: {}", jobs.display());
            match &profile {
                Some(path) => println!("🧑 Skill profile: {}", path.display()),
                None => println!("🧑 Skill profile: none (skill levels default to 0)"),
            }

            let cache: Box<dyn supply::Cache> = if no_cache || !config.supply.enable_caching {
                Box::new(NoopCache)
            } else {
                Box::new(MemoryCache::new())
            };

            let use_colors = config.output.color_output;
            let show_detailed = detailed || config.output.detailed;

            let engine = RecommendationEngine::new(
                config,
                Box::new(JsonFileSupplier::new(jobs)),
                cache,
            )?;

            println!("\n🔎 Scoring and classifying opportunities...");
            let set = engine
                .generate_recommendations(&search_criteria, skill_profile.as_ref(), max_per_tier)
                .await?;

            if set.supply_degraded {
                println!(
                    "{}",
                    "⚠️  Job supply was unavailable; returning an empty result set.".yellow()
                );
            }

            let summaries = engine.tier_summary(&set);
            let report = RecommendationReport {
                recommendations: set,
                summaries,
            };

            let generator = ReportGenerator::new(use_colors, show_detailed);
            let rendered = generator.render(&report, output_format)?;
            println!("\n{}", rendered);

            if let Some(save_path) = save {
                generator.save_to_file(&rendered, &save_path)?;
                println!("💾 Report saved to {}", save_path.display());
            }

            Ok(())
        }

        Commands::Tiers => {
            println!("{}\n", "Recommendation tiers".bold());
            for spec in RecommendationEngine::tier_catalog() {
                let range = match spec.max_salary_increase {
                    Some(max) => format!(
                        "{:.0}%-{:.0}% salary increase",
                        spec.min_salary_increase * 100.0,
                        max * 100.0
                    ),
                    None => format!("{:.0}%+ salary increase", spec.min_salary_increase * 100.0),
                };

                println!("• {} ({:?} risk)", spec.tier.name().to_uppercase().bold(), spec.risk_level);
                println!("  {}", spec.description);
                println!(
                    "  {} | success floor {:.0}%",
                    range,
                    spec.min_success_probability * 100.0
                );
                println!("  Typical companies:");
                for company in spec.typical_companies {
                    println!("    - {}", company);
                }
                println!();
            }
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    CareerCompassError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("{}", rendered);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("✅ Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

/// Criteria files may be TOML or JSON; pick the parser by extension
fn load_criteria(path: &PathBuf) -> Result<SearchCriteria> {
    let content = std::fs::read_to_string(path)?;

    let criteria: SearchCriteria = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            CareerCompassError::InvalidInput(format!("Failed to parse criteria: {}", e))
        })?,
        _ => serde_json::from_str(&content)?,
    };

    criteria.validate()?;
    Ok(criteria)
}
