//! Output formatters: console, JSON, and Markdown renderings of a
//! recommendation report

use crate::config::OutputFormat;
use crate::engine::recommendation::{Recommendation, RecommendationSet};
use crate::engine::summary::TierSummary;
use crate::error::{CareerCompassError, Result};
use crate::model::Tier;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything a formatter needs to render one request's outcome
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub recommendations: RecommendationSet,
    pub summaries: BTreeMap<String, TierSummary>,
}

/// Trait for formatting recommendation reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and compact per-tier sections
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self { use_colors, detailed }
    }

    fn tier_heading(&self, tier: Tier) -> String {
        let label = format!("{} TIER", tier.name().to_uppercase());
        if !self.use_colors {
            return label;
        }
        match tier {
            Tier::Conservative => label.green().bold().to_string(),
            Tier::Optimal => label.cyan().bold().to_string(),
            Tier::Stretch => label.magenta().bold().to_string(),
        }
    }

    fn format_recommendation(&self, output: &mut String, index: usize, rec: &Recommendation) {
        output.push_str(&format!(
            "  {}. {} @ {}\n",
            index + 1,
            rec.job.title.bold(),
            rec.job.company
        ));
        output.push_str(&format!(
            "     Salary increase: {:+.1}%  |  Success: {:.0}%  |  Score: {:.1}/100\n",
            rec.salary_increase_potential * 100.0,
            rec.success_probability * 100.0,
            rec.score.composite
        ));
        output.push_str(&format!(
            "     Preparation: {}  |  Culture fit: {:.0}%\n",
            rec.roadmap.total_duration,
            rec.culture_fit_score * 100.0
        ));

        let top_gaps: Vec<&str> = rec
            .skill_gaps
            .iter()
            .take(3)
            .map(|gap| gap.skill.as_str())
            .collect();
        if !top_gaps.is_empty() {
            output.push_str(&format!("     Top skill gaps: {}\n", top_gaps.join(", ")));
        }

        if self.detailed {
            output.push_str("     Timeline:\n");
            for phase in &rec.strategy.timeline {
                output.push_str(&format!("       - {} ({})\n", phase.phase, phase.duration));
            }
            if let Some(tip) = rec.strategy.negotiation_tips.first() {
                output.push_str(&format!("     Negotiation: {}\n", tip));
            }
        }
        output.push('\n');
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();
        let set = &report.recommendations;

        output.push_str(&format!("{}\n", "Career Compass Recommendations".bold()));
        output.push_str(&format!(
            "Considered {} jobs, recommended {} ({} fell between tier bands)\n\n",
            set.total_jobs_considered,
            set.total_recommendations(),
            set.excluded_by_band_gap
        ));

        if set.supply_degraded {
            let warning = format!(
                "Job supply unavailable: {}\n\n",
                set.supply_error.as_deref().unwrap_or("unknown error")
            );
            output.push_str(&if self.use_colors {
                warning.yellow().to_string()
            } else {
                warning
            });
        }

        for tier in Tier::all() {
            output.push_str(&format!("{}\n", self.tier_heading(tier)));

            if let Some(summary) = report.summaries.get(tier.name()) {
                output.push_str(&format!("  {}\n", summary.description));
                if summary.count > 0 {
                    output.push_str(&format!(
                        "  {} matches | avg increase {:.1}% | avg success {:.0}% | prep {}\n\n",
                        summary.count,
                        summary.avg_salary_increase_pct,
                        summary.avg_success_probability_pct,
                        summary.typical_preparation_time
                    ));
                } else {
                    output.push_str("  No matches in this tier.\n\n");
                }
            }

            for (index, rec) in set.for_tier(tier).iter().enumerate() {
                self.format_recommendation(&mut output, index, rec);
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// JSON formatter for structured consumption
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(rendered)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Markdown formatter for reports saved to disk
pub struct MarkdownFormatter {
    include_metadata: bool,
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RecommendationReport) -> Result<String> {
        let mut output = String::new();
        let set = &report.recommendations;

        output.push_str("# Career Compass Recommendations\n\n");
        output.push_str(&format!(
            "Considered **{}** jobs, recommended **{}** ({} fell between tier bands).\n\n",
            set.total_jobs_considered,
            set.total_recommendations(),
            set.excluded_by_band_gap
        ));

        if set.supply_degraded {
            output.push_str(&format!(
                "> **Warning:** job supply unavailable: {}\n\n",
                set.supply_error.as_deref().unwrap_or("unknown error")
            ));
        }

        for tier in Tier::all() {
            output.push_str(&format!("## {} tier\n\n", capitalize(tier.name())));

            if let Some(summary) = report.summaries.get(tier.name()) {
                output.push_str(&format!("_{}_\n\n", summary.description));
                if summary.count > 0 {
                    output.push_str(&format!(
                        "| Matches | Avg increase | Avg success | Typical prep |\n|---|---|---|---|\n| {} | {:.1}% | {:.0}% | {} |\n\n",
                        summary.count,
                        summary.avg_salary_increase_pct,
                        summary.avg_success_probability_pct,
                        summary.typical_preparation_time
                    ));
                } else {
                    output.push_str("No matches in this tier.\n\n");
                }
            }

            for rec in set.for_tier(tier) {
                output.push_str(&format!("### {} @ {}\n\n", rec.job.title, rec.job.company));
                output.push_str(&format!(
                    "- Salary increase: {:+.1}%\n- Success probability: {:.0}%\n- Composite score: {:.1}/100\n- Preparation window: {}\n",
                    rec.salary_increase_potential * 100.0,
                    rec.success_probability * 100.0,
                    rec.score.composite,
                    rec.roadmap.total_duration
                ));

                if !rec.skill_gaps.is_empty() {
                    output.push_str("\n**Skill gaps**\n\n");
                    for gap in rec.skill_gaps.iter().take(5) {
                        output.push_str(&format!(
                            "- {} ({:?}): {:.0}% -> {:.0}%, about {}\n",
                            gap.skill,
                            gap.priority,
                            gap.current_level * 100.0,
                            gap.required_level * 100.0,
                            gap.learning_time_estimate
                        ));
                    }
                }

                output.push_str("\n**Application timeline**\n\n");
                for phase in &rec.strategy.timeline {
                    output.push_str(&format!("- {} ({})\n", phase.phase, phase.duration));
                }
                output.push('\n');
            }
        }

        if self.include_metadata {
            output.push_str(&format!(
                "---\n\nGenerated {} in {}ms.\n",
                set.generated_at.format("%Y-%m-%d %H:%M UTC"),
                set.processing_time_ms
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn render(&self, report: &RecommendationReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &std::path::Path) -> Result<()> {
        std::fs::write(path, content)
            .map_err(|e| CareerCompassError::OutputFormatting(format!("Failed to save report: {}", e)))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
