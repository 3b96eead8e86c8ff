//! Configuration management for the career compass engine

use crate::error::{CareerCompassError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub success_model: SuccessModelConfig,
    pub selection: SelectionConfig,
    pub supply: SupplyConfig,
    pub output: OutputConfig,
}

/// Weights for the four composite sub-scores. Must describe a convex
/// combination (non-negative, summing to 1) for the composite to stay 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub salary_weight: f64,
    pub advancement_weight: f64,
    pub diversity_weight: f64,
    pub benefits_weight: f64,
}

/// Relative weights of the seven success-factor signals. Equal by default;
/// kept as configuration so the formula can be recalibrated without code
/// changes. Normalized by their sum at evaluation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessModelConfig {
    pub experience_weight: f64,
    pub field_weight: f64,
    pub company_size_weight: f64,
    pub location_weight: f64,
    pub diversity_weight: f64,
    pub growth_weight: f64,
    pub culture_weight: f64,
}

impl SuccessModelConfig {
    pub fn weight_sum(&self) -> f64 {
        self.experience_weight
            + self.field_weight
            + self.company_size_weight
            + self.location_weight
            + self.diversity_weight
            + self.growth_weight
            + self.culture_weight
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Upper bound on recommendations returned per tier
    pub max_recommendations_per_tier: usize,

    /// Candidates admitted unconditionally before diversity gating kicks in
    pub diversity_floor: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyConfig {
    /// Wall-clock budget for the external job-supply call
    pub timeout_secs: u64,
    pub enable_caching: bool,
    pub cache_ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                salary_weight: 0.40,
                advancement_weight: 0.25,
                diversity_weight: 0.20,
                benefits_weight: 0.15,
            },
            success_model: SuccessModelConfig {
                experience_weight: 1.0,
                field_weight: 1.0,
                company_size_weight: 1.0,
                location_weight: 1.0,
                diversity_weight: 1.0,
                growth_weight: 1.0,
                culture_weight: 1.0,
            },
            selection: SelectionConfig {
                max_recommendations_per_tier: 5,
                diversity_floor: 3,
            },
            supply: SupplyConfig {
                timeout_secs: 10,
                enable_caching: true,
                cache_ttl_secs: 300,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CareerCompassError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CareerCompassError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-compass")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            self.scoring.salary_weight,
            self.scoring.advancement_weight,
            self.scoring.diversity_weight,
            self.scoring.benefits_weight,
        ];
        if weights.iter().any(|w| *w < 0.0) {
            return Err(CareerCompassError::Configuration(
                "scoring weights must be non-negative".to_string(),
            ));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(CareerCompassError::Configuration(format!(
                "scoring weights must sum to 1.0, got {}",
                sum
            )));
        }

        if self.success_model.weight_sum() <= 0.0 {
            return Err(CareerCompassError::Configuration(
                "success model weights must have a positive sum".to_string(),
            ));
        }

        if self.selection.max_recommendations_per_tier == 0 {
            return Err(CareerCompassError::Configuration(
                "max_recommendations_per_tier must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_scoring_weights() {
        let config = Config::default();
        assert_eq!(config.scoring.salary_weight, 0.40);
        assert_eq!(config.scoring.advancement_weight, 0.25);
        assert_eq!(config.scoring.diversity_weight, 0.20);
        assert_eq!(config.scoring.benefits_weight, 0.15);
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let mut config = Config::default();
        config.scoring.salary_weight = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.selection.max_recommendations_per_tier = 3;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.selection.max_recommendations_per_tier, 3);
        assert_eq!(loaded.supply.timeout_secs, config.supply.timeout_secs);
    }
}
