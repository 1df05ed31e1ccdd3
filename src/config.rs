use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use plateplan_budget::{DEFAULT_BUDGET, WeekExpense, default_weeks};
use plateplan_recipe::{Catalog, Recipe, sample_recipes};
use plateplan_shopping::STARTER_PANTRY;
use serde::Deserialize;
use std::env;
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Seed data the planner starts from.
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct PlannerConfig {
    #[serde(default = "default_budget")]
    #[validate(custom(function = "plateplan_shared::validate_amount"))]
    pub budget: f64,
    #[serde(default = "default_pantry")]
    #[validate(custom(function = "validate_pantry"))]
    pub pantry: Vec<String>,
    #[serde(default = "sample_recipes")]
    #[validate(nested)]
    pub recipes: Vec<Recipe>,
    #[serde(default = "default_weeks")]
    #[validate(nested)]
    pub expense_history: Vec<WeekExpense>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            pantry: default_pantry(),
            recipes: sample_recipes(),
            expense_history: default_weeks(),
        }
    }
}

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

fn default_pantry() -> Vec<String> {
    STARTER_PANTRY.iter().map(|i| i.to_string()).collect()
}

fn validate_pantry(items: &[String]) -> Result<(), validator::ValidationError> {
    if items.iter().any(|i| i.trim().is_empty()) {
        return Err(validator::ValidationError::new("blank_pantry_item")
            .with_message("Pantry items must not be blank".into()));
    }

    Ok(())
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PLATEPLAN__PLANNER__BUDGET, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH`, or `config/default.toml`
    /// 3. Built-in defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", LogFormat::default().to_string())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional, defaults cover every field
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PLATEPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> plateplan_shared::Result<()> {
        self.planner.validate()?;
        Catalog::new(self.planner.recipes.clone())?;

        Ok(())
    }
}
