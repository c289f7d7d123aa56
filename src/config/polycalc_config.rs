// src/config/polycalc_config.rs

use serde::{Deserialize, Serialize};
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// Main polycalc configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolycalcConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Console session behaviour
    pub session: SessionConfig,

    /// Result formatting and persistence
    pub output: OutputConfig,
}

/// Console session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Print prompts before each read (default: true)
    pub prompts: bool,

    /// Number of x values to read; they alternate between P1 and P2 (default: 2)
    pub evaluation_points: usize,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Echo every polynomial in term-list form as well (default: false)
    pub show_term_list: bool,

    /// Fixed number of decimals for evaluation results
    pub precision: Option<usize>,

    /// Directory to save the session polynomials to as JSON
    pub save_directory: Option<String>,
}

impl Default for PolycalcConfig {
    fn default() -> Self {
        PolycalcConfig {
            log_level: "info".to_string(),
            session: SessionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompts: true,
            evaluation_points: 2,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            show_term_list: false,
            precision: None,
            save_directory: None,
        }
    }
}

impl PolycalcConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("polycalc.toml").exists() {
            builder = builder.add_source(File::with_name("polycalc.toml"));
        } else if Path::new("polycalc.yaml").exists() {
            builder = builder.add_source(File::with_name("polycalc.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("session.prompts", true)?
            .set_default("session.evaluation_points", 2)?
            .set_default("output.show_term_list", false)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // POLYCALC_LOG_LEVEL, POLYCALC_SESSION__PROMPTS, ...
        let config = builder
            .add_source(
                Environment::with_prefix("POLYCALC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
