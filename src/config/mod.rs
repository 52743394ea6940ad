pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_minimum, validate_url, Validate};
use clap::{Parser, Subcommand};
pub use toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "event-toolbox")]
#[command(about = "Event toolbox: roster keeping, lucky draws and AI-named grouping")]
pub struct CliConfig {
    /// Name-list file to import (.txt or .csv, free-form names)
    #[arg(long)]
    pub input: Option<String>,

    /// Inline name list, separated by commas or newlines
    #[arg(long)]
    pub names: Option<String>,

    /// Load the built-in demo roster
    #[arg(long)]
    pub sample: bool,

    /// Directory CSV exports are written to
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the roster, flag duplicate names, optionally dedupe and export
    Roster {
        /// Keep only the first occurrence of each name
        #[arg(long)]
        dedupe: bool,

        /// Write the roster backup CSV
        #[arg(long)]
        export: bool,
    },
    /// Run one or more lucky draws
    Draw {
        /// Number of draws to run
        #[arg(long, default_value = "1")]
        count: usize,

        /// Allow the same name to win more than once
        #[arg(long)]
        repeatable: bool,

        /// Skip the deceleration animation
        #[arg(long)]
        fast: bool,
    },
    /// Partition the roster into groups with AI-generated team names
    Group {
        /// Members per group (the last group may be smaller)
        #[arg(long)]
        size: Option<usize>,

        /// Theme handed to the naming provider
        #[arg(long)]
        theme: Option<String>,

        /// Write the grouping result CSV
        #[arg(long)]
        export: bool,
    },
}

/// Effective runtime configuration: built-in defaults overridden by the
/// optional TOML file. Engines and adapters read it through `ConfigProvider`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub naming_endpoint: String,
    pub naming_model: String,
    pub api_key_env: String,
    pub naming_timeout_seconds: u64,
    pub default_group_size: usize,
    pub default_theme: String,
    pub default_repeatable: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            naming_endpoint: "https://generativelanguage.googleapis.com".to_string(),
            naming_model: "gemini-2.0-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            naming_timeout_seconds: 15,
            default_group_size: 4,
            default_theme: "Corporate Superheroes".to_string(),
            default_repeatable: false,
        }
    }
}

impl AppConfig {
    pub fn resolve(file: Option<&TomlConfig>) -> Self {
        let mut config = Self::default();
        let Some(file) = file else {
            return config;
        };

        if let Some(naming) = &file.naming {
            if let Some(endpoint) = &naming.endpoint {
                config.naming_endpoint = endpoint.clone();
            }
            if let Some(model) = &naming.model {
                config.naming_model = model.clone();
            }
            if let Some(env) = &naming.api_key_env {
                config.api_key_env = env.clone();
            }
            if let Some(timeout) = naming.timeout_seconds {
                config.naming_timeout_seconds = timeout;
            }
        }
        if let Some(grouping) = &file.grouping {
            if let Some(size) = grouping.group_size {
                config.default_group_size = size;
            }
            if let Some(theme) = &grouping.theme {
                config.default_theme = theme.clone();
            }
        }
        if let Some(draw) = &file.draw {
            if let Some(repeatable) = draw.repeatable {
                config.default_repeatable = repeatable;
            }
        }
        config
    }
}

impl ConfigProvider for AppConfig {
    fn naming_endpoint(&self) -> &str {
        &self.naming_endpoint
    }

    fn naming_model(&self) -> &str {
        &self.naming_model
    }

    fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    fn naming_timeout_seconds(&self) -> u64 {
        self.naming_timeout_seconds
    }

    fn default_group_size(&self) -> usize {
        self.default_group_size
    }

    fn default_theme(&self) -> &str {
        &self.default_theme
    }

    fn default_repeatable(&self) -> bool {
        self.default_repeatable
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("naming_endpoint", &self.naming_endpoint)?;
        validate_minimum(
            "naming_timeout_seconds",
            self.naming_timeout_seconds as usize,
            1,
        )?;
        validate_minimum("default_group_size", self.default_group_size, 2)?;
        Ok(())
    }
}
