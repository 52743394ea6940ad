use crate::utils::error::Result;
use crate::utils::validation::{validate_minimum, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every section and field may be omitted;
/// missing values fall back to the built-in defaults in `AppConfig`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub naming: Option<NamingSection>,
    pub grouping: Option<GroupingSection>,
    pub draw: Option<DrawSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingSection {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupingSection {
    pub group_size: Option<usize>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawSection {
    pub repeatable: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(naming) = &self.naming {
            if let Some(endpoint) = &naming.endpoint {
                validate_url("naming.endpoint", endpoint)?;
            }
            if let Some(timeout) = naming.timeout_seconds {
                validate_minimum("naming.timeout_seconds", timeout as usize, 1)?;
            }
        }
        if let Some(grouping) = &self.grouping {
            if let Some(size) = grouping.group_size {
                validate_minimum("grouping.group_size", size, 2)?;
            }
        }
        Ok(())
    }
}
