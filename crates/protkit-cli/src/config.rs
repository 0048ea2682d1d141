pub mod defaults;
pub mod models;

use crate::error::{CliError, Result};
use crate::utils::parser;
use defaults::DefaultsConfig;
use models::{AppConfig, OutputFormat};
use protkit::NameMode;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDisplayConfig {
    #[serde(rename = "name-mode")]
    name_mode: Option<NameMode>,
    separator: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<OutputFormat>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    display: Option<PartialDisplayConfig>,
    output: Option<PartialOutputConfig>,
}

/// Values given directly on the command line; they win over the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub name_mode: Option<NameMode>,
    pub separator: Option<String>,
    pub format: Option<OutputFormat>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(
        mut self,
        overrides: CliOverrides,
        set_values: &[String],
    ) -> Result<AppConfig> {
        self.apply_set_values(set_values)?;

        let defaults = DefaultsConfig::default();
        let display = self.display.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let config = AppConfig {
            name_mode: overrides
                .name_mode
                .or(display.name_mode)
                .unwrap_or(defaults.name_mode),
            separator: overrides
                .separator
                .or(display.separator)
                .unwrap_or(defaults.separator),
            format: overrides
                .format
                .or(output.format)
                .unwrap_or(defaults.format),
        };
        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) =
                parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

            match key {
                "display.name-mode" => {
                    self.display
                        .get_or_insert_with(Default::default)
                        .name_mode = Some(value_str.parse()?);
                }
                "display.separator" => {
                    self.display
                        .get_or_insert_with(Default::default)
                        .separator = Some(value_str.to_string());
                }
                "output.format" => {
                    self.output.get_or_insert_with(Default::default).format =
                        Some(value_str.parse().map_err(CliError::Config)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
