use super::models::OutputFormat;
use protkit::NameMode;

pub struct DefaultsConfig {
    pub name_mode: NameMode,
    pub separator: String,
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            name_mode: NameMode::Short,
            separator: " ".to_string(),
            format: OutputFormat::Text,
        }
    }
}
