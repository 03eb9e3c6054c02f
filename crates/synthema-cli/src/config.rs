use std::path::Path;

use synthema_core::GenerateOptions;

use crate::CliError;

/// Read generation options from a TOML file. Missing keys keep their defaults.
pub fn load_options(path: Option<&Path>) -> Result<GenerateOptions, CliError> {
    let Some(path) = path else {
        return Ok(GenerateOptions::default());
    };
    let content = std::fs::read_to_string(path)?;
    parse_options(&content)
}

pub fn parse_options(content: &str) -> Result<GenerateOptions, CliError> {
    let options: GenerateOptions = toml::from_str(content)?;
    Ok(options)
}
