//! Pure parse/validate for `workerkit.toml`.

use crate::domain::AppError;
use crate::domain::config::GeneratorConfig;

/// Parse and validate generator configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
