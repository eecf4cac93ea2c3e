use ::config::{Config, ConfigError};
use serde::Deserialize;

/// Knobs for the catalog. The separator only matters to the
/// consistency-checked insertion path; plain `add` never splits paths.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogConfig {
    pub separator: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            separator: "/".to_string(),
        }
    }
}

/// Coalesce env vars with defaults to get a `CatalogConfig`.
pub fn get_catalog_config() -> Result<CatalogConfig, ConfigError> {
    let config = Config::builder()
        .add_source(config::Environment::with_prefix("FILENAV").try_parsing(true))
        .set_default("separator", "/")?
        .build()?;
    // TODO would be good to validate that the provided values make sense.
    config.try_deserialize()
}
