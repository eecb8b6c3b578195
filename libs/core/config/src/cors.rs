use crate::{ConfigError, FromEnv};
use std::env;

/// Cross-origin settings.
///
/// An empty origin list means every origin is allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

impl FromEnv for CorsConfig {
    /// Reads the comma-separated `CORS_ALLOWED_ORIGIN` list, e.g.
    /// `http://localhost:3000,https://example.com`. Unset or blank is permissive.
    fn from_env() -> Result<Self, ConfigError> {
        let allowed_origins = env::var("CORS_ALLOWED_ORIGIN")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { allowed_origins })
    }
}
