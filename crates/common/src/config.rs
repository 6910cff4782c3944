// =============================================================================
// NexusCorp Common - Site Configuration
// =============================================================================
// There is no runtime configuration surface. The only knob is the
// `ENVIRONMENT` variable captured at compile time.
// =============================================================================

pub const DEFAULT_NOTICE_DURATION_MS: u32 = 4_000;
pub const DEFAULT_MAX_VISIBLE_NOTICES: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Anything other than `development`/`dev` is treated as production.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "development" || v == "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Build-time settings for the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub environment: Environment,
    /// How long an acknowledgement stays on screen.
    pub notice_duration_ms: u32,
    pub max_visible_notices: usize,
}

impl SiteConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
            max_visible_notices: DEFAULT_MAX_VISIBLE_NOTICES,
        }
    }

    /// Read `ENVIRONMENT` as captured by the compiler.
    pub fn from_build_env() -> Self {
        Self::new(Environment::parse(option_env!("ENVIRONMENT")))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!(Environment::parse(Some("development")), Environment::Development);
        assert_eq!(Environment::parse(Some(" Dev ")), Environment::Development);
        assert_eq!(Environment::parse(Some("staging")), Environment::Production);
        assert_eq!(Environment::parse(None), Environment::Production);
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert!(!config.environment.is_development());
        assert_eq!(config.notice_duration_ms, 4_000);
        assert_eq!(config.max_visible_notices, 3);
    }
}
