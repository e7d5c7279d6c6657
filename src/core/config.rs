//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::profile::{FormProfile, ProfileError};

/// Environment variable naming the profile served at `/`
pub const FORM_PROFILE_VAR: &str = "FORM_PROFILE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    InvalidProfile {
        var: &'static str,
        #[source]
        source: ProfileError,
    },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Form profile the root path redirects to
    /// Example: FORM_PROFILE=live
    pub default_profile: FormProfile,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_profile = match lookup(FORM_PROFILE_VAR) {
            Some(value) if !value.trim().is_empty() => {
                value
                    .parse::<FormProfile>()
                    .map_err(|source| ConfigError::InvalidProfile {
                        var: FORM_PROFILE_VAR,
                        source,
                    })?
            }
            _ => FormProfile::default(),
        };

        Ok(Self { default_profile })
    }

    /// Path the root route redirects to
    pub fn landing_path(&self) -> String {
        self.default_profile.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_profile_defaults_to_strict() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.default_profile, FormProfile::Strict);
        assert_eq!(config.landing_path(), "/form/strict");
    }

    #[test]
    fn test_empty_profile_defaults_to_strict() {
        let config = Config::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.default_profile, FormProfile::Strict);
    }

    #[test]
    fn test_profile_from_lookup() {
        let config = Config::from_lookup(|key| {
            (key == FORM_PROFILE_VAR).then(|| "live".to_string())
        })
        .unwrap();

        assert_eq!(config.default_profile, FormProfile::Live);
        assert_eq!(config.landing_path(), "/form/live");
    }

    #[test]
    fn test_invalid_profile_is_an_error() {
        let err = Config::from_lookup(|_| Some("eager".to_string())).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidProfile { var: FORM_PROFILE_VAR, .. }));
        assert_eq!(
            err.to_string(),
            "FORM_PROFILE: unknown form profile 'eager' (expected simple, strict or live)"
        );
    }
}
