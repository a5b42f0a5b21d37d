use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::constants::{DEFAULT_LANGUAGE, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Runtime settings for the CLI and server front-ends
#[derive(Debug, Clone)]
pub struct Settings {
    /// Fallback language for unknown locales (default: "en")
    pub default_language: String,

    /// Directory with extra `*.json` language packs
    pub language_pack_dir: Option<PathBuf>,

    /// HTTP port for server mode (default: 3000)
    pub port: u16,

    /// Per-request timeout in server mode (default: 10s)
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            language_pack_dir: None,
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(lang) = env::var("SPOKEN_MATH_DEFAULT_LANGUAGE") {
            let lang = lang.trim().to_lowercase();
            if !lang.is_empty() {
                settings.default_language = lang;
            }
        }

        if let Ok(dir) = env::var("SPOKEN_MATH_LANGUAGE_DIR") {
            if !dir.trim().is_empty() {
                settings.language_pack_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(val) = env::var("PORT") {
            if let Ok(port) = val.parse() {
                settings.port = port;
            }
        }

        if let Ok(val) = env::var("REQUEST_TIMEOUT_SECONDS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => settings.request_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    "Invalid REQUEST_TIMEOUT_SECONDS '{}', using default {}s",
                    val,
                    DEFAULT_REQUEST_TIMEOUT_SECS
                ),
            }
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_language, "en");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
        assert!(settings.language_pack_dir.is_none());
    }

    #[test]
    fn test_from_env_custom_values() {
        env::set_var("SPOKEN_MATH_DEFAULT_LANGUAGE", " FR ");
        env::set_var("REQUEST_TIMEOUT_SECONDS", "30");

        let settings = Settings::from_env();
        assert_eq!(settings.default_language, "fr");
        assert_eq!(settings.request_timeout, Duration::from_secs(30));

        env::set_var("REQUEST_TIMEOUT_SECONDS", "zero");
        let settings = Settings::from_env();
        assert_eq!(settings.request_timeout, Duration::from_secs(10));

        // Cleanup
        env::remove_var("SPOKEN_MATH_DEFAULT_LANGUAGE");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");
    }
}
