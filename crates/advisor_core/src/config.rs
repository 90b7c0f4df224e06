use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the advisory service.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Per-request timeout in seconds. A hung request resolves as a
    /// transport error instead of staying outstanding forever.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

const CONFIG_FILE_PATH: &str = "config.toml";

fn default_api_base() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn parse_timeout_env(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

/// Environment values beat file and default values. Blank base URLs and
/// unusable timeouts are ignored rather than clobbering a good value.
fn apply_env_overrides(config: &mut Config, api_base: Option<String>, timeout: Option<String>) {
    if let Some(api_base) = api_base {
        if !api_base.trim().is_empty() {
            config.api_base = api_base;
        }
    }
    if let Some(timeout) = timeout {
        if let Some(secs) = parse_timeout_env(&timeout) {
            config.request_timeout_secs = secs;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration: defaults, then `config.toml` in the working
    /// directory, then environment overrides.
    pub fn new() -> Self {
        let mut config = Config::default();

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        apply_env_overrides(
            &mut config,
            std::env::var("ADVISOR_API_BASE").ok(),
            std::env::var("ADVISOR_TIMEOUT_SECS").ok(),
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_parse_timeout_env() {
        assert_eq!(parse_timeout_env("45"), Some(45));
        assert_eq!(parse_timeout_env(" 10 "), Some(10));
        assert_eq!(parse_timeout_env("0"), None);
        assert_eq!(parse_timeout_env("abc"), None);
        assert_eq!(parse_timeout_env(""), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(r#"api_base = "http://advisor.test""#).unwrap();
        assert_eq!(config.api_base, "http://advisor.test");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_env_overrides_beat_file_values() {
        let mut config: Config = toml::from_str(
            r#"
            api_base = "http://from-file.test"
            request_timeout_secs = 10
            "#,
        )
        .unwrap();

        apply_env_overrides(
            &mut config,
            Some("http://from-env.test".to_string()),
            Some("45".to_string()),
        );

        assert_eq!(config.api_base, "http://from-env.test");
        assert_eq!(config.request_timeout_secs, 45);
    }

    #[test]
    fn test_unusable_env_values_are_ignored() {
        let mut config: Config = toml::from_str(r#"api_base = "http://from-file.test""#).unwrap();

        apply_env_overrides(&mut config, Some("   ".to_string()), Some("0".to_string()));
        assert_eq!(config.api_base, "http://from-file.test");
        assert_eq!(config.request_timeout_secs, 30);

        apply_env_overrides(&mut config, None, Some("abc".to_string()));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_new_picks_up_environment() {
        // One test owns these variables; nothing else in the crate reads
        // them, so there is no cross-test race.
        std::env::set_var("ADVISOR_API_BASE", "http://env-wins.test");
        std::env::set_var("ADVISOR_TIMEOUT_SECS", "12");

        let config = Config::new();
        assert_eq!(config.api_base, "http://env-wins.test");
        assert_eq!(config.request_timeout_secs, 12);

        std::env::remove_var("ADVISOR_API_BASE");
        std::env::remove_var("ADVISOR_TIMEOUT_SECS");
    }
}
