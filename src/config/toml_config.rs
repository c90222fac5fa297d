use crate::config::{non_blank, Settings};
use crate::utils::error::{AppError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerSection>,
    pub provider: Option<ProviderSection>,
    pub markdown: Option<MarkdownSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSection {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkdownSection {
    pub convert_json_tables: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment. Unset variables become empty
    /// strings, so an unset `${GOOGLE_API_KEY}` leaves the key unconfigured.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.to_string())
    }

    /// Overlays the values present in the file onto `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(server) = &self.server {
            if let Some(host) = &server.host {
                settings.host = host.clone();
            }
            if let Some(port) = server.port {
                settings.port = port;
            }
        }

        if let Some(provider) = &self.provider {
            if let Some(api_key) = non_blank(provider.api_key.as_deref()) {
                settings.provider.api_key = Some(api_key);
            }
            if let Some(model) = &provider.model {
                settings.provider.model = model.clone();
            }
            if let Some(base_url) = &provider.base_url {
                settings.provider.base_url = base_url.clone();
            }
        }

        if let Some(enabled) = self.markdown.as_ref().and_then(|m| m.convert_json_tables) {
            settings.convert_json_tables = enabled;
        }

        if let Some(logging) = &self.logging {
            settings.json_logs = logging.json.unwrap_or(settings.json_logs);
            settings.verbose = logging.verbose.unwrap_or(settings.verbose);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080

[provider]
model = "gemini-1.5-pro"
base_url = "https://proxy.example.com/v1beta"

[markdown]
convert_json_tables = false

[logging]
json = true
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        let mut settings = Settings::default();
        config.apply(&mut settings);

        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
        assert_eq!(settings.provider.model, "gemini-1.5-pro");
        assert_eq!(settings.provider.base_url, "https://proxy.example.com/v1beta");
        assert!(!settings.convert_json_tables);
        assert!(settings.json_logs);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let config = FileConfig::from_toml_str("").unwrap();
        let mut settings = Settings::default();
        config.apply(&mut settings);

        assert_eq!(settings.port, 8000);
        assert!(settings.convert_json_tables);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MARKETING_PLANNER_TEST_KEY", "key-from-env");

        let config = FileConfig::from_toml_str(
            r#"
[provider]
api_key = "${MARKETING_PLANNER_TEST_KEY}"
"#,
        )
        .unwrap();

        let provider = config.provider.unwrap();
        assert_eq!(provider.api_key.as_deref(), Some("key-from-env"));

        std::env::remove_var("MARKETING_PLANNER_TEST_KEY");
    }

    #[test]
    fn test_unset_env_var_leaves_key_unconfigured() {
        let config = FileConfig::from_toml_str(
            r#"
[provider]
api_key = "${MARKETING_PLANNER_UNSET_VARIABLE}"
"#,
        )
        .unwrap();

        let mut settings = Settings::default();
        config.apply(&mut settings);
        assert!(settings.provider.api_key.is_none());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let result = FileConfig::from_toml_str("[server\nport = ");
        assert!(matches!(
            result,
            Err(AppError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 9001\n")
            .unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.unwrap().port, Some(9001));
    }
}
