pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use toml_config::FileConfig;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone, Parser)]
#[command(name = "marketing-planner")]
#[command(about = "Marketing plan and SEO blog generator API backed by Google Gemini")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, env = "SERVER_HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL")]
    pub model: Option<String>,

    #[arg(long, env = "GEMINI_BASE_URL")]
    pub base_url: Option<String>,

    /// Leave table_json blocks in blog output as they are
    #[arg(long)]
    pub no_json_tables: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file, then flags and environment variables.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            FileConfig::from_file(path)?.apply(&mut settings);
        }

        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(api_key) = non_blank(self.api_key.as_deref()) {
            settings.provider.api_key = Some(api_key);
        }
        if let Some(model) = &self.model {
            settings.provider.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            settings.provider.base_url = base_url.clone();
        }
        if self.no_json_tables {
            settings.convert_json_tables = false;
        }
        settings.json_logs |= self.json_logs;
        settings.verbose |= self.verbose;

        Ok(settings)
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub provider: ProviderSettings,
    pub convert_json_tables: bool,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            provider: ProviderSettings::default(),
            convert_json_tables: true,
            json_logs: false,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        self.provider.validate()
    }
}

#[derive(Clone, PartialEq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

// A missing API key is reported by /health, not rejected at startup.
impl Validate for ProviderSettings {
    fn validate(&self) -> Result<()> {
        validate_url("provider.base_url", &self.base_url)?;
        validate_non_empty_string("provider.model", &self.model)
    }
}
