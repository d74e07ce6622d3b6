use anyhow::Result;
use std::path::PathBuf;

/// Configuration store interface
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage
    fn load(&self) -> Result<AppConfig>;

    /// Save configuration to storage
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppConfig {
    pub version: u32,
    /// Base URL of the backend API
    pub api_base_url: String,
    /// Path of the locally persisted access token
    pub token_path: PathBuf,
    pub ui: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UiConfig {
    /// Render the metrics chart pane
    pub show_chart: bool,
    /// Format article and repository dates instead of showing them raw
    pub format_dates: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: "http://localhost:8080".to_string(),
            token_path: PathBuf::from(".repodeck-token"),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_chart: true,
            format_dates: true,
        }
    }
}
