use std::path::PathBuf;
use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;

use crate::application::services::{RenderOptions, RendererCommand};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub storage: StorageSettings,
    pub renderer: RendererSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RendererSettings {
    /// Candidate invocations, probed in order, e.g. `["python", "-m", "manim"]`.
    pub commands: Vec<Vec<String>>,
    pub probe_timeout_secs: u64,
    pub render_timeout_secs: u64,
    pub recent_window_secs: u64,
    /// Abort startup instead of serving with rendering disabled.
    pub require_available: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("llm.api_key is empty; set APP__LLM__API_KEY")]
    MissingApiKey,
    #[error("renderer.commands has no usable entry")]
    NoRendererCommands,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml` if present, then `APP__*`
    /// variables (`APP__LLM__API_KEY`, `APP__SERVER__PORT`, ...).
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 16)?
            .set_default("llm.api_key", "")?
            .set_default("llm.base_url", "https://openrouter.ai/api/v1")?
            .set_default("llm.model", "deepseek/deepseek-r1-0528:free")?
            .set_default("llm.request_timeout_secs", 300)?
            .set_default("storage.upload_dir", "uploads")?
            .set_default("storage.output_dir", "videos")?
            .set_default(
                "renderer.commands",
                vec![
                    vec!["python", "-m", "manim"],
                    vec!["manim"],
                    vec!["python3", "-m", "manim"],
                ],
            )?
            .set_default("renderer.probe_timeout_secs", 10)?
            .set_default("renderer.render_timeout_secs", 300)?
            .set_default("renderer.recent_window_secs", 300)?
            .set_default("renderer.require_available", false)?
            .set_default("session.cookie_name", "mathcast_session")?
            .set_default("session.idle_timeout_secs", 86_400)?
            .set_default("logging.level", "info,mathcast=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.llm.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        if self.renderer.candidates().is_empty() {
            return Err(SettingsError::NoRendererCommands);
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            output_dir: self.storage.output_dir.clone(),
            candidates: self.renderer.candidates(),
            probe_timeout: Duration::from_secs(self.renderer.probe_timeout_secs),
            render_timeout: Duration::from_secs(self.renderer.render_timeout_secs),
            recent_window: Duration::from_secs(self.renderer.recent_window_secs),
        }
    }
}

impl StorageSettings {
    /// Creates the upload and output directories. Safe to call repeatedly.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)?;
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}

impl RendererSettings {
    pub fn candidates(&self) -> Vec<RendererCommand> {
        self.commands
            .iter()
            .filter_map(|parts| RendererCommand::from_parts(parts))
            .collect()
    }
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl SessionSettings {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}
