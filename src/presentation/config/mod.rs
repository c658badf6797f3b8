mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LlmSettings, LoggingSettings, RendererSettings, ServerSettings, SessionSettings, Settings,
    SettingsError, StorageSettings,
};
