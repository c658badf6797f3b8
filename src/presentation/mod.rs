pub mod config;
pub mod handlers;
pub mod router;
pub mod session;
pub mod state;

pub use config::{Environment, Settings, SettingsError};
pub use router::create_router;
pub use session::{SessionCookie, session_middleware};
pub use state::AppState;
