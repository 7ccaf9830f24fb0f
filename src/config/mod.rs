mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ReactorConfig, UiConfig, MAX_DELAY_MS};
