//! Layered server configuration: defaults, TOML file, environment, CLI.

mod loader;
mod types;

pub use loader::{ConfigError, PORT_ENV};
pub use types::{Config, FaultConfig, ServerConfig};
