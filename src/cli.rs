//! Command-line flags. Each flag overrides the matching config value.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::fault::FaultMode;

#[derive(Debug, Parser)]
#[command(name = "mockapi", version, about = "Mock JSON API with a fault-injection switch")]
pub struct Args {
    /// Path to a TOML config file (default: <config_dir>/mockapi/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// What /trigger-error does while enabled: resolve or inject
    #[arg(long)]
    pub fault_mode: Option<FaultMode>,
}

impl Args {
    /// Resolve the effective config: file, then environment, then flags.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config.apply_env()?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(mode) = self.fault_mode {
            config.fault.mode = mode;
        }
    }
}
