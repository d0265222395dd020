//! Fault-injection switch for the `/trigger-error` endpoint.
//!
//! The switch is a single atomic flag owned by the server context and
//! handed to handlers through axum state. What an enabled trigger does is
//! decided once at startup by [`FaultMode`].

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Behavior of the trigger endpoint while the toggle is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultMode {
    /// Return a deterministic success result.
    #[default]
    Resolve,
    /// Fail the request with a generic internal error.
    Inject,
}

impl fmt::Display for FaultMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultMode::Resolve => write!(f, "resolve"),
            FaultMode::Inject => write!(f, "inject"),
        }
    }
}

impl FromStr for FaultMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resolve" => Ok(FaultMode::Resolve),
            "inject" => Ok(FaultMode::Inject),
            other => Err(format!(
                "unknown fault mode '{}' (expected 'resolve' or 'inject')",
                other
            )),
        }
    }
}

/// Process-wide on/off switch.
///
/// Cloning yields another handle to the same flag.
#[derive(Clone, Default)]
pub struct FaultToggle {
    enabled: Arc<AtomicBool>,
}

impl FaultToggle {
    /// Create a toggle in the disabled state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
        tracing::info!("Error generation enabled");
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
        tracing::info!("Error generation disabled");
    }

    pub fn status(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for FaultToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaultToggle")
            .field("enabled", &self.status())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_disabled() {
        assert!(!FaultToggle::new().status());
    }

    #[test]
    fn enable_then_disable() {
        let toggle = FaultToggle::new();
        toggle.enable();
        assert!(toggle.status());
        toggle.disable();
        assert!(!toggle.status());
    }

    #[test]
    fn enable_is_idempotent() {
        let toggle = FaultToggle::new();
        toggle.enable();
        toggle.enable();
        assert!(toggle.status());
    }

    #[test]
    fn disable_is_idempotent() {
        let toggle = FaultToggle::new();
        toggle.disable();
        toggle.disable();
        assert!(!toggle.status());
    }

    #[test]
    fn clones_share_state() {
        let toggle = FaultToggle::new();
        let other = toggle.clone();
        other.enable();
        assert!(toggle.status());
    }

    #[test]
    fn concurrent_toggling_settles_on_last_write() {
        let toggle = FaultToggle::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let toggle = toggle.clone();
                thread::spawn(move || {
                    for _ in 0..1000 {
                        if i % 2 == 0 {
                            toggle.enable();
                        } else {
                            toggle.disable();
                        }
                        let _ = toggle.status();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        toggle.enable();
        assert!(toggle.status());
        toggle.disable();
        assert!(!toggle.status());
    }

    #[test]
    fn fault_mode_parsing() {
        assert_eq!("resolve".parse::<FaultMode>(), Ok(FaultMode::Resolve));
        assert_eq!(" Inject ".parse::<FaultMode>(), Ok(FaultMode::Inject));
        assert!("crash".parse::<FaultMode>().is_err());
        assert_eq!(FaultMode::default(), FaultMode::Resolve);
        assert_eq!(FaultMode::Inject.to_string(), "inject");
    }
}
