//! Subscriber installation for the CLI and embedding applications

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Output profile of the logging facility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines on stderr, debug level
    Development,
    /// One JSON object per event on stderr, info level
    Production,
    /// Nothing installed here; tests use `init_test_capture()`
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "sarif_order=debug",
            Profile::Production | Profile::Test => "sarif_order=info",
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_filter()))
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call in a process does anything. If another global
/// subscriber is already installed (a test capture layer, say) it is kept.
///
/// # Example
///
/// ```
/// use sarif_order_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(profile.env_filter())
                .with_writer(std::io::stderr)
                .try_init()
                .is_ok(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(profile.env_filter())
                .with_writer(std::io::stderr)
                .try_init()
                .is_ok(),
            Profile::Test => true,
        };
        if !installed {
            tracing::debug!(profile = ?profile, "global subscriber already set");
        }
    });
}
