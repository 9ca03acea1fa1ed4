use std::time::Duration;

use euindico_domain::EuIndicoError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (the configured
/// `log_level`) applies. Returns `false` if a subscriber was already
/// installed.
pub fn init_tracing(default_level: &str, json: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init().is_ok()
    } else {
        registry.with(tracing_subscriber::fmt::layer().with_target(false)).try_init().is_ok()
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"auth::login"`).
/// * `elapsed` - Duration the command execution took.
/// * `outcome` - Stable outcome label (`"ok"`, `"rejected"`, an
///   [`error_label`], ...).
///
/// Callers must avoid forwarding credentials in any field.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool, outcome: &str) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, outcome, duration_ms, "command_execution_success");
    } else {
        warn!(command, outcome, duration_ms, "command_execution_failure");
    }
}

/// Convert an `EuIndicoError` into a stable label suitable for logging.
#[inline]
pub const fn error_label(error: &EuIndicoError) -> &'static str {
    match error {
        EuIndicoError::Network(_) => "network",
        EuIndicoError::Timeout(_) => "timeout",
        EuIndicoError::Config(_) => "config",
        EuIndicoError::Storage(_) => "storage",
        EuIndicoError::Auth(_) => "auth",
        EuIndicoError::SessionExpired => "session_expired",
        EuIndicoError::InvalidInput(_) => "invalid_input",
        EuIndicoError::Serialization(_) => "serialization",
        EuIndicoError::Internal(_) => "internal",
    }
}
