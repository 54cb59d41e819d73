//! Progress formatting for the transport bar

use serde::Serialize;

/// Rendered in place of a time that is not yet known
pub const TIME_PLACEHOLDER: &str = "0:00";

/// Format seconds as `m:ss`.
///
/// Minutes are not wrapped into hours. Non-finite input (metadata not yet
/// loaded) renders as [`TIME_PLACEHOLDER`]; negative input renders as zero.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return TIME_PLACEHOLDER.to_string();
    }
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Elapsed and remaining time, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressDisplay {
    /// Time played so far
    pub elapsed: String,

    /// Time left (`duration - position`)
    pub remaining: String,
}

impl ProgressDisplay {
    /// Render `position` and `duration` (both seconds)
    pub fn new(position: f64, duration: f64) -> Self {
        Self {
            elapsed: format_time(position),
            remaining: format_time(duration - position),
        }
    }
}
