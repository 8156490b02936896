//! Helpers for numeric environment values. Missing or malformed values fall back to defaults.

use std::time::Duration;

pub fn parse_usize(raw: Option<String>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Seconds to a `Duration`; unset, malformed or zero means "no limit".
pub fn parse_optional_secs(raw: Option<String>) -> Option<Duration> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
