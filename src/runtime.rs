//! # Runtime Environment Module
//!
//! Provides detection of the process-wide debug mode. The flag is read from
//! the `DEBUG` environment variable on every call; nothing is cached, so the
//! predicate always reflects the current environment.
//!
//! The lookup is a narrow, injectable seam: [`is_debug_mode_with`] accepts
//! any lookup function, keeping callers testable without mutating the real
//! process environment.

use std::env;

/// Name of the environment variable that enables debug mode.
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/// Values recognised as enabling debug mode, compared case-insensitively.
const TRUTHY_VALUES: [&str; 5] = ["1", "true", "t", "yes", "y"];

/// Returns whether a configuration value reads as true.
///
/// `"1"`, `"true"`, `"t"`, `"yes"` and `"y"` are truthy, ignoring ASCII case
/// and surrounding whitespace. Every other value, including the empty
/// string, is falsy.
///
/// # Examples
///
/// ```
/// use potato_util::runtime::is_truthy;
///
/// assert!(is_truthy("1"));
/// assert!(is_truthy(" Yes "));
/// assert!(!is_truthy("0"));
/// assert!(!is_truthy("enabled"));
/// ```
pub fn is_truthy(value: &str) -> bool {
    let normalized = value.trim().to_ascii_lowercase();
    TRUTHY_VALUES.contains(&normalized.as_str())
}

/// Returns whether debug mode is enabled according to the given lookup.
///
/// The lookup receives [`DEBUG_ENV_VAR`] and returns the configured value,
/// if any; an absent value means debug mode is off. This is the injectable
/// form of [`is_debug_mode`], intended for tests and for applications that
/// manage configuration state explicitly.
///
/// # Examples
///
/// ```
/// use potato_util::runtime::is_debug_mode_with;
///
/// assert!(is_debug_mode_with(|_| Some("yes".to_string())));
/// assert!(!is_debug_mode_with(|_| None));
/// ```
pub fn is_debug_mode_with<F>(lookup: F) -> bool
where
    F: FnOnce(&str) -> Option<String>,
{
    lookup(DEBUG_ENV_VAR).map_or(false, |value| is_truthy(&value))
}

/// Returns whether the application is running in debug mode.
///
/// Reads the `DEBUG` environment variable once per call. There are no side
/// effects and no shared state, so the predicate may be called concurrently
/// from any number of threads.
pub fn is_debug_mode() -> bool {
    is_debug_mode_with(|key| env::var(key).ok())
}
