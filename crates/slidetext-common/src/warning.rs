//! Converter warnings with colored terminal output.
//!
//! Conversion never fails: unsupported properties, unparseable values and
//! malformed markup all degrade to "keep the inherited style". This module is
//! the only place that recovery becomes visible, as one stderr line per unique
//! message.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are printed at all.
static ENABLED: AtomicBool = AtomicBool::new(true);

/// Warn about recovered input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unsupported property 'letter-spacing'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if !ENABLED.load(Ordering::Relaxed) {
        return;
    }

    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[slidetext {component}] ⚠ {message}").yellow());
    }
}

/// Enable or disable warning output for the whole process.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns true if warnings are currently printed.
#[must_use]
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Clear all recorded warnings (call before converting an unrelated document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_output_is_observable() {
        set_enabled(false);
        assert!(!is_enabled());
        // Disabled warnings are dropped before touching the dedup set.
        warn_once("TEST", "silenced");
        set_enabled(true);
        assert!(is_enabled());
        clear_warnings();
    }
}
