// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used by the toast engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Capacity of the toast queue
//! - **Timing**: Auto-dismiss duration, closing window and tick interval
//! - **Presentation**: Per-toast behavior flags

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default maximum number of toasts kept in the queue.
pub const DEFAULT_TOAST_LIMIT: usize = 10;

/// Minimum queue capacity.
pub const MIN_TOAST_LIMIT: usize = 1;

/// Maximum queue capacity.
pub const MAX_TOAST_LIMIT: usize = 100;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss duration (in milliseconds). Zero disables expiry.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Maximum auto-dismiss duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 600_000;

/// Default closing animation window (in milliseconds).
///
/// A dismissed or expired toast stays in the queue in the `Closing` state
/// for this long before it is removed.
pub const DEFAULT_CLOSING_WINDOW_MS: u64 = 300;

/// Maximum closing animation window (in milliseconds).
pub const MAX_CLOSING_WINDOW_MS: u64 = 5000;

/// Default interval between timer ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Minimum interval between timer ticks (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum interval between timer ticks (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Whether toasts offer a manual close button by default.
pub const DEFAULT_DISMISSIBLE: bool = true;

/// Whether toasts render a remaining-time indicator by default.
pub const DEFAULT_SHOW_PROGRESS: bool = true;

/// Whether hovering a toast suspends its countdown by default.
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Queue validation
    assert!(MIN_TOAST_LIMIT > 0);
    assert!(MAX_TOAST_LIMIT >= MIN_TOAST_LIMIT);
    assert!(DEFAULT_TOAST_LIMIT >= MIN_TOAST_LIMIT);
    assert!(DEFAULT_TOAST_LIMIT <= MAX_TOAST_LIMIT);

    // Timing validation
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(DEFAULT_CLOSING_WINDOW_MS <= MAX_CLOSING_WINDOW_MS);
    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    // Ticks must be fine-grained enough to observe the closing window
    assert!(DEFAULT_TICK_INTERVAL_MS < DEFAULT_CLOSING_WINDOW_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_defaults_are_valid() {
        assert_eq!(DEFAULT_TOAST_LIMIT, 10);
        assert!(DEFAULT_TOAST_LIMIT >= MIN_TOAST_LIMIT);
        assert!(DEFAULT_TOAST_LIMIT <= MAX_TOAST_LIMIT);
    }

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_TOAST_DURATION_MS, 5000);
        assert!(DEFAULT_CLOSING_WINDOW_MS > 0);
        assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    }

    #[test]
    fn presentation_defaults_are_enabled() {
        assert!(DEFAULT_DISMISSIBLE);
        assert!(DEFAULT_SHOW_PROGRESS);
        assert!(DEFAULT_PAUSE_ON_HOVER);
    }
}
