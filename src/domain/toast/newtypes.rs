// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast queue values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Toast Limit Bounds
// =============================================================================

/// Queue capacity bounds (1 to 100 toasts).
pub mod toast_limit_bounds {
    /// Minimum queue capacity.
    pub const MIN: usize = 1;
    /// Maximum queue capacity.
    pub const MAX: usize = 100;
    /// Default queue capacity.
    pub const DEFAULT: usize = 10;
}

// =============================================================================
// ToastLimit
// =============================================================================

/// Maximum number of toasts a queue holds at once.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–100 toasts).
///
/// # Example
///
/// ```
/// use iced_toast::domain::toast::ToastLimit;
///
/// let limit = ToastLimit::new(5);
/// assert_eq!(limit.value(), 5);
///
/// // Values outside range are clamped
/// assert_eq!(ToastLimit::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastLimit(usize);

impl ToastLimit {
    /// Creates a new limit, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(toast_limit_bounds::MIN, toast_limit_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if `len` toasts would overflow this limit.
    #[must_use]
    pub fn is_exceeded_by(self, len: usize) -> bool {
        len > self.0
    }
}

impl Default for ToastLimit {
    fn default() -> Self {
        Self(toast_limit_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_TOAST_LIMIT, MAX_TOAST_LIMIT, MIN_TOAST_LIMIT};

    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(toast_limit_bounds::MIN, MIN_TOAST_LIMIT);
        assert_eq!(toast_limit_bounds::MAX, MAX_TOAST_LIMIT);
        assert_eq!(toast_limit_bounds::DEFAULT, DEFAULT_TOAST_LIMIT);
    }

    #[test]
    fn toast_limit_clamps() {
        assert_eq!(ToastLimit::new(0).value(), toast_limit_bounds::MIN);
        assert_eq!(ToastLimit::new(10_000).value(), toast_limit_bounds::MAX);
    }

    #[test]
    fn toast_limit_default() {
        assert_eq!(ToastLimit::default().value(), toast_limit_bounds::DEFAULT);
    }

    #[test]
    fn toast_limit_detects_overflow() {
        let limit = ToastLimit::new(3);
        assert!(!limit.is_exceeded_by(3));
        assert!(limit.is_exceeded_by(4));
    }
}
