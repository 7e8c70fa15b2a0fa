// SPDX-License-Identifier: MPL-2.0
//! Toast identity.
//!
//! Ids combine a process-wide monotonic counter with a random suffix. The
//! counter alone guarantees uniqueness within a process; the suffix keeps ids
//! from different processes (or restarted sessions) distinguishable in logs.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier handed back by `show`.
///
/// The empty id is returned when no provider is in scope; every operation
/// taking an id treats it as unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ToastId(String);

impl ToastId {
    /// Generates a fresh, unique id.
    #[must_use]
    pub fn generate() -> Self {
        let sequence = COUNTER.fetch_add(1, Ordering::Relaxed);
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("toast-{sequence}-{}", &suffix[..8]))
    }

    /// Returns the empty id (no toast).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&ToastId> for String {
    fn from(id: &ToastId) -> Self {
        id.0.clone()
    }
}
