// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::{self, Variant};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded from the toast overlay.
    Toast(toast::Message),
    /// Show a timed toast of the given variant.
    Show(Variant),
    /// Show a toast that only closes when dismissed.
    ShowPersistent,
    /// Rewrite the most recent toast and restart its countdown.
    UpdateLatest,
    DismissLatest,
    DismissAll,
    /// Issue a toast through a context with no toaster behind it.
    ShowDetached,
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Directory holding `settings.toml`, overriding the platform default.
    pub config_dir: Option<PathBuf>,
    /// Queue capacity overriding the configured one.
    pub limit: Option<usize>,
}
