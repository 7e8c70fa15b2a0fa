// SPDX-License-Identifier: MPL-2.0
//! User interface for toasts.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`toast`] - Overlay rendering a toaster's queue as stacked cards

pub mod design_tokens;
pub mod toast;
