// SPDX-License-Identifier: MPL-2.0
//! Variant shorthands shared by every way of raising a toast.

use super::record::{ToastOptions, Variant};

/// Raises toasts.
///
/// Implementors only provide [`show`](Notify::show); the variant shorthands
/// are thin wrappers that fix the variant before delegating to it.
pub trait Notify {
    /// What `show` hands back: the new id, or how a missing toaster is reported.
    type Output;

    fn show(&self, options: ToastOptions) -> Self::Output;

    fn success(&self, message: impl Into<String>) -> Self::Output {
        self.show(ToastOptions::success(message))
    }

    fn error(&self, message: impl Into<String>) -> Self::Output {
        self.show(ToastOptions::error(message))
    }

    fn warning(&self, message: impl Into<String>) -> Self::Output {
        self.show(ToastOptions::warning(message))
    }

    fn info(&self, message: impl Into<String>) -> Self::Output {
        self.show(ToastOptions::info(message))
    }

    /// Shows prepared `options` as a success toast, keeping every other field.
    fn success_with(&self, options: ToastOptions) -> Self::Output {
        self.show(options.variant(Variant::Success))
    }

    fn error_with(&self, options: ToastOptions) -> Self::Output {
        self.show(options.variant(Variant::Error))
    }

    fn warning_with(&self, options: ToastOptions) -> Self::Output {
        self.show(options.variant(Variant::Warning))
    }

    fn info_with(&self, options: ToastOptions) -> Self::Output {
        self.show(options.variant(Variant::Info))
    }
}
