// SPDX-License-Identifier: MPL-2.0
//! Messages the toast overlay feeds back into its `Toaster`.

use super::id::ToastId;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Periodic tick advancing every countdown.
    Tick(Instant),
    /// The close button of a toast was pressed.
    Dismiss(ToastId),
    /// The body of a toast was clicked.
    Clicked(ToastId),
    /// The pointer moved over a toast.
    PointerEntered(ToastId),
    /// The pointer left a toast.
    PointerLeft(ToastId),
}
