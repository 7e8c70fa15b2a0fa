// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! This module provides pure domain types for the toast queue:
//! - [`ToastLimit`]: Capacity of the toast queue

mod newtypes;

pub use newtypes::{toast_limit_bounds, ToastLimit};
