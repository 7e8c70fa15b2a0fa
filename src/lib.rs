// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` queues transient, auto-expiring notifications for
//! applications built with the Iced GUI framework.
//!
//! The engine lives in [`toast`]: a capacity-bounded queue whose entries
//! carry pausable countdowns, a [`toast::Toaster`] provider handing out weak
//! handles, and a reference-counted [`toast::MountBridge`] shared by every
//! provider drawing into the same surface. [`ui`] renders the queue with Iced
//! widgets, [`config`] persists defaults in `settings.toml` and
//! [`diagnostics`] records engine activity.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod toast;
pub mod ui;

#[cfg(test)]
mod test_utils;
