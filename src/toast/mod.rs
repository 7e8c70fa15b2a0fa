// SPDX-License-Identifier: MPL-2.0
//! Toast notification engine.
//!
//! Consumers raise transient messages through a [`Toaster`] (or a
//! [`ToastHandle`]/[`ToastContext`] derived from it). Each toast carries its
//! own pausable countdown; the queue keeps at most `limit` of them, evicting
//! the oldest on overflow, and every toaster renders into one attachment
//! shared through a [`MountBridge`].
//!
//! ```ignore
//! let bridge = MountBridge::shared();
//! let toaster = Toaster::new(ToasterConfig::default(), bridge);
//! let id = toaster.show(ToastOptions::success("Saved").title("Settings"));
//! toaster.update(&id, ToastUpdate::new().message("Saved to disk"));
//! ```

mod clock;
mod distributor;
mod id;
mod message;
mod mount;
mod notify;
mod queue;
mod record;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use distributor::{ToastContext, ToastHandle, Toaster};
pub use id::ToastId;
pub use message::Message;
pub use mount::{Attachment, AttachmentHandle, AttachmentId, MountBridge, SharedMountBridge};
pub use notify::Notify;
pub use queue::{TickOutcome, ToastQueue};
pub use record::{
    ClickCallback, CloseCallback, CloseReason, ToastOptions, ToastRecord, ToastSnapshot,
    ToastUpdate, Variant,
};
pub use timer::{LifecycleState, TimerStep, ToastTimer};
