// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting toast activity.
//!
//! This module provides infrastructure for capturing diagnostic events while
//! toasts are shown, storing them in a memory-bounded circular buffer, and
//! exporting them as JSON for inspection.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticsCollector`]: Owner of the buffer, drains the event channel
//! - [`DiagnosticsHandle`]: Cheap, cloneable, non-blocking event sender
//! - [`DiagnosticEvent`]: Timestamped toast transition or warning

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, DEFAULT_BUFFER_CAPACITY};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ToastEvent, WarningEvent, WarningType,
};
