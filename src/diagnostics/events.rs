// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for toast activity tracking.
//!
//! This module defines the events the toast engine reports while it runs:
//! lifecycle transitions of individual toasts and warnings about degraded
//! call sites.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::toast::{CloseReason, Variant};

/// Lifecycle transitions of a single toast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ToastEvent {
    /// A toast was admitted to the queue.
    Shown {
        id: String,
        variant: Variant,
        /// Whether the toast never auto-expires.
        persistent: bool,
    },

    /// A toast's fields were merged from an update.
    Updated {
        id: String,
        /// Whether the update restarted the countdown.
        restarted: bool,
    },

    /// Hover suspended the countdown.
    Paused { id: String },

    /// The countdown resumed after a pause.
    Resumed { id: String },

    /// The toast left the queue.
    Closed { id: String, reason: CloseReason },
}

/// Categories of warnings the toast engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A toast operation was issued with no live provider in scope.
    MissingProvider,
    /// A configuration issue was detected.
    ConfigurationIssue,
    /// Other warning type not covered by specific categories.
    Other,
}

/// A non-critical issue that degraded an operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Toast lifecycle transition.
    Toast { event: ToastEvent },

    /// Non-critical warning.
    Warning { event: WarningEvent },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Toast {
            event: ToastEvent::Paused { id: "t".into() },
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn toast_event_serializes_with_tags() {
        let kind = DiagnosticEventKind::Toast {
            event: ToastEvent::Closed {
                id: "toast-1".into(),
                reason: CloseReason::Evicted,
            },
        };

        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"toast\""));
        assert!(json.contains("\"event\":\"closed\""));
        assert!(json.contains("\"reason\":\"evicted\""));
    }

    #[test]
    fn warning_event_deserializes_from_json() {
        let json = r#"{"type":"warning","event":{"warning_type":"missing_provider","message":"no toaster"}}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        match kind {
            DiagnosticEventKind::Warning { event } => {
                assert_eq!(event.warning_type, WarningType::MissingProvider);
                assert_eq!(event.message, "no toaster");
            }
            DiagnosticEventKind::Toast { .. } => panic!("expected Warning variant"),
        }
    }
}
