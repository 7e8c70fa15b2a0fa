// SPDX-License-Identifier: MPL-2.0
//! Toast records and the options used to create and update them.

use super::id::ToastId;
use super::timer::{LifecycleState, TimerStep, ToastTimer};
use crate::config::ToasterConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Invoked exactly once when a toast leaves the queue.
pub type CloseCallback = Rc<dyn Fn(&ToastId, CloseReason)>;

/// Invoked each time a toast is clicked.
pub type ClickCallback = Rc<dyn Fn(&ToastId)>;

/// Visual flavor of a toast. Selects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Default,
    Info,
    Success,
    Warning,
    Error,
}

/// Why a toast left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// Its countdown ran out.
    Expired,
    /// `dismiss` was called for it.
    Dismissed,
    /// `dismiss_all` cleared the queue.
    DismissedAll,
    /// A newer toast pushed it out of a full queue.
    Evicted,
    /// Its provider was torn down.
    Unmounted,
}

/// Optional fields shared by [`ToastOptions`] and [`ToastUpdate`].
///
/// `None` means "provider default" when showing and "unchanged" when updating.
#[derive(Clone, Default)]
struct ToastFields {
    title: Option<String>,
    variant: Option<Variant>,
    duration: Option<Duration>,
    dismissible: Option<bool>,
    show_progress: Option<bool>,
    pause_on_hover: Option<bool>,
    class_name: Option<String>,
    on_close: Option<CloseCallback>,
    on_click: Option<ClickCallback>,
}

impl fmt::Debug for ToastFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastFields")
            .field("title", &self.title)
            .field("variant", &self.variant)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

/// Builder setters over a `fields: ToastFields` member.
macro_rules! field_setters {
    ($target:ty) => {
        impl $target {
            #[must_use]
            pub fn title(mut self, title: impl Into<String>) -> Self {
                self.fields.title = Some(title.into());
                self
            }

            #[must_use]
            pub fn variant(mut self, variant: Variant) -> Self {
                self.fields.variant = Some(variant);
                self
            }

            /// Sets the auto-dismiss duration. Zero means the toast never expires.
            #[must_use]
            pub fn duration(mut self, duration: Duration) -> Self {
                self.fields.duration = Some(duration);
                self
            }

            /// Shorthand for a zero duration.
            #[must_use]
            pub fn persistent(self) -> Self {
                self.duration(Duration::ZERO)
            }

            #[must_use]
            pub fn dismissible(mut self, dismissible: bool) -> Self {
                self.fields.dismissible = Some(dismissible);
                self
            }

            #[must_use]
            pub fn show_progress(mut self, show_progress: bool) -> Self {
                self.fields.show_progress = Some(show_progress);
                self
            }

            #[must_use]
            pub fn pause_on_hover(mut self, pause_on_hover: bool) -> Self {
                self.fields.pause_on_hover = Some(pause_on_hover);
                self
            }

            /// Opaque styling hook forwarded to renderers.
            #[must_use]
            pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
                self.fields.class_name = Some(class_name.into());
                self
            }

            #[must_use]
            pub fn on_close(mut self, callback: impl Fn(&ToastId, CloseReason) + 'static) -> Self {
                self.fields.on_close = Some(Rc::new(callback));
                self
            }

            #[must_use]
            pub fn on_click(mut self, callback: impl Fn(&ToastId) + 'static) -> Self {
                self.fields.on_click = Some(Rc::new(callback));
                self
            }
        }
    };
}

/// Everything a caller can specify when showing a toast.
///
/// Unset behavior flags and duration fall back to the provider's
/// [`ToasterConfig`].
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    message: String,
    fields: ToastFields,
}

impl ToastOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: ToastFields::default(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).variant(Variant::Error)
    }
}

field_setters!(ToastOptions);

/// A partial set of fields merged into an existing toast.
///
/// Only supplied fields change. Supplying a duration restarts the countdown.
#[derive(Debug, Clone, Default)]
pub struct ToastUpdate {
    message: Option<String>,
    fields: ToastFields,
}

impl ToastUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns true if applying this update restarts the countdown.
    #[must_use]
    pub fn restarts_timer(&self) -> bool {
        self.fields.duration.is_some()
    }
}

field_setters!(ToastUpdate);

/// One queued notification and its runtime timer state.
pub struct ToastRecord {
    id: ToastId,
    title: Option<String>,
    message: String,
    variant: Variant,
    dismissible: bool,
    show_progress: bool,
    pause_on_hover: bool,
    class_name: Option<String>,
    on_close: Option<CloseCallback>,
    on_click: Option<ClickCallback>,
    timer: ToastTimer,
    close_reason: Option<CloseReason>,
}

impl ToastRecord {
    /// Builds an active record from caller options and provider defaults.
    pub(crate) fn admit(
        id: ToastId,
        options: ToastOptions,
        defaults: &ToasterConfig,
        now: Instant,
    ) -> Self {
        let ToastOptions { message, fields } = options;
        let duration = fields.duration.unwrap_or(defaults.default_duration);
        Self {
            id,
            title: fields.title,
            message,
            variant: fields.variant.unwrap_or_default(),
            dismissible: fields.dismissible.unwrap_or(defaults.dismissible),
            show_progress: fields.show_progress.unwrap_or(defaults.show_progress),
            pause_on_hover: fields.pause_on_hover.unwrap_or(defaults.pause_on_hover),
            class_name: fields.class_name,
            on_close: fields.on_close,
            on_click: fields.on_click,
            timer: ToastTimer::start(duration, now),
            close_reason: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.timer.duration()
    }

    #[must_use]
    pub fn dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.show_progress
    }

    #[must_use]
    pub fn pause_on_hover(&self) -> bool {
        self.pause_on_hover
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Baseline of the countdown; moves on resume and restart.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.timer.baseline()
    }

    #[must_use]
    pub fn remaining_at_pause(&self) -> Option<Duration> {
        self.timer.remaining_at_pause()
    }

    #[must_use]
    pub fn lifecycle_state(&self) -> LifecycleState {
        self.timer.state()
    }

    #[must_use]
    pub fn close_reason(&self) -> Option<CloseReason> {
        self.close_reason
    }

    #[must_use]
    pub fn timer(&self) -> &ToastTimer {
        &self.timer
    }

    pub(crate) fn on_click(&self) -> Option<ClickCallback> {
        self.on_click.clone()
    }

    /// Shallow-merges an update. Returns true if the countdown restarted.
    pub(crate) fn apply(&mut self, update: ToastUpdate, now: Instant) -> bool {
        let ToastUpdate { message, fields } = update;
        let ToastFields {
            title,
            variant,
            duration,
            dismissible,
            show_progress,
            pause_on_hover,
            class_name,
            on_close,
            on_click,
        } = fields;

        if let Some(title) = title {
            self.title = Some(title);
        }
        if let Some(message) = message {
            self.message = message;
        }
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(dismissible) = dismissible {
            self.dismissible = dismissible;
        }
        if let Some(show_progress) = show_progress {
            self.show_progress = show_progress;
        }
        if let Some(pause_on_hover) = pause_on_hover {
            self.pause_on_hover = pause_on_hover;
        }
        if let Some(class_name) = class_name {
            self.class_name = Some(class_name);
        }
        if on_close.is_some() {
            self.on_close = on_close;
        }
        if on_click.is_some() {
            self.on_click = on_click;
        }

        match duration {
            Some(duration) if self.timer.is_live() => {
                self.timer.restart(duration, now);
                true
            }
            _ => false,
        }
    }

    /// Suspends the countdown if this toast pauses on hover.
    pub(crate) fn pointer_entered(&mut self, now: Instant) -> bool {
        self.pause_on_hover && self.timer.pause(now)
    }

    pub(crate) fn pointer_left(&mut self, now: Instant) -> bool {
        self.timer.resume(now)
    }

    /// Starts the closing window. Returns false if the toast was already closing.
    pub(crate) fn begin_closing(&mut self, reason: CloseReason, now: Instant) -> bool {
        if !self.timer.begin_closing(now) {
            return false;
        }
        self.close_reason = Some(reason);
        true
    }

    /// Tears the toast down immediately. A reason recorded earlier wins.
    pub(crate) fn finish(&mut self, reason: CloseReason) {
        self.close_reason.get_or_insert(reason);
        self.timer.finish();
    }

    /// Advances the timer, recording expiry as the close reason.
    pub(crate) fn poll(&mut self, now: Instant, closing_window: Duration) -> TimerStep {
        let live = self.timer.is_live();
        let step = self.timer.poll(now, closing_window);
        if live && step.expired() {
            self.close_reason = Some(CloseReason::Expired);
        }
        step
    }

    /// Invokes `on_close` if it has not fired yet.
    pub(crate) fn notify_closed(&mut self) {
        let reason = self.close_reason.unwrap_or(CloseReason::Dismissed);
        if let Some(callback) = self.on_close.take() {
            callback(&self.id, reason);
        }
    }

    /// Owned view of the record for renderers.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> ToastSnapshot {
        ToastSnapshot {
            id: self.id.clone(),
            title: self.title.clone(),
            message: self.message.clone(),
            variant: self.variant,
            class_name: self.class_name.clone(),
            dismissible: self.dismissible,
            show_progress: self.show_progress && !self.timer.is_persistent(),
            progress: self.timer.progress(now),
            state: self.timer.state(),
        }
    }
}

impl fmt::Debug for ToastRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRecord")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("variant", &self.variant)
            .field("timer", &self.timer)
            .field("close_reason", &self.close_reason)
            .finish_non_exhaustive()
    }
}

/// Render data for one toast, detached from the engine's borrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSnapshot {
    pub id: ToastId,
    pub title: Option<String>,
    pub message: String,
    pub variant: Variant,
    pub class_name: Option<String>,
    pub dismissible: bool,
    pub show_progress: bool,
    /// Remaining fraction of the countdown in `[0, 1]`.
    pub progress: f32,
    pub state: LifecycleState,
}
