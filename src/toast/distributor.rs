// SPDX-License-Identifier: MPL-2.0
//! Provider scope and the handles consumers use to raise toasts.
//!
//! A [`Toaster`] owns the queue for as long as it is mounted. Call sites that
//! should not own it receive a [`ToastHandle`] (a weak reference) or a
//! [`ToastContext`], which additionally tolerates having no provider at all:
//! every operation then degrades to a logged no-op.
//!
//! Callbacks (`on_close`, `on_click`) always run after the engine borrow has
//! been released, so they may freely call back into the toaster.

use super::clock::{Clock, SystemClock};
use super::id::ToastId;
use super::message::Message;
use super::mount::{AttachmentHandle, AttachmentId, SharedMountBridge};
use super::notify::Notify;
use super::queue::ToastQueue;
use super::record::{CloseReason, ToastOptions, ToastRecord, ToastSnapshot, ToastUpdate};
use super::timer::LifecycleState;
use crate::config::ToasterConfig;
use crate::diagnostics::{DiagnosticsHandle, ToastEvent, WarningEvent, WarningType};
use iced::{time, Element, Subscription};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

struct Mount {
    bridge: SharedMountBridge,
    handle: AttachmentHandle,
}

/// Shared state behind a toaster and its handles.
struct Engine {
    queue: ToastQueue,
    config: ToasterConfig,
    clock: Rc<dyn Clock>,
    diagnostics: Option<DiagnosticsHandle>,
    /// `None` once unmounted.
    mount: Option<Mount>,
}

impl Engine {
    fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    fn report(&self, event: ToastEvent) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_toast(event);
        }
    }

    fn sync_mount(&self) {
        if let Some(mount) = &self.mount {
            mount
                .bridge
                .borrow_mut()
                .sync_children(&mount.handle, self.queue.len());
        }
    }

    /// Logs departures; the caller notifies them once the borrow is gone.
    fn report_closed(&self, records: &[ToastRecord]) {
        for record in records {
            let reason = record.close_reason().unwrap_or(CloseReason::Dismissed);
            log::debug!("toast {} closed ({reason:?})", record.id());
            self.report(ToastEvent::Closed {
                id: record.id().to_string(),
                reason,
            });
        }
    }

    fn show(&mut self, options: ToastOptions) -> Option<(ToastId, Vec<ToastRecord>)> {
        if !self.is_mounted() {
            return None;
        }

        let id = ToastId::generate();
        let record = ToastRecord::admit(id.clone(), options, &self.config, self.clock.now());
        log::debug!("toast {id} shown ({:?})", record.variant());
        self.report(ToastEvent::Shown {
            id: id.to_string(),
            variant: record.variant(),
            persistent: record.timer().is_persistent(),
        });

        let evicted = self.queue.admit(record);
        self.report_closed(&evicted);
        self.sync_mount();
        Some((id, evicted))
    }

    fn update(&mut self, id: &ToastId, update: ToastUpdate) {
        let now = self.clock.now();
        if let Some(restarted) = self.queue.update(id, update, now) {
            self.report(ToastEvent::Updated {
                id: id.to_string(),
                restarted,
            });
        }
    }

    fn dismiss(&mut self, id: &ToastId) {
        let now = self.clock.now();
        if self.queue.begin_dismiss(id, now) {
            log::debug!("toast {id} dismissed");
        }
    }

    fn drain(&mut self, reason: CloseReason) -> Vec<ToastRecord> {
        let drained = self.queue.drain(reason);
        self.report_closed(&drained);
        self.sync_mount();
        drained
    }

    fn tick(&mut self) -> Vec<ToastRecord> {
        let outcome = self.queue.tick(self.clock.now(), self.config.closing_window);
        for id in &outcome.expired {
            log::debug!("toast {id} expired");
        }
        if !outcome.removed.is_empty() {
            self.report_closed(&outcome.removed);
            self.sync_mount();
        }
        outcome.removed
    }

    fn pointer_entered(&mut self, id: &ToastId) {
        if self.queue.pause(id, self.clock.now()) {
            self.report(ToastEvent::Paused { id: id.to_string() });
        }
    }

    fn pointer_left(&mut self, id: &ToastId) {
        if self.queue.resume(id, self.clock.now()) {
            self.report(ToastEvent::Resumed { id: id.to_string() });
        }
    }

    fn snapshot(&self) -> Vec<ToastSnapshot> {
        let now = self.clock.now();
        self.queue.iter().map(|record| record.snapshot(now)).collect()
    }

    /// Clears the queue and releases the attachment. Returns `None` if the
    /// engine was already unmounted.
    fn unmount(&mut self) -> Option<Vec<ToastRecord>> {
        let mount = self.mount.take()?;
        let drained = self.queue.drain(CloseReason::Unmounted);
        self.report_closed(&drained);

        let mut bridge = mount.bridge.borrow_mut();
        bridge.sync_children(&mount.handle, 0);
        bridge.release(mount.handle);
        Some(drained)
    }
}

fn notify(records: Vec<ToastRecord>) {
    for mut record in records {
        record.notify_closed();
    }
}

// Operations shared by `Toaster` and `ToastHandle`. Each keeps the mutable
// borrow to a single statement so callbacks run with the engine released.

fn show_on(engine: &RefCell<Engine>, options: ToastOptions) -> Option<ToastId> {
    let (id, evicted) = engine.borrow_mut().show(options)?;
    notify(evicted);
    Some(id)
}

fn dismiss_all_on(engine: &RefCell<Engine>) {
    let drained = engine.borrow_mut().drain(CloseReason::DismissedAll);
    notify(drained);
}

/// Reports an operation that reached no mounted toaster.
fn warn_missing(diagnostics: Option<&DiagnosticsHandle>, operation: &str) {
    log::warn!("toast {operation} ignored: no toaster is mounted in this scope");
    if let Some(diagnostics) = diagnostics {
        diagnostics.log_warning(WarningEvent::new(
            WarningType::MissingProvider,
            format!("{operation} called without a mounted toaster"),
        ));
    }
}

/// Provider scope owning a toast queue.
///
/// Dropping the toaster unmounts it.
pub struct Toaster {
    engine: Rc<RefCell<Engine>>,
    attachment: AttachmentId,
}

impl Toaster {
    /// Creates a toaster driven by the system clock.
    #[must_use]
    pub fn new(config: ToasterConfig, bridge: SharedMountBridge) -> Self {
        Self::with_clock(config, bridge, SystemClock)
    }

    /// Creates a toaster reading time from `clock`.
    #[must_use]
    pub fn with_clock(
        config: ToasterConfig,
        bridge: SharedMountBridge,
        clock: impl Clock + 'static,
    ) -> Self {
        let handle = bridge.borrow_mut().acquire();
        let attachment = handle.attachment();
        log::debug!(
            "toaster mounted (limit {}, attachment {attachment:?})",
            config.limit.value()
        );

        let engine = Engine {
            queue: ToastQueue::new(config.limit),
            config,
            clock: Rc::new(clock),
            diagnostics: None,
            mount: Some(Mount { bridge, handle }),
        };
        Self {
            engine: Rc::new(RefCell::new(engine)),
            attachment,
        }
    }

    /// Reports toast activity to a diagnostics collector.
    #[must_use]
    pub fn with_diagnostics(self, diagnostics: DiagnosticsHandle) -> Self {
        self.engine.borrow_mut().diagnostics = Some(diagnostics);
        self
    }

    #[must_use]
    pub fn config(&self) -> ToasterConfig {
        self.engine.borrow().config
    }

    /// The attachment this toaster renders into.
    #[must_use]
    pub fn attachment(&self) -> AttachmentId {
        self.attachment
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.engine.borrow().is_mounted()
    }

    /// Returns a weak handle for call sites that must not own the toaster.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle {
            engine: Rc::downgrade(&self.engine),
            diagnostics: self.engine.borrow().diagnostics.clone(),
        }
    }

    /// Returns a context bound to this toaster.
    #[must_use]
    pub fn context(&self) -> ToastContext {
        ToastContext::new(Some(self.handle()))
    }

    /// Merges `update` into a queued toast. Unknown ids are ignored.
    pub fn update(&self, id: &ToastId, update: ToastUpdate) {
        self.engine.borrow_mut().update(id, update);
    }

    /// Starts closing a toast. Unknown or already closing ids are ignored.
    pub fn dismiss(&self, id: &ToastId) {
        self.engine.borrow_mut().dismiss(id);
    }

    /// Removes every toast immediately.
    pub fn dismiss_all(&self) {
        dismiss_all_on(&self.engine);
    }

    /// Advances every countdown, removing toasts whose closing window ended.
    pub fn tick(&self) {
        let removed = self.engine.borrow_mut().tick();
        notify(removed);
    }

    pub fn pointer_entered(&self, id: &ToastId) {
        self.engine.borrow_mut().pointer_entered(id);
    }

    pub fn pointer_left(&self, id: &ToastId) {
        self.engine.borrow_mut().pointer_left(id);
    }

    /// Fires the toast's click callback. Returns false for unknown ids.
    pub fn click(&self, id: &ToastId) -> bool {
        let callback = self.engine.borrow().queue.get(id).map(ToastRecord::on_click);
        match callback {
            Some(Some(callback)) => {
                callback(id);
                true
            }
            Some(None) => true,
            None => false,
        }
    }

    /// Owned render data for every queued toast, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ToastSnapshot> {
        self.engine.borrow().snapshot()
    }

    /// Render data for a single toast.
    #[must_use]
    pub fn toast(&self, id: &ToastId) -> Option<ToastSnapshot> {
        let engine = self.engine.borrow();
        let now = engine.clock.now();
        engine.queue.get(id).map(|record| record.snapshot(now))
    }

    #[must_use]
    pub fn state_of(&self, id: &ToastId) -> Option<LifecycleState> {
        self.engine
            .borrow()
            .queue
            .get(id)
            .map(ToastRecord::lifecycle_state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.engine.borrow().queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engine.borrow().queue.is_empty()
    }

    /// Returns whether any toast is queued, which is when ticking matters.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.is_empty()
    }

    /// Tears the provider down: every toast closes as `Unmounted`, handles
    /// go dead and the attachment reference is released. Idempotent.
    pub fn unmount(&self) {
        let drained = self.engine.borrow_mut().unmount();
        if let Some(drained) = drained {
            log::debug!("toaster unmounted ({} toasts dropped)", drained.len());
            notify(drained);
        }
    }

    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Tick(_) => self.tick(),
            Message::Dismiss(id) => self.dismiss(id),
            Message::Clicked(id) => {
                self.click(id);
            }
            Message::PointerEntered(id) => self.pointer_entered(id),
            Message::PointerLeft(id) => self.pointer_left(id),
        }
    }

    /// Periodic tick, active only while toasts are queued.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_toasts() {
            time::every(self.config().tick_interval).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Draws every queued toast in the configured corner.
    pub fn view(&self) -> Element<'_, Message> {
        let config = self.config();
        crate::ui::toast::view_overlay(self.snapshot(), config.position, config.gap)
    }
}

impl Notify for Toaster {
    type Output = ToastId;

    /// Queues a toast and returns its id, or the empty id once unmounted.
    fn show(&self, options: ToastOptions) -> ToastId {
        show_on(&self.engine, options).unwrap_or_else(|| {
            let diagnostics = self.engine.borrow().diagnostics.clone();
            warn_missing(diagnostics.as_ref(), "show");
            ToastId::empty()
        })
    }
}

impl Drop for Toaster {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for Toaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = self.engine.borrow();
        f.debug_struct("Toaster")
            .field("queue", &engine.queue)
            .field("config", &engine.config)
            .field("mounted", &engine.is_mounted())
            .finish_non_exhaustive()
    }
}

/// Weak reference to a toaster.
///
/// Every operation reports whether a mounted toaster received it.
#[derive(Clone)]
pub struct ToastHandle {
    engine: Weak<RefCell<Engine>>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ToastHandle {
    fn engine(&self) -> Option<Rc<RefCell<Engine>>> {
        self.engine
            .upgrade()
            .filter(|engine| engine.borrow().is_mounted())
    }

    /// Returns true while the toaster behind this handle is mounted.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.engine().is_some()
    }

    pub fn update(&self, id: &ToastId, update: ToastUpdate) -> bool {
        self.engine()
            .map(|engine| {
                engine.borrow_mut().update(id, update);
            })
            .is_some()
    }

    pub fn dismiss(&self, id: &ToastId) -> bool {
        self.engine()
            .map(|engine| {
                engine.borrow_mut().dismiss(id);
            })
            .is_some()
    }

    pub fn dismiss_all(&self) -> bool {
        self.engine()
            .map(|engine| dismiss_all_on(&engine))
            .is_some()
    }
}

impl Notify for ToastHandle {
    type Output = Option<ToastId>;

    fn show(&self, options: ToastOptions) -> Option<ToastId> {
        let engine = self.engine()?;
        show_on(&engine, options)
    }
}

impl fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastHandle")
            .field("live", &self.is_live())
            .finish_non_exhaustive()
    }
}

/// The toast API as seen from an arbitrary call site.
///
/// A context may have no provider (it was built detached, or its toaster has
/// been unmounted). Operations then do nothing, `show` returns the empty id,
/// and a warning goes to the log and the diagnostics collector.
#[derive(Debug, Clone, Default)]
pub struct ToastContext {
    handle: Option<ToastHandle>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ToastContext {
    #[must_use]
    pub fn new(handle: Option<ToastHandle>) -> Self {
        let diagnostics = handle.as_ref().and_then(|handle| handle.diagnostics.clone());
        Self {
            handle,
            diagnostics,
        }
    }

    /// A context with no provider.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Reports missing-provider warnings to `diagnostics`.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Returns true if operations reach a mounted toaster.
    #[must_use]
    pub fn has_provider(&self) -> bool {
        self.handle.as_ref().is_some_and(ToastHandle::is_live)
    }

    fn warn_missing(&self, operation: &str) {
        warn_missing(self.diagnostics.as_ref(), operation);
    }

    pub fn update(&self, id: &ToastId, update: ToastUpdate) {
        if !self.handle.as_ref().is_some_and(|handle| handle.update(id, update)) {
            self.warn_missing("update");
        }
    }

    pub fn dismiss(&self, id: &ToastId) {
        if !self.handle.as_ref().is_some_and(|handle| handle.dismiss(id)) {
            self.warn_missing("dismiss");
        }
    }

    pub fn dismiss_all(&self) {
        if !self.handle.as_ref().is_some_and(ToastHandle::dismiss_all) {
            self.warn_missing("dismiss_all");
        }
    }
}

impl Notify for ToastContext {
    type Output = ToastId;

    fn show(&self, options: ToastOptions) -> ToastId {
        match self.handle.as_ref().and_then(|handle| handle.show(options)) {
            Some(id) => id,
            None => {
                self.warn_missing("show");
                ToastId::empty()
            }
        }
    }
}
