// SPDX-License-Identifier: MPL-2.0
//! Demo application driving a [`Toaster`] from buttons.
//!
//! The `App` wires the toast engine to the Iced runtime: it resolves the
//! persisted configuration, mounts one toaster on a shared bridge, forwards
//! overlay messages back into it and keeps a diagnostics collector fed.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, ToasterConfig};
use crate::diagnostics::{DiagnosticsCollector, WarningEvent, WarningType};
use crate::toast::{
    CloseReason, MountBridge, Notify, ToastContext, ToastId, ToastOptions, ToastUpdate, Toaster,
    Variant,
};
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    toaster: Toaster,
    /// Context with no provider, used to demonstrate the degraded path.
    detached: ToastContext,
    diagnostics: DiagnosticsCollector,
    /// Most recently shown toast.
    latest: Option<ToastId>,
    shown: u32,
    /// Toasts whose `on_close` has fired, shared with the callbacks.
    closed: Rc<Cell<u32>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toaster", &self.toaster)
            .field("shown", &self.shown)
            .field("closed", &self.closed.get())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a reusable boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn variant_label(variant: Variant) -> &'static str {
    match variant {
        Variant::Default => "Notice",
        Variant::Info => "Info",
        Variant::Success => "Success",
        Variant::Warning => "Warning",
        Variant::Error => "Error",
    }
}

impl App {
    /// Resolves configuration and mounts the toaster.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir);
        let mut toaster_config = ToasterConfig::from_config(&config);
        if let Some(limit) = flags.limit {
            toaster_config = toaster_config.with_limit(limit);
        }

        let mut diagnostics = DiagnosticsCollector::default();
        let toaster = Toaster::new(toaster_config, MountBridge::shared())
            .with_diagnostics(diagnostics.handle());
        let detached = ToastContext::detached().with_diagnostics(diagnostics.handle());

        if let Some(warning) = config_warning {
            diagnostics.log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                warning.clone(),
            ));
            toaster.show(ToastOptions::warning(warning).title("Configuration"));
        }

        let app = Self {
            toaster,
            detached,
            diagnostics,
            latest: None,
            shown: 0,
            closed: Rc::new(Cell::new(0)),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.toaster.is_empty() {
            "Iced Toast".to_string()
        } else {
            format!("Iced Toast ({})", self.toaster.len())
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toaster.subscription().map(Message::Toast)
    }

    /// Options for the next demo toast, counting its closure.
    fn next_options(&mut self, variant: Variant) -> ToastOptions {
        self.shown += 1;
        let closed = Rc::clone(&self.closed);
        ToastOptions::new(format!("Toast #{} was raised from the demo.", self.shown))
            .title(variant_label(variant))
            .variant(variant)
            .on_close(move |id: &ToastId, reason: CloseReason| {
                log::debug!("demo toast {id} closed: {reason:?}");
                closed.set(closed.get() + 1);
            })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(message) => self.toaster.handle_message(&message),
            Message::Show(variant) => {
                let options = self.next_options(variant);
                self.latest = Some(self.toaster.show(options));
            }
            Message::ShowPersistent => {
                let options = self.next_options(Variant::Info).persistent();
                self.latest = Some(self.toaster.show(options));
            }
            Message::UpdateLatest => {
                if let Some(id) = &self.latest {
                    let duration = self.toaster.config().default_duration;
                    self.toaster.update(
                        id,
                        ToastUpdate::new()
                            .message("Updated in place; the countdown restarted.")
                            .duration(duration),
                    );
                }
            }
            Message::DismissLatest => {
                if let Some(id) = self.latest.take() {
                    self.toaster.dismiss(&id);
                }
            }
            Message::DismissAll => {
                self.latest = None;
                self.toaster.dismiss_all();
            }
            Message::ShowDetached => {
                self.detached.warning("No toaster is mounted for this call.");
            }
        }

        self.diagnostics.process_pending();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn app(limit: Option<usize>) -> (App, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create temp dir");
        let (app, _) = App::new(Flags {
            config_dir: Some(dir.path().to_path_buf()),
            limit,
        });
        (app, dir)
    }

    #[test]
    fn show_buttons_raise_toasts() {
        let (mut app, _dir) = app(None);

        let _ = app.update(Message::Show(Variant::Success));
        let _ = app.update(Message::ShowPersistent);

        assert_eq!(app.toaster.len(), 2);
        assert_eq!(app.title(), "Iced Toast (2)");
    }

    #[test]
    fn limit_flag_overrides_config() {
        let (mut app, _dir) = app(Some(2));

        for _ in 0..3 {
            let _ = app.update(Message::Show(Variant::Info));
        }

        assert_eq!(app.toaster.len(), 2);
        assert_eq!(app.closed.get(), 1);
    }

    #[test]
    fn dismiss_all_counts_closures() {
        let (mut app, _dir) = app(None);
        let _ = app.update(Message::Show(Variant::Error));
        let _ = app.update(Message::Show(Variant::Warning));

        let _ = app.update(Message::DismissAll);

        assert!(app.toaster.is_empty());
        assert_eq!(app.closed.get(), 2);
        assert_eq!(app.title(), "Iced Toast");
    }

    #[test]
    fn detached_call_is_recorded_as_warning() {
        let (mut app, _dir) = app(None);

        let _ = app.update(Message::ShowDetached);

        assert!(app.toaster.is_empty());
        assert_eq!(app.diagnostics.warning_count(), 1);
    }

    #[test]
    fn update_latest_without_toast_is_harmless() {
        let (mut app, _dir) = app(None);
        let _ = app.update(Message::UpdateLatest);
        let _ = app.update(Message::DismissLatest);
        assert!(app.toaster.is_empty());
    }
}
