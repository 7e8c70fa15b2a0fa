// SPDX-License-Identifier: MPL-2.0
//! Per-toast countdown and lifecycle state machine.
//!
//! ```text
//! Active ──(hover)──▶ Paused ──(leave)──▶ Active
//!   │                    │
//!   ├──(elapsed ≥ duration, dismiss)──▶ Closing ──(closing window)──▶ Removed
//!   └────────────────────(dismiss)─────▶ Closing
//! ```
//!
//! Remaining time is always `duration - (now - baseline)`. Nothing is ever
//! decremented, so coarse or throttled ticks cannot introduce drift, and
//! pause/resume is a pure rebase of `baseline`.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Active,
    Paused,
    Closing,
    Removed,
}

/// Outcome of advancing a timer to the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStep {
    /// Nothing changed.
    Idle,
    /// The countdown ran out; the toast is now closing.
    Expired,
    /// The closing window elapsed; the toast must be removed.
    Finished,
    /// A late poll observed both the expiry and the end of the closing window.
    ExpiredAndFinished,
}

impl TimerStep {
    /// Returns true if the countdown ran out during this step.
    #[must_use]
    pub fn expired(self) -> bool {
        matches!(self, Self::Expired | Self::ExpiredAndFinished)
    }
}

#[derive(Debug, Clone)]
pub struct ToastTimer {
    duration: Duration,
    baseline: Instant,
    state: LifecycleState,
    remaining_at_pause: Option<Duration>,
    closing_since: Option<Instant>,
}

impl ToastTimer {
    /// Starts an active countdown of `duration` at `now`.
    ///
    /// A zero duration never expires.
    #[must_use]
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            duration,
            baseline: now,
            state: LifecycleState::Active,
            remaining_at_pause: None,
            closing_since: None,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Reference instant the countdown is measured from.
    #[must_use]
    pub fn baseline(&self) -> Instant {
        self.baseline
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[must_use]
    pub fn remaining_at_pause(&self) -> Option<Duration> {
        self.remaining_at_pause
    }

    /// Returns true for toasts that only close on manual dismissal.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// Returns true while the toast has not started closing.
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self.state, LifecycleState::Active | LifecycleState::Paused)
    }

    /// Time counted against the budget so far.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.state, self.remaining_at_pause) {
            (LifecycleState::Paused, Some(remaining)) => self.duration.saturating_sub(remaining),
            _ => now.saturating_duration_since(self.baseline),
        }
    }

    /// Time left before expiry. Persistent toasts report their (zero) duration.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.state {
            _ if self.is_persistent() => self.duration,
            LifecycleState::Active => self.duration.saturating_sub(self.elapsed(now)),
            LifecycleState::Paused => self.remaining_at_pause.unwrap_or(self.duration),
            LifecycleState::Closing | LifecycleState::Removed => Duration::ZERO,
        }
    }

    /// Fraction of the budget left, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.is_persistent() {
            return 1.0;
        }
        (self.remaining(now).as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Freezes the countdown. Returns false if the timer cannot pause.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.state != LifecycleState::Active || self.is_persistent() {
            return false;
        }
        self.remaining_at_pause = Some(self.duration.saturating_sub(self.elapsed(now)));
        self.state = LifecycleState::Paused;
        true
    }

    /// Resumes a paused countdown, rebasing so elapsed time is preserved.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.state != LifecycleState::Paused {
            return false;
        }
        let remaining = self.remaining_at_pause.take().unwrap_or(self.duration);
        let elapsed = self.duration.saturating_sub(remaining);
        self.baseline = now.checked_sub(elapsed).unwrap_or(now);
        self.state = LifecycleState::Active;
        true
    }

    /// Replaces the duration and restarts the countdown from `now`.
    ///
    /// A paused timer stays paused with the full new budget frozen, unless
    /// the new duration is zero, which cannot be paused.
    pub fn restart(&mut self, duration: Duration, now: Instant) {
        self.duration = duration;
        self.baseline = now;
        if self.state == LifecycleState::Paused {
            if duration.is_zero() {
                self.remaining_at_pause = None;
                self.state = LifecycleState::Active;
            } else {
                self.remaining_at_pause = Some(duration);
            }
        }
    }

    /// Enters the closing window. Returns false if already closing or removed.
    pub fn begin_closing(&mut self, now: Instant) -> bool {
        if !self.is_live() {
            return false;
        }
        self.state = LifecycleState::Closing;
        self.remaining_at_pause = None;
        self.closing_since = Some(now);
        true
    }

    /// Marks the timer as torn down.
    pub fn finish(&mut self) {
        self.state = LifecycleState::Removed;
        self.remaining_at_pause = None;
        self.closing_since = None;
    }

    /// Advances the state machine to `now`.
    pub fn poll(&mut self, now: Instant, closing_window: Duration) -> TimerStep {
        let mut step = TimerStep::Idle;

        if self.state == LifecycleState::Active
            && !self.is_persistent()
            && self.elapsed(now) >= self.duration
        {
            // Close from the moment the budget ran out, not from when the
            // tick happened to observe it.
            self.begin_closing(self.baseline + self.duration);
            step = TimerStep::Expired;
        }

        if let (LifecycleState::Closing, Some(since)) = (self.state, self.closing_since) {
            if now.saturating_duration_since(since) >= closing_window {
                self.finish();
                step = if step == TimerStep::Expired {
                    TimerStep::ExpiredAndFinished
                } else {
                    TimerStep::Finished
                };
            }
        }

        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const WINDOW: Duration = Duration::from_millis(300);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_timer_is_active_with_full_budget() {
        let start = Instant::now();
        let timer = ToastTimer::start(ms(1000), start);

        assert_eq!(timer.state(), LifecycleState::Active);
        assert_eq!(timer.remaining(start), ms(1000));
        assert_abs_diff_eq!(timer.progress(start), 1.0);
    }

    #[test]
    fn remaining_is_recomputed_from_baseline() {
        let start = Instant::now();
        let timer = ToastTimer::start(ms(1000), start);

        assert_eq!(timer.remaining(start + ms(250)), ms(750));
        assert_abs_diff_eq!(timer.progress(start + ms(250)), 0.75, epsilon = 1e-4);
        assert_abs_diff_eq!(timer.progress(start + ms(5000)), 0.0);
    }

    #[test]
    fn expires_then_finishes_after_closing_window() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(ms(1000), start);

        assert_eq!(timer.poll(start + ms(999), WINDOW), TimerStep::Idle);
        assert_eq!(timer.poll(start + ms(1000), WINDOW), TimerStep::Expired);
        assert_eq!(timer.state(), LifecycleState::Closing);
        assert_eq!(timer.poll(start + ms(1299), WINDOW), TimerStep::Idle);
        assert_eq!(timer.poll(start + ms(1300), WINDOW), TimerStep::Finished);
        assert_eq!(timer.state(), LifecycleState::Removed);
    }

    #[test]
    fn late_poll_expires_and_finishes_at_once() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(ms(1000), start);

        let step = timer.poll(start + ms(2000), WINDOW);
        assert_eq!(step, TimerStep::ExpiredAndFinished);
        assert!(step.expired());
        assert_eq!(timer.state(), LifecycleState::Removed);
    }

    #[test]
    fn persistent_timer_never_expires_or_pauses() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(Duration::ZERO, start);

        assert_eq!(timer.poll(start + ms(3_600_000), WINDOW), TimerStep::Idle);
        assert!(!timer.pause(start));
        assert_eq!(timer.state(), LifecycleState::Active);
        assert_abs_diff_eq!(timer.progress(start + ms(10)), 1.0);
    }

    #[test]
    fn pause_freezes_remaining_time() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(ms(1000), start);

        assert!(timer.pause(start + ms(400)));
        assert_eq!(timer.state(), LifecycleState::Paused);
        assert_eq!(timer.remaining_at_pause(), Some(ms(600)));
        assert_eq!(timer.remaining(start + ms(10_000)), ms(600));
        assert_eq!(timer.poll(start + ms(10_000), WINDOW), TimerStep::Idle);
    }

    #[test]
    fn resume_preserves_total_budget() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(ms(1000), start);

        timer.pause(start + ms(400));
        let resumed_at = start + ms(60_000);
        assert!(timer.resume(resumed_at));

        assert_eq!(timer.remaining_at_pause(), None);
        assert_eq!(timer.baseline(), resumed_at - ms(400));
        assert_eq!(timer.poll(resumed_at + ms(599), WINDOW), TimerStep::Idle);
        assert_eq!(timer.poll(resumed_at + ms(600), WINDOW), TimerStep::Expired);
    }

    #[test]
    fn resume_without_pause_is_rejected() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(ms(1000), start);
        assert!(!timer.resume(start));
        assert_eq!(timer.baseline(), start);
    }

    #[test]
    fn restart_resets_baseline() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(ms(1000), start);

        timer.restart(ms(2000), start + ms(900));

        assert_eq!(timer.baseline(), start + ms(900));
        assert_eq!(timer.remaining(start + ms(900)), ms(2000));
    }

    #[test]
    fn restart_while_paused_freezes_new_budget() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(ms(1000), start);
        timer.pause(start + ms(500));

        timer.restart(ms(3000), start + ms(700));
        assert_eq!(timer.remaining_at_pause(), Some(ms(3000)));

        timer.restart(Duration::ZERO, start + ms(800));
        assert_eq!(timer.state(), LifecycleState::Active);
        assert_eq!(timer.remaining_at_pause(), None);
    }

    #[test]
    fn begin_closing_is_idempotent() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(ms(1000), start);
        timer.pause(start + ms(100));

        assert!(timer.begin_closing(start + ms(200)));
        assert_eq!(timer.remaining_at_pause(), None);
        assert!(!timer.begin_closing(start + ms(250)));

        assert_eq!(timer.poll(start + ms(499), WINDOW), TimerStep::Idle);
        assert_eq!(timer.poll(start + ms(500), WINDOW), TimerStep::Finished);
    }

    #[test]
    fn closing_timer_cannot_pause() {
        let start = Instant::now();
        let mut timer = ToastTimer::start(ms(1000), start);
        timer.begin_closing(start);

        assert!(!timer.pause(start));
        assert_eq!(timer.remaining(start), Duration::ZERO);
    }
}
