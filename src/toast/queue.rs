// SPDX-License-Identifier: MPL-2.0
//! Ordered, capacity-bounded toast storage.
//!
//! The queue never invokes callbacks itself. Every operation that ends a
//! toast hands the finished records back to the caller, which notifies them
//! once it no longer holds any borrow of the queue.

use super::id::ToastId;
use super::record::{CloseReason, ToastRecord, ToastUpdate};
use super::timer::LifecycleState;
use crate::domain::toast::ToastLimit;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Result of advancing every timer in the queue.
#[derive(Debug, Default)]
pub struct TickOutcome {
    /// Toasts whose countdown ran out during this tick.
    pub expired: Vec<ToastId>,
    /// Toasts that finished closing and left the queue.
    pub removed: Vec<ToastRecord>,
}

/// Insertion-ordered toasts, oldest first, never more than `limit`.
#[derive(Debug)]
pub struct ToastQueue {
    records: VecDeque<ToastRecord>,
    limit: ToastLimit,
}

impl ToastQueue {
    #[must_use]
    pub fn new(limit: ToastLimit) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.value()),
            limit,
        }
    }

    #[must_use]
    pub fn limit(&self) -> ToastLimit {
        self.limit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ToastRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&ToastRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn get_mut(&mut self, id: &ToastId) -> Option<&mut ToastRecord> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Appends a record, returning whatever had to be evicted to stay within
    /// the limit (oldest first).
    pub fn admit(&mut self, record: ToastRecord) -> Vec<ToastRecord> {
        self.records.push_back(record);

        let mut evicted = Vec::new();
        while self.limit.is_exceeded_by(self.records.len()) {
            let Some(mut oldest) = self.records.pop_front() else {
                break;
            };
            oldest.finish(CloseReason::Evicted);
            evicted.push(oldest);
        }
        evicted
    }

    /// Merges an update into the matching record.
    ///
    /// Returns `None` for unknown ids, otherwise whether the countdown restarted.
    pub fn update(&mut self, id: &ToastId, update: ToastUpdate, now: Instant) -> Option<bool> {
        self.get_mut(id).map(|record| record.apply(update, now))
    }

    /// Starts the closing window for one record. Unknown or already closing
    /// ids are ignored.
    pub fn begin_dismiss(&mut self, id: &ToastId, now: Instant) -> bool {
        self.get_mut(id)
            .is_some_and(|record| record.begin_closing(CloseReason::Dismissed, now))
    }

    pub fn pause(&mut self, id: &ToastId, now: Instant) -> bool {
        self.get_mut(id)
            .is_some_and(|record| record.pointer_entered(now))
    }

    pub fn resume(&mut self, id: &ToastId, now: Instant) -> bool {
        self.get_mut(id).is_some_and(|record| record.pointer_left(now))
    }

    /// Advances every timer and removes the records that finished closing.
    pub fn tick(&mut self, now: Instant, closing_window: Duration) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        for record in &mut self.records {
            if record.poll(now, closing_window).expired() {
                outcome.expired.push(record.id().clone());
            }
        }

        let mut kept = VecDeque::with_capacity(self.records.len());
        for record in self.records.drain(..) {
            if record.lifecycle_state() == LifecycleState::Removed {
                outcome.removed.push(record);
            } else {
                kept.push_back(record);
            }
        }
        self.records = kept;

        outcome
    }

    /// Removes every record immediately, tagging live ones with `reason`.
    pub fn drain(&mut self, reason: CloseReason) -> Vec<ToastRecord> {
        self.records
            .drain(..)
            .map(|mut record| {
                record.finish(reason);
                record
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToasterConfig;
    use crate::toast::ToastOptions;

    const WINDOW: Duration = Duration::from_millis(300);

    fn admit(queue: &mut ToastQueue, options: ToastOptions, now: Instant) -> (ToastId, Vec<ToastRecord>) {
        let id = ToastId::generate();
        let record = ToastRecord::admit(id.clone(), options, &ToasterConfig::default(), now);
        (id, queue.admit(record))
    }

    fn messages(queue: &ToastQueue) -> Vec<&str> {
        queue.iter().map(ToastRecord::message).collect()
    }

    #[test]
    fn admit_preserves_insertion_order() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(ToastLimit::new(5));

        for message in ["a", "b", "c"] {
            admit(&mut queue, ToastOptions::new(message), now);
        }

        assert_eq!(messages(&queue), vec!["a", "b", "c"]);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(ToastLimit::new(2));

        admit(&mut queue, ToastOptions::new("a"), now);
        admit(&mut queue, ToastOptions::new("b"), now);
        let (_, evicted) = admit(&mut queue, ToastOptions::new("c"), now);

        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].message(), "a");
        assert_eq!(evicted[0].close_reason(), Some(CloseReason::Evicted));
        assert_eq!(evicted[0].lifecycle_state(), LifecycleState::Removed);
        assert_eq!(messages(&queue), vec!["b", "c"]);
    }

    #[test]
    fn update_unknown_id_is_none() {
        let mut queue = ToastQueue::new(ToastLimit::default());
        let result = queue.update(&ToastId::generate(), ToastUpdate::new().message("x"), Instant::now());
        assert!(result.is_none());
    }

    #[test]
    fn dismiss_defers_removal_until_closing_window_elapses() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(ToastLimit::default());
        let (id, _) = admit(&mut queue, ToastOptions::new("a").persistent(), now);

        assert!(queue.begin_dismiss(&id, now));
        assert!(!queue.begin_dismiss(&id, now));
        assert_eq!(
            queue.get(&id).map(ToastRecord::lifecycle_state),
            Some(LifecycleState::Closing)
        );

        assert!(queue.tick(now + Duration::from_millis(299), WINDOW).removed.is_empty());
        let outcome = queue.tick(now + WINDOW, WINDOW);
        assert_eq!(outcome.removed.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn tick_reports_expiry_before_removal() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(ToastLimit::default());
        let (id, _) = admit(&mut queue, ToastOptions::new("a").duration(Duration::from_millis(100)), now);

        let outcome = queue.tick(now + Duration::from_millis(100), WINDOW);
        assert_eq!(outcome.expired, vec![id]);
        assert!(outcome.removed.is_empty());
        assert_eq!(queue.len(), 1);

        let outcome = queue.tick(now + Duration::from_millis(400), WINDOW);
        assert_eq!(outcome.removed.len(), 1);
        assert_eq!(outcome.removed[0].close_reason(), Some(CloseReason::Expired));
    }

    #[test]
    fn late_tick_reports_expiry_and_removal_together() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(ToastLimit::default());
        let (id, _) = admit(&mut queue, ToastOptions::new("a").duration(Duration::from_millis(100)), now);

        let outcome = queue.tick(now + Duration::from_secs(5), WINDOW);

        assert_eq!(outcome.expired, vec![id]);
        assert_eq!(outcome.removed.len(), 1);
        assert_eq!(outcome.removed[0].close_reason(), Some(CloseReason::Expired));
        assert!(queue.is_empty());
    }

    #[test]
    fn drain_keeps_reason_of_closing_records() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(ToastLimit::default());
        let (closing, _) = admit(&mut queue, ToastOptions::new("a"), now);
        admit(&mut queue, ToastOptions::new("b"), now);
        queue.begin_dismiss(&closing, now);

        let drained = queue.drain(CloseReason::DismissedAll);

        assert!(queue.is_empty());
        let reasons: Vec<_> = drained.iter().map(ToastRecord::close_reason).collect();
        assert_eq!(
            reasons,
            vec![Some(CloseReason::Dismissed), Some(CloseReason::DismissedAll)]
        );
    }

    #[test]
    fn pause_and_resume_by_id() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(ToastLimit::default());
        let (id, _) = admit(&mut queue, ToastOptions::new("a"), now);

        assert!(queue.pause(&id, now + Duration::from_millis(100)));
        assert!(!queue.pause(&id, now + Duration::from_millis(200)));
        assert!(queue.resume(&id, now + Duration::from_millis(900)));
        assert!(!queue.resume(&ToastId::generate(), now));
    }
}
