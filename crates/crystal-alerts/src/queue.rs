//! The alert queue: a live, insertion-ordered collection of alerts whose
//! phases are driven by timers.
//!
//! Every state change goes through [`AlertQueue::advance_phase`], which only
//! applies a transition when the alert still sits in the phase the caller
//! expects. Timers are never cancelled; a timer that lost its race (an enter
//! timer firing after the alert started exiting, an auto-dismiss firing after
//! a manual dismiss) fails that check and does nothing.
//!
//! The queue does not sleep or spawn. The owner calls [`AlertQueue::tick`]
//! from its event loop and can use [`AlertQueue::next_deadline`] to bound how
//! long it waits for input.

use std::time::{Duration, Instant};

use crystal_core::AlertConfig;
use tracing::{debug, trace};

use crate::alert::{Alert, AlertCategory, AlertContent, AlertId, Phase};
use crate::clock::{Clock, SystemClock};
use crate::timer::TimerQueue;

/// Fixed delays of the alert lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTimings {
    /// Insertion to `Entering`
    pub enter_delay: Duration,
    /// `Exiting` to deletion
    pub exit_window: Duration,
    /// Auto-dismiss delay applied by [`AlertQueue::notify`]
    pub default_duration: Duration,
}

impl Default for AlertTimings {
    fn default() -> Self {
        Self::from(&AlertConfig::default())
    }
}

impl From<&AlertConfig> for AlertTimings {
    fn from(config: &AlertConfig) -> Self {
        Self {
            enter_delay: config.enter_delay(),
            exit_window: config.exit_window(),
            default_duration: config.default_duration(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertTimer {
    /// `Pending -> Entering`
    Enter(AlertId),
    /// `Entering -> Visible`
    Settle(AlertId),
    /// Start the exit sequence
    AutoDismiss(AlertId),
    /// `Exiting -> Removed`
    Purge(AlertId),
}

/// Owner of the live alert collection.
#[derive(Debug)]
pub struct AlertQueue<C: Clock = SystemClock> {
    /// Live alerts, oldest first
    alerts: Vec<Alert>,
    timers: TimerQueue<AlertTimer>,
    timings: AlertTimings,
    clock: C,
}

impl Default for AlertQueue<SystemClock> {
    fn default() -> Self {
        Self::new(AlertTimings::default())
    }
}

impl AlertQueue<SystemClock> {
    /// Create a queue backed by the system clock.
    pub fn new(timings: AlertTimings) -> Self {
        Self::with_clock(timings, SystemClock)
    }
}

impl<C: Clock> AlertQueue<C> {
    /// Create a queue reading time from `clock`.
    pub fn with_clock(timings: AlertTimings, clock: C) -> Self {
        Self {
            alerts: Vec::new(),
            timers: TimerQueue::new(),
            timings,
            clock,
        }
    }

    /// Current time on the queue's clock.
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Insert a new alert and schedule its lifecycle.
    ///
    /// A zero `duration` keeps the alert until [`remove_alert`](Self::remove_alert)
    /// is called for it.
    pub fn add_alert(
        &mut self,
        content: impl Into<AlertContent>,
        category: AlertCategory,
        duration: Duration,
    ) -> AlertId {
        let now = self.clock.now();
        let id = self.fresh_id();

        self.alerts
            .push(Alert::new(id, content.into(), category, duration, now));

        // Both land on the same deadline; scheduling order makes Enter fire first.
        // A deadline past what `Instant` can represent is never reached.
        if let Some(enter_at) = now.checked_add(self.timings.enter_delay) {
            self.timers.schedule(enter_at, AlertTimer::Enter(id));
            self.timers.schedule(enter_at, AlertTimer::Settle(id));
        }

        if !duration.is_zero() {
            if let Some(dismiss_at) = now.checked_add(duration) {
                self.timers.schedule(dismiss_at, AlertTimer::AutoDismiss(id));
            }
        }

        debug!(
            alert_id = %id,
            category = category.label(),
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            live = self.alerts.len(),
            "alert added"
        );
        id
    }

    /// Insert an alert with the configured default duration.
    pub fn notify(&mut self, content: impl Into<AlertContent>, category: AlertCategory) -> AlertId {
        let duration = self.timings.default_duration;
        self.add_alert(content, category, duration)
    }

    /// Start the exit sequence for `id`.
    ///
    /// Unknown ids and alerts already exiting are ignored. Returns whether an
    /// exit sequence was started by this call.
    pub fn remove_alert(&mut self, id: AlertId) -> bool {
        let now = self.clock.now();
        self.begin_exit(id, now)
    }

    /// Fire every timer that is due. Returns whether any alert changed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;
        while let Some((deadline, timer)) = self.timers.pop_due(now) {
            changed |= self.fire(timer, deadline);
        }
        changed
    }

    /// Earliest instant at which [`tick`](Self::tick) may have work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Live alerts in insertion order.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id() == id)
    }

    /// Most recently added alert that is not already exiting.
    pub fn newest_dismissable(&self) -> Option<AlertId> {
        self.alerts
            .iter()
            .rev()
            .find(|alert| !alert.phase().is_exiting())
            .map(Alert::id)
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    fn fresh_id(&self) -> AlertId {
        loop {
            let id = AlertId::generate();
            if self.get(id).is_none() {
                return id;
            }
        }
    }

    fn fire(&mut self, timer: AlertTimer, at: Instant) -> bool {
        match timer {
            AlertTimer::Enter(id) => self.advance_phase(id, Phase::Pending, Phase::Entering, at),
            AlertTimer::Settle(id) => self.advance_phase(id, Phase::Entering, Phase::Visible, at),
            AlertTimer::AutoDismiss(id) => self.begin_exit(id, at),
            AlertTimer::Purge(id) => self.advance_phase(id, Phase::Exiting, Phase::Removed, at),
        }
    }

    fn begin_exit(&mut self, id: AlertId, at: Instant) -> bool {
        let Some(current) = self.get(id).map(Alert::phase) else {
            trace!(alert_id = %id, "exit requested for unknown alert");
            return false;
        };
        if current.is_exiting() {
            trace!(alert_id = %id, "exit already in progress");
            return false;
        }
        if !self.advance_phase(id, current, Phase::Exiting, at) {
            return false;
        }
        if let Some(purge_at) = at.checked_add(self.timings.exit_window) {
            self.timers.schedule(purge_at, AlertTimer::Purge(id));
        }
        true
    }

    /// Move `id` from `expected` to `next`, or do nothing if the alert is gone
    /// or no longer in `expected`. Reaching `Removed` deletes the alert.
    fn advance_phase(&mut self, id: AlertId, expected: Phase, next: Phase, at: Instant) -> bool {
        debug_assert!(next > expected, "phase transitions only move forward");

        let Some(index) = self.alerts.iter().position(|alert| alert.id() == id) else {
            trace!(alert_id = %id, %expected, %next, "stale timer: alert gone");
            return false;
        };

        let actual = self.alerts[index].phase();
        if actual != expected {
            trace!(alert_id = %id, %expected, %actual, %next, "stale timer: phase moved on");
            return false;
        }

        if next == Phase::Removed {
            self.alerts.remove(index);
        } else {
            self.alerts[index].set_phase(next, at);
        }

        debug!(alert_id = %id, from = %expected, to = %next, "alert phase advanced");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn queue() -> (AlertQueue<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (AlertQueue::with_clock(AlertTimings::default(), clock.clone()), clock)
    }

    fn phase_at(queue: &mut AlertQueue<ManualClock>, clock: &ManualClock, at: u64, id: AlertId) -> Option<Phase> {
        clock.set_elapsed(ms(at));
        queue.tick();
        queue.get(id).map(Alert::phase)
    }

    #[test]
    fn test_add_alert_starts_pending() {
        let (mut queue, _clock) = queue();
        let id = queue.add_alert("hello", AlertCategory::Info, ms(4000));

        assert_eq!(queue.len(), 1);
        let alert = queue.get(id).unwrap();
        assert_eq!(alert.phase(), Phase::Pending);
        assert_eq!(alert.content().headline(), "hello");
        assert_eq!(alert.category(), AlertCategory::Info);
    }

    #[test]
    fn test_enter_delay_then_visible() {
        let (mut queue, clock) = queue();
        let id = queue.add_alert("hello", AlertCategory::Info, ms(4000));

        assert_eq!(phase_at(&mut queue, &clock, 9, id), Some(Phase::Pending));
        assert_eq!(phase_at(&mut queue, &clock, 10, id), Some(Phase::Visible));
        assert_eq!(queue.get(id).unwrap().phase_since(), clock.now());
    }

    #[test]
    fn test_auto_dismiss_lifecycle() {
        let (mut queue, clock) = queue();
        let id = queue.add_alert("bye", AlertCategory::Info, ms(4000));

        assert_eq!(phase_at(&mut queue, &clock, 3999, id), Some(Phase::Visible));
        assert_eq!(phase_at(&mut queue, &clock, 4000, id), Some(Phase::Exiting));
        assert_eq!(phase_at(&mut queue, &clock, 4299, id), Some(Phase::Exiting));
        assert_eq!(phase_at(&mut queue, &clock, 4300, id), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_coarse_tick_uses_timer_deadlines() {
        let (mut queue, clock) = queue();
        let id = queue.add_alert("late", AlertCategory::Info, ms(100));

        // One tick long after everything was due still lands every step.
        clock.set_elapsed(ms(1000));
        assert!(queue.tick());
        assert!(queue.get(id).is_none());
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut queue, clock) = queue();
        let id = queue.add_alert("twice", AlertCategory::Error, Duration::ZERO);
        phase_at(&mut queue, &clock, 20, id);

        assert!(queue.remove_alert(id));
        assert!(!queue.remove_alert(id));
        assert_eq!(queue.get(id).unwrap().phase(), Phase::Exiting);

        // Exit window counts from the first call only.
        assert_eq!(phase_at(&mut queue, &clock, 319, id), Some(Phase::Exiting));
        assert_eq!(phase_at(&mut queue, &clock, 320, id), None);
        assert!(!queue.remove_alert(id));
    }

    #[test]
    fn test_remove_before_enter_preempts() {
        let (mut queue, clock) = queue();
        let id = queue.add_alert("quick", AlertCategory::Info, ms(4000));

        clock.set_elapsed(ms(5));
        assert!(queue.remove_alert(id));
        assert_eq!(queue.get(id).unwrap().phase(), Phase::Exiting);

        // The enter and settle timers fire but must not rewind the alert.
        assert_eq!(phase_at(&mut queue, &clock, 10, id), Some(Phase::Exiting));
        assert_eq!(phase_at(&mut queue, &clock, 304, id), Some(Phase::Exiting));
        assert_eq!(phase_at(&mut queue, &clock, 305, id), None);
    }

    #[test]
    fn test_duration_shorter_than_enter_delay() {
        let (mut queue, clock) = queue();
        let id = queue.add_alert("blink", AlertCategory::Info, ms(5));

        assert_eq!(phase_at(&mut queue, &clock, 5, id), Some(Phase::Exiting));
        assert_eq!(phase_at(&mut queue, &clock, 10, id), Some(Phase::Exiting));
        assert_eq!(phase_at(&mut queue, &clock, 305, id), None);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let (mut queue, _clock) = queue();
        queue.add_alert("keep", AlertCategory::Info, Duration::ZERO);

        let stranger = AlertId::generate();
        assert!(!queue.remove_alert(stranger));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_notify_uses_default_duration() {
        let (mut queue, clock) = queue();
        let id = queue.notify("default", AlertCategory::Success);
        assert_eq!(queue.get(id).unwrap().duration(), ms(4000));

        assert_eq!(phase_at(&mut queue, &clock, 4000, id), Some(Phase::Exiting));
    }

    #[test]
    fn test_tick_reports_changes() {
        let (mut queue, clock) = queue();
        queue.add_alert("tick", AlertCategory::Info, Duration::ZERO);

        assert!(!queue.tick());
        clock.set_elapsed(ms(10));
        assert!(queue.tick());
        clock.set_elapsed(ms(5000));
        assert!(!queue.tick());
    }

    #[test]
    fn test_newest_dismissable_skips_exiting() {
        let (mut queue, _clock) = queue();
        let first = queue.add_alert("first", AlertCategory::Info, Duration::ZERO);
        let second = queue.add_alert("second", AlertCategory::Info, Duration::ZERO);

        assert_eq!(queue.newest_dismissable(), Some(second));
        queue.remove_alert(second);
        assert_eq!(queue.newest_dismissable(), Some(first));
        queue.remove_alert(first);
        assert_eq!(queue.newest_dismissable(), None);
    }

    #[test]
    fn test_timings_from_config() {
        let config = AlertConfig {
            enter_delay_ms: 20,
            exit_window_ms: 150,
            default_duration_ms: 0,
            animation_ms: 300,
        };
        let timings = AlertTimings::from(&config);
        assert_eq!(timings.enter_delay, ms(20));
        assert_eq!(timings.exit_window, ms(150));
        assert_eq!(timings.default_duration, Duration::ZERO);
    }
}
