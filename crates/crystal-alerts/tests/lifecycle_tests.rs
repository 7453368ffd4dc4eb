//! End-to-end lifecycle tests for the alert queue, driven by a manual clock.

use std::time::Duration;

use crystal_alerts::{AlertCategory, AlertId, AlertQueue, AlertTimings, ManualClock, Phase};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

struct Harness {
    queue: AlertQueue<ManualClock>,
    clock: ManualClock,
}

impl Harness {
    fn new() -> Self {
        let clock = ManualClock::new();
        Self {
            queue: AlertQueue::with_clock(AlertTimings::default(), clock.clone()),
            clock,
        }
    }

    /// Move to `at` ms after the start and fire due timers.
    fn run_to(&mut self, at: u64) {
        self.clock.set_elapsed(ms(at));
        self.queue.tick();
    }

    fn phase(&self, id: AlertId) -> Option<Phase> {
        self.queue.get(id).map(|alert| alert.phase())
    }

    fn ids(&self) -> Vec<AlertId> {
        self.queue.alerts().iter().map(|alert| alert.id()).collect()
    }
}

#[test]
fn insertion_order_matches_call_order_and_ids_are_distinct() {
    let mut h = Harness::new();
    let ids: Vec<_> = (0..20)
        .map(|n| {
            let duration = if n % 3 == 0 { Duration::ZERO } else { ms(4000) };
            h.queue.add_alert(format!("alert {n}"), AlertCategory::Info, duration)
        })
        .collect();

    assert_eq!(h.ids(), ids);

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());

    // Order survives phase changes.
    h.run_to(50);
    assert_eq!(h.ids(), ids);
}

#[test]
fn sticky_alert_is_never_auto_removed() {
    let mut h = Harness::new();
    let id = h.queue.add_alert("sticky", AlertCategory::Warning, Duration::ZERO);

    for at in [10, 4_000, 60_000, 3_600_000] {
        h.run_to(at);
        assert_eq!(h.phase(id), Some(Phase::Visible), "at {at}ms");
    }
}

#[test]
fn timed_alert_is_visible_between_enter_delay_and_duration() {
    let mut h = Harness::new();
    let id = h.queue.add_alert("timed", AlertCategory::Info, ms(1000));

    h.run_to(10);
    for at in [11, 100, 500, 999] {
        h.run_to(at);
        assert_eq!(h.phase(id), Some(Phase::Visible), "at {at}ms");
    }

    h.run_to(1000);
    assert_eq!(h.phase(id), Some(Phase::Exiting));
    h.run_to(1300);
    assert_eq!(h.phase(id), None);
}

#[test]
fn double_remove_matches_single_remove() {
    let mut once = Harness::new();
    let mut twice = Harness::new();
    let a = once.queue.add_alert("x", AlertCategory::Info, Duration::ZERO);
    let b = twice.queue.add_alert("x", AlertCategory::Info, Duration::ZERO);

    once.run_to(40);
    twice.run_to(40);
    once.queue.remove_alert(a);
    twice.queue.remove_alert(b);
    twice.queue.remove_alert(b);

    for at in [41, 200, 339, 340] {
        once.run_to(at);
        twice.run_to(at);
        assert_eq!(once.phase(a), twice.phase(b), "at {at}ms");
        assert_eq!(once.queue.len(), twice.queue.len());
    }
    assert_eq!(once.phase(a), None);
}

#[test]
fn remove_before_enter_never_returns_to_entering() {
    let mut h = Harness::new();
    let id = h.queue.add_alert("early", AlertCategory::Info, ms(4000));

    h.run_to(3);
    h.queue.remove_alert(id);

    let mut seen = vec![h.phase(id)];
    for at in (4..=400).step_by(3) {
        h.run_to(at);
        seen.push(h.phase(id));
    }

    assert!(seen
        .iter()
        .flatten()
        .all(|phase| *phase == Phase::Exiting));
    assert_eq!(seen.last(), Some(&None));
}

#[test]
fn manual_dismiss_then_stale_auto_dismiss() {
    let mut h = Harness::new();
    let id = h.queue.add_alert("A", AlertCategory::Info, ms(100));

    h.run_to(50);
    assert!(h.queue.remove_alert(id));

    h.run_to(51);
    assert_eq!(h.phase(id), Some(Phase::Exiting));

    // The 100ms auto-dismiss fires here and must do nothing.
    h.run_to(100);
    assert_eq!(h.phase(id), Some(Phase::Exiting));
    h.run_to(349);
    assert_eq!(h.phase(id), Some(Phase::Exiting));

    h.run_to(351);
    assert_eq!(h.phase(id), None);
    assert!(h.queue.is_empty());
}

#[test]
fn three_sticky_alerts_stay_in_order_until_removed() {
    let mut h = Harness::new();
    let ids: Vec<_> = ["one", "two", "three"]
        .into_iter()
        .map(|text| h.queue.add_alert(text, AlertCategory::Info, Duration::ZERO))
        .collect();

    h.run_to(86_400_000);
    assert_eq!(h.ids(), ids);

    h.queue.remove_alert(ids[1]);
    h.run_to(86_400_300);
    assert_eq!(h.ids(), vec![ids[0], ids[2]]);
}

#[test]
fn concurrent_alerts_keep_independent_timers() {
    let mut h = Harness::new();
    let short = h.queue.add_alert("short", AlertCategory::Info, ms(200));
    h.run_to(100);
    let long = h.queue.add_alert("long", AlertCategory::Error, ms(1000));

    h.run_to(200);
    assert_eq!(h.phase(short), Some(Phase::Exiting));
    assert_eq!(h.phase(long), Some(Phase::Visible));

    h.run_to(500);
    assert_eq!(h.phase(short), None);
    assert_eq!(h.phase(long), Some(Phase::Visible));

    h.run_to(1100);
    assert_eq!(h.phase(long), Some(Phase::Exiting));
    h.run_to(1400);
    assert!(h.queue.is_empty());
}

#[test]
fn custom_timings_are_honoured() {
    let clock = ManualClock::new();
    let timings = AlertTimings {
        enter_delay: ms(50),
        exit_window: ms(20),
        default_duration: ms(500),
    };
    let mut queue = AlertQueue::with_clock(timings, clock.clone());
    let id = queue.notify("custom", AlertCategory::Info);

    clock.set_elapsed(ms(49));
    queue.tick();
    assert_eq!(queue.get(id).map(|a| a.phase()), Some(Phase::Pending));

    clock.set_elapsed(ms(50));
    queue.tick();
    assert_eq!(queue.get(id).map(|a| a.phase()), Some(Phase::Visible));

    clock.set_elapsed(ms(520));
    queue.tick();
    assert!(queue.get(id).is_none());
}

#[test]
fn unrepresentable_duration_never_auto_dismisses() {
    let mut h = Harness::new();
    let id = h.queue.add_alert("forever", AlertCategory::Warning, Duration::MAX);

    h.run_to(10);
    assert_eq!(h.phase(id), Some(Phase::Visible));
    h.run_to(10_000_000);
    assert_eq!(h.phase(id), Some(Phase::Visible));

    // Manual dismissal still works.
    assert!(h.queue.remove_alert(id));
    h.run_to(10_000_300);
    assert_eq!(h.phase(id), None);
}

#[test]
fn unrepresentable_timings_leave_alert_in_place() {
    let clock = ManualClock::new();
    let timings = AlertTimings {
        enter_delay: Duration::MAX,
        exit_window: Duration::MAX,
        default_duration: ms(100),
    };
    let mut queue = AlertQueue::with_clock(timings, clock.clone());
    let id = queue.notify("stuck", AlertCategory::Info);

    clock.set_elapsed(ms(50));
    queue.tick();
    assert_eq!(queue.get(id).map(|a| a.phase()), Some(Phase::Pending));

    clock.set_elapsed(ms(100));
    queue.tick();
    assert_eq!(queue.get(id).map(|a| a.phase()), Some(Phase::Exiting));

    clock.set_elapsed(ms(1_000_000));
    queue.tick();
    assert_eq!(queue.get(id).map(|a| a.phase()), Some(Phase::Exiting));
    assert_eq!(queue.next_deadline(), None);
}
