//! # crystal-alerts
//!
//! Toast notification queue for Crystal OSINT.
//!
//! Alerts move through `Pending → Entering → Visible → Exiting → Removed`.
//! Insertion schedules the enter transition and, when a duration is given, an
//! automatic dismissal. Dismissal moves the alert to `Exiting` and deletes it
//! after a fixed exit window. All transitions are driven by timers that the
//! owner fires with [`AlertQueue::tick`].
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use crystal_alerts::{AlertCategory, AlertQueue, AlertTimings, ManualClock, Phase};
//!
//! let clock = ManualClock::new();
//! let mut alerts = AlertQueue::with_clock(AlertTimings::default(), clock.clone());
//!
//! let id = alerts.add_alert("Query executed", AlertCategory::Success, Duration::from_millis(100));
//! clock.advance(Duration::from_millis(10));
//! alerts.tick();
//! assert_eq!(alerts.get(id).map(|a| a.phase()), Some(Phase::Visible));
//!
//! alerts.remove_alert(id);
//! clock.advance(Duration::from_millis(300));
//! alerts.tick();
//! assert!(alerts.is_empty());
//! ```

pub mod alert;
pub mod clock;
pub mod queue;
pub mod timer;

pub use alert::{Alert, AlertCategory, AlertContent, AlertId, Phase};
pub use clock::{Clock, ManualClock, SystemClock};
pub use queue::{AlertQueue, AlertTimings};
pub use timer::TimerQueue;
