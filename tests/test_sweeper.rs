// ABOUTME: Tests for expiry sweep semantics and the fixed-period schedule

use std::time::{Duration, Instant};

use chrono::{NaiveDate, TimeZone, Utc};
use pillbox::app::{sweep, NotificationQueue, Severity, SweepSchedule};
use pillbox::models::MedicineStore;
use pretty_assertions::assert_eq;

const TOAST_WINDOW: Duration = Duration::from_secs(5);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn warning_window() -> chrono::Duration {
    chrono::Duration::days(7)
}

// Noon on Aug 8, 2026 as the sweep instant for all calendar scenarios.
fn noon() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 8, 12, 0, 0).unwrap()
}

#[test]
fn test_expired_medicine_emits_destructive_toast_once() {
    let mut store = MedicineStore::new();
    let mut queue = NotificationQueue::new(TOAST_WINDOW);
    let t0 = Instant::now();

    let id = store.add("Aspirin", date(2026, 8, 7)).unwrap();

    let emitted = sweep(&mut store, &mut queue, noon(), t0, warning_window());
    assert_eq!(emitted, 1);
    assert_eq!(queue.len(), 1);

    let toast = queue.oldest().unwrap();
    assert_eq!(toast.title, "Medicine Expired");
    assert_eq!(toast.severity, Severity::Destructive);
    assert_eq!(toast.description, "Aspirin has expired on Aug 7, 2026.");

    let medicine = store.get(id).unwrap();
    assert!(medicine.expired_notified);
    assert!(!medicine.warning_notified);

    // A later sweep finds the flag set and stays silent.
    let emitted = sweep(&mut store, &mut queue, noon(), t0, warning_window());
    assert_eq!(emitted, 0);
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_expiring_soon_emits_default_toast_once() {
    let mut store = MedicineStore::new();
    let mut queue = NotificationQueue::new(TOAST_WINDOW);
    let t0 = Instant::now();

    let id = store.add("Ibuprofen", date(2026, 8, 11)).unwrap();

    let emitted = sweep(&mut store, &mut queue, noon(), t0, warning_window());
    assert_eq!(emitted, 1);

    let toast = queue.oldest().unwrap();
    assert_eq!(toast.title, "Medicine Expiring Soon");
    assert_eq!(toast.severity, Severity::Default);
    assert_eq!(toast.description, "Ibuprofen will expire on Aug 11, 2026.");

    let medicine = store.get(id).unwrap();
    assert!(medicine.warning_notified);
    assert!(!medicine.expired_notified);

    let emitted = sweep(&mut store, &mut queue, noon(), t0, warning_window());
    assert_eq!(emitted, 0);
}

#[test]
fn test_expired_medicine_never_raises_warning() {
    let mut store = MedicineStore::new();
    let mut queue = NotificationQueue::new(TOAST_WINDOW);
    let t0 = Instant::now();

    let id = store.add("Old Syrup", date(2026, 8, 1)).unwrap();

    sweep(&mut store, &mut queue, noon(), t0, warning_window());
    sweep(&mut store, &mut queue, noon(), t0, warning_window());
    sweep(&mut store, &mut queue, noon(), t0, warning_window());

    assert_eq!(queue.len(), 1);
    assert_eq!(queue.oldest().unwrap().title, "Medicine Expired");
    assert!(!store.get(id).unwrap().warning_notified);
}

#[test]
fn test_warning_fires_exactly_at_window_boundary() {
    let mut store = MedicineStore::new();
    let mut queue = NotificationQueue::new(TOAST_WINDOW);
    let t0 = Instant::now();

    store.add("Boundary", date(2026, 8, 15)).unwrap();

    // Expiry instant is midnight Aug 15; the window opens at midnight Aug 8.
    let just_before = Utc.with_ymd_and_hms(2026, 8, 7, 23, 59, 59).unwrap();
    let emitted = sweep(&mut store, &mut queue, just_before, t0, warning_window());
    assert_eq!(emitted, 0);

    let at_boundary = Utc.with_ymd_and_hms(2026, 8, 8, 0, 0, 0).unwrap();
    let emitted = sweep(&mut store, &mut queue, at_boundary, t0, warning_window());
    assert_eq!(emitted, 1);
    assert_eq!(queue.oldest().unwrap().title, "Medicine Expiring Soon");
}

#[test]
fn test_expired_fires_exactly_at_expiry_instant() {
    let mut store = MedicineStore::new();
    let mut queue = NotificationQueue::new(TOAST_WINDOW);
    let t0 = Instant::now();

    let id = store.add("Edge", date(2026, 8, 8)).unwrap();

    let at_midnight = Utc.with_ymd_and_hms(2026, 8, 8, 0, 0, 0).unwrap();
    let emitted = sweep(&mut store, &mut queue, at_midnight, t0, warning_window());

    assert_eq!(emitted, 1);
    assert_eq!(queue.oldest().unwrap().title, "Medicine Expired");
    assert!(store.get(id).unwrap().expired_notified);
}

#[test]
fn test_far_future_medicine_is_silent() {
    let mut store = MedicineStore::new();
    let mut queue = NotificationQueue::new(TOAST_WINDOW);
    let t0 = Instant::now();

    let id = store.add("Fresh", date(2026, 12, 25)).unwrap();

    let emitted = sweep(&mut store, &mut queue, noon(), t0, warning_window());

    assert_eq!(emitted, 0);
    assert!(queue.is_empty());
    let medicine = store.get(id).unwrap();
    assert!(!medicine.expired_notified);
    assert!(!medicine.warning_notified);
}

#[test]
fn test_sweep_emits_in_list_order() {
    let mut store = MedicineStore::new();
    let mut queue = NotificationQueue::new(TOAST_WINDOW);
    let t0 = Instant::now();

    store.add("First", date(2026, 8, 1)).unwrap();
    store.add("Second", date(2026, 8, 2)).unwrap();

    sweep(&mut store, &mut queue, noon(), t0, warning_window());

    let descriptions: Vec<&str> = queue
        .entries()
        .iter()
        .map(|n| n.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "First has expired on Aug 1, 2026.",
            "Second has expired on Aug 2, 2026."
        ]
    );
}

#[test]
fn test_schedule_due_immediately_then_per_interval() {
    let t0 = Instant::now();
    let mut schedule = SweepSchedule::new(Duration::from_secs(60), t0);

    assert!(schedule.poll(t0));
    assert!(!schedule.poll(t0 + Duration::from_secs(1)));
    assert!(!schedule.poll(t0 + Duration::from_secs(59)));
    assert!(schedule.poll(t0 + Duration::from_secs(60)));
    assert!(!schedule.poll(t0 + Duration::from_secs(61)));
}

#[test]
fn test_schedule_catches_up_without_bursting() {
    let t0 = Instant::now();
    let mut schedule = SweepSchedule::new(Duration::from_secs(60), t0);
    assert!(schedule.poll(t0));

    // Three intervals late: one sweep fires, deadlines realign past now.
    assert!(schedule.poll(t0 + Duration::from_secs(185)));
    assert!(!schedule.poll(t0 + Duration::from_secs(186)));
    assert!(!schedule.poll(t0 + Duration::from_secs(239)));
    assert!(schedule.poll(t0 + Duration::from_secs(240)));
}

#[test]
fn test_schedule_next_due_advances_by_whole_intervals() {
    let t0 = Instant::now();
    let mut schedule = SweepSchedule::new(Duration::from_secs(60), t0);

    schedule.poll(t0);
    assert_eq!(schedule.next_due(), t0 + Duration::from_secs(60));

    schedule.poll(t0 + Duration::from_secs(60));
    assert_eq!(schedule.next_due(), t0 + Duration::from_secs(120));
}
