// ABOUTME: Tests for the toast queue's single-timer FIFO auto-dismissal

use std::time::{Duration, Instant};

use pillbox::app::{Notification, NotificationQueue, Severity};
use pretty_assertions::assert_eq;

const WINDOW: Duration = Duration::from_secs(5);

fn queue() -> NotificationQueue {
    NotificationQueue::new(WINDOW)
}

fn toast(title: &str) -> Notification {
    Notification::info(title, "description")
}

#[test]
fn test_push_arms_timer_only_when_empty() {
    let mut queue = queue();
    let t0 = Instant::now();

    assert!(!queue.timer_armed());

    queue.push(toast("first"), t0);
    assert!(queue.timer_armed());

    // Pushing onto a non-empty queue must not reset the head's window:
    // the head still evicts at t0 + WINDOW.
    queue.push(toast("second"), t0 + Duration::from_secs(3));
    assert!(queue.evict_due(t0 + Duration::from_millis(4900)).is_none());
    let evicted = queue.evict_due(t0 + WINDOW).unwrap();
    assert_eq!(evicted.title, "first");
}

#[test]
fn test_rapid_pushes_evict_one_window_apart_oldest_first() {
    let mut queue = queue();
    let t0 = Instant::now();

    queue.push(toast("a"), t0);
    queue.push(toast("b"), t0);
    queue.push(toast("c"), t0);
    assert_eq!(queue.len(), 3);

    assert!(queue.evict_due(t0 + Duration::from_secs(4)).is_none());

    let first = queue.evict_due(t0 + Duration::from_secs(5)).unwrap();
    assert_eq!(first.title, "a");
    assert!(queue.evict_due(t0 + Duration::from_secs(9)).is_none());

    let second = queue.evict_due(t0 + Duration::from_secs(10)).unwrap();
    assert_eq!(second.title, "b");

    let third = queue.evict_due(t0 + Duration::from_secs(15)).unwrap();
    assert_eq!(third.title, "c");

    assert!(queue.is_empty());
    assert!(!queue.timer_armed());
}

#[test]
fn test_timer_armed_iff_nonempty() {
    let mut queue = queue();
    let t0 = Instant::now();

    queue.push(toast("a"), t0);
    assert!(queue.timer_armed());

    queue.evict_due(t0 + WINDOW);
    assert!(queue.is_empty());
    assert!(!queue.timer_armed());
}

#[test]
fn test_dismiss_head_rearms_for_new_head() {
    let mut queue = queue();
    let t0 = Instant::now();

    queue.push(toast("a"), t0);
    queue.push(toast("b"), t0);

    let head_id = queue.oldest().unwrap().id.clone();
    queue.dismiss(&head_id, t0 + Duration::from_secs(2));

    // "b" gets a full window from the dismissal instant.
    assert!(queue.evict_due(t0 + Duration::from_secs(6)).is_none());
    let evicted = queue.evict_due(t0 + Duration::from_secs(7)).unwrap();
    assert_eq!(evicted.title, "b");
}

#[test]
fn test_dismiss_non_head_keeps_head_deadline() {
    let mut queue = queue();
    let t0 = Instant::now();

    queue.push(toast("a"), t0);
    queue.push(toast("b"), t0);

    let tail_id = queue.entries()[1].id.clone();
    queue.dismiss(&tail_id, t0 + Duration::from_secs(2));
    assert_eq!(queue.len(), 1);

    let evicted = queue.evict_due(t0 + WINDOW).unwrap();
    assert_eq!(evicted.title, "a");
    assert!(!queue.timer_armed());
}

#[test]
fn test_dismiss_unknown_id_is_noop() {
    let mut queue = queue();
    let t0 = Instant::now();

    queue.push(toast("a"), t0);
    queue.dismiss("not-a-real-id", t0 + Duration::from_secs(1));

    assert_eq!(queue.len(), 1);
    assert!(queue.timer_armed());
}

#[test]
fn test_dismiss_last_entry_disarms_timer() {
    let mut queue = queue();
    let t0 = Instant::now();

    queue.push(toast("a"), t0);
    let id = queue.oldest().unwrap().id.clone();
    queue.dismiss(&id, t0 + Duration::from_secs(1));

    assert!(queue.is_empty());
    assert!(!queue.timer_armed());
    assert!(queue.evict_due(t0 + Duration::from_secs(10)).is_none());
}

#[test]
fn test_severity_constructors() {
    let info = Notification::info("t", "d");
    let destructive = Notification::destructive("t", "d");

    assert_eq!(info.severity, Severity::Default);
    assert_eq!(destructive.severity, Severity::Destructive);
    assert_ne!(info.id, destructive.id);
}
