// ABOUTME: Ephemeral toast notifications with single-timer FIFO auto-dismissal

use std::time::{Duration, Instant};

use uuid::Uuid;

/// Visual weight of a toast. Destructive toasts carry error styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Default,
    Destructive,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Default)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Destructive)
    }
}

/// FIFO queue of toasts with delay-based eviction.
///
/// A single deadline is armed whenever the queue is non-empty, always
/// targeting the oldest entry. When it fires the head is evicted and the
/// deadline is rearmed for the new head with a full window. Pushing onto a
/// non-empty queue never disturbs the running window.
#[derive(Debug)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    dismiss_after: Duration,
    deadline: Option<Instant>,
}

impl NotificationQueue {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            entries: Vec::new(),
            dismiss_after,
            deadline: None,
        }
    }

    /// Appends a toast, arming the timer if the queue was empty.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.entries.push(notification);
        if self.deadline.is_none() {
            self.deadline = Some(now + self.dismiss_after);
        }
    }

    /// Removes the matching entry regardless of position. No-op if absent.
    /// Removing the head rearms the timer for the new head.
    pub fn dismiss(&mut self, id: &str, now: Instant) {
        let Some(pos) = self.entries.iter().position(|n| n.id == id) else {
            return;
        };
        self.entries.remove(pos);
        if pos == 0 {
            self.rearm(now);
        }
    }

    /// Evicts the head if its deadline has passed, returning the evicted
    /// entry. Called from the UI tick.
    pub fn evict_due(&mut self, now: Instant) -> Option<Notification> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                let head = if self.entries.is_empty() {
                    None
                } else {
                    Some(self.entries.remove(0))
                };
                self.rearm(now);
                head
            }
            _ => None,
        }
    }

    fn rearm(&mut self, now: Instant) {
        self.deadline = if self.entries.is_empty() {
            None
        } else {
            Some(now + self.dismiss_after)
        };
    }

    /// Entries oldest-first, for rendering the toast stack.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn oldest(&self) -> Option<&Notification> {
        self.entries.first()
    }

    pub fn timer_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
