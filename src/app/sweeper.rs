// ABOUTME: Expiry sweep over the inventory and its fixed-period schedule

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::app::notification::{Notification, NotificationQueue};
use crate::models::{MedicineStore, NotifyKind};

/// Scans the store in insertion order and pushes one toast per threshold
/// crossing, flipping the matching one-shot flag so a later sweep cannot
/// re-fire. An item at or past its expiry instant never raises a warning.
///
/// Returns the number of toasts emitted.
pub fn sweep(
    store: &mut MedicineStore,
    queue: &mut NotificationQueue,
    now_utc: DateTime<Utc>,
    now: Instant,
    warning_window: chrono::Duration,
) -> usize {
    let pending: Vec<(u64, NotifyKind)> = store
        .iter()
        .filter_map(|medicine| {
            if now_utc >= medicine.expires_at() {
                (!medicine.expired_notified).then_some((medicine.id, NotifyKind::Expired))
            } else if now_utc >= medicine.expires_at() - warning_window
                && !medicine.warning_notified
            {
                Some((medicine.id, NotifyKind::Warning))
            } else {
                None
            }
        })
        .collect();

    let emitted = pending.len();
    for (id, kind) in pending {
        let Some(medicine) = store.get(id) else { continue };
        let toast = match kind {
            NotifyKind::Expired => Notification::destructive(
                "Medicine Expired",
                format!("{} has expired on {}.", medicine.name, medicine.expiry_display()),
            ),
            NotifyKind::Warning => Notification::info(
                "Medicine Expiring Soon",
                format!("{} will expire on {}.", medicine.name, medicine.expiry_display()),
            ),
        };
        info!("expiry sweep: {} for '{}'", toast.title, medicine.name);
        queue.push(toast, now);
        store.mark_notified(id, kind);
    }

    if emitted == 0 {
        debug!("expiry sweep: nothing to notify");
    }
    emitted
}

/// Fixed-period schedule for the recurring sweep.
///
/// Due immediately on creation, then once per interval. Deadlines advance by
/// whole intervals from the previous deadline, so the cadence does not drift
/// with polling latency; a poll arriving several intervals late catches up
/// without firing a burst. Store mutations request extra sweeps elsewhere
/// and never move this deadline.
#[derive(Debug)]
pub struct SweepSchedule {
    interval: Duration,
    next_due: Instant,
}

impl SweepSchedule {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now,
        }
    }

    /// True when a scheduled sweep is due; advances the deadline past `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        while self.next_due <= now {
            self.next_due += self.interval;
        }
        true
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}
