// ABOUTME: Medicine data model and the owned in-memory inventory store

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Which one-shot notification flag a sweep is flipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Expired,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: u64,
    pub name: String,
    pub expiry_date: NaiveDate,
    pub expired_notified: bool,
    pub warning_notified: bool,
}

impl Medicine {
    fn new(id: u64, name: String, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            expiry_date,
            expired_notified: false,
            warning_notified: false,
        }
    }

    /// The instant this medicine expires: midnight UTC of its expiry date.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expiry_date.and_time(NaiveTime::MIN).and_utc()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Expiry date formatted for cards and toast descriptions, e.g. "Mar 4, 2026".
    pub fn expiry_display(&self) -> String {
        self.expiry_date.format("%b %-d, %Y").to_string()
    }
}

/// Ordered in-memory collection of tracked medicines.
///
/// Ids are store-owned and monotonically increasing, so they stay unique no
/// matter how quickly items are added. Notification flags only ever
/// transition false to true, and only through `mark_notified`.
#[derive(Debug, Default)]
pub struct MedicineStore {
    medicines: Vec<Medicine>,
    next_id: u64,
}

impl MedicineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new medicine and returns its id.
    ///
    /// A name that is empty after trimming is rejected and the store is left
    /// unchanged. Date validity is enforced at the form boundary, where the
    /// raw text input is parsed before it reaches the store.
    pub fn add(&mut self, name: &str, expiry_date: NaiveDate) -> Option<u64> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.medicines.push(Medicine::new(id, name.to_string(), expiry_date));
        Some(id)
    }

    /// Removes the medicine with the matching id. No-op if absent.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.medicines.len();
        self.medicines.retain(|m| m.id != id);
        self.medicines.len() != before
    }

    /// Flips a one-shot notification flag. Used only by the expiry sweep so
    /// each threshold crossing fires at most once.
    pub fn mark_notified(&mut self, id: u64, kind: NotifyKind) {
        if let Some(medicine) = self.medicines.iter_mut().find(|m| m.id == id) {
            match kind {
                NotifyKind::Expired => medicine.expired_notified = true,
                NotifyKind::Warning => medicine.warning_notified = true,
            }
        }
    }

    pub fn get(&self, id: u64) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    /// Medicines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Medicine> {
        self.medicines.iter()
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }
}
