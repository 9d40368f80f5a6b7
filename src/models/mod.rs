// ABOUTME: Core data models for tracked medicines and the in-memory inventory

pub mod medicine;

pub use medicine::{Medicine, MedicineStore, NotifyKind};
