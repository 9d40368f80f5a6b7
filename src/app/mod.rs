// ABOUTME: Application structure, state management, and expiry sweep logic

pub mod events;
pub mod notification;
pub mod state;
pub mod sweeper;

pub use events::{AppEvent, EventHandler};
pub use notification::{Notification, NotificationQueue, Severity};
pub use state::{App, AppState};
pub use sweeper::{sweep, SweepSchedule};
