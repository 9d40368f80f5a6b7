// ABOUTME: Application state management and view switching logic

use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

use crate::app::notification::{Notification, NotificationQueue};
use crate::app::sweeper::{sweep, SweepSchedule};
use crate::config::Config;
use crate::models::{Medicine, MedicineStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Inventory,
    AddMedicine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    ExpiryDate,
}

/// Transient state of the add-medicine form popup.
#[derive(Debug, Default)]
pub struct AddMedicineState {
    pub name: String,
    pub expiry_input: String,
    pub focused_field: FormField,
}

impl AddMedicineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Name => FormField::ExpiryDate,
            FormField::ExpiryDate => FormField::Name,
        };
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focused_field {
            FormField::Name => &mut self.name,
            FormField::ExpiryDate => &mut self.expiry_input,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub store: MedicineStore,
    pub notifications: NotificationQueue,
    pub selected_index: Option<usize>,
    pub current_view: View,
    pub add_medicine_state: Option<AddMedicineState>,
    pub help_visible: bool,
    pub should_quit: bool,
    pub sweep_requested: bool,
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: MedicineStore::new(),
            notifications: NotificationQueue::new(config.toast_duration()),
            selected_index: None,
            current_view: View::Inventory,
            add_medicine_state: None,
            help_visible: false,
            should_quit: false,
            sweep_requested: false,
            config,
        }
    }

    pub fn selected_medicine(&self) -> Option<&Medicine> {
        let index = self.selected_index?;
        self.store.iter().nth(index)
    }

    pub fn next_medicine(&mut self) {
        if !self.store.is_empty() {
            let current = self.selected_index.unwrap_or(0);
            self.selected_index = Some((current + 1) % self.store.len());
        }
    }

    pub fn previous_medicine(&mut self) {
        if !self.store.is_empty() {
            let current = self.selected_index.unwrap_or(0);
            self.selected_index = Some(if current == 0 {
                self.store.len() - 1
            } else {
                current - 1
            });
        }
    }

    pub fn go_to_top(&mut self) {
        if !self.store.is_empty() {
            self.selected_index = Some(0);
        }
    }

    pub fn go_to_bottom(&mut self) {
        if !self.store.is_empty() {
            self.selected_index = Some(self.store.len() - 1);
        }
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn open_add_medicine(&mut self) {
        self.add_medicine_state = Some(AddMedicineState::new());
        self.current_view = View::AddMedicine;
    }

    pub fn cancel_add_medicine(&mut self) {
        self.add_medicine_state = None;
        self.current_view = View::Inventory;
    }

    pub fn form_next_field(&mut self) {
        if let Some(ref mut form) = self.add_medicine_state {
            form.focus_next();
        }
    }

    pub fn form_input_char(&mut self, ch: char) {
        if let Some(ref mut form) = self.add_medicine_state {
            form.focused_input_mut().push(ch);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(ref mut form) = self.add_medicine_state {
            form.focused_input_mut().pop();
        }
    }

    /// Validates the form and appends to the inventory.
    ///
    /// Validation failures keep the form open and surface a destructive
    /// toast instead of silently dropping the submission.
    pub fn submit_add_medicine(&mut self, now: Instant) {
        let (name, date_input) = match self.add_medicine_state {
            Some(ref form) => (
                form.name.trim().to_string(),
                form.expiry_input.trim().to_string(),
            ),
            None => return,
        };

        if name.is_empty() {
            self.notifications.push(
                Notification::destructive("Invalid Medicine", "Name is required."),
                now,
            );
            return;
        }
        if date_input.is_empty() {
            self.notifications.push(
                Notification::destructive("Invalid Medicine", "Expiry date is required."),
                now,
            );
            return;
        }
        let Ok(expiry_date) = NaiveDate::parse_from_str(&date_input, "%Y-%m-%d") else {
            warn!("rejected expiry date input '{}'", date_input);
            self.notifications.push(
                Notification::destructive(
                    "Invalid Medicine",
                    "Enter the expiry date as YYYY-MM-DD.",
                ),
                now,
            );
            return;
        };

        if let Some(id) = self.store.add(&name, expiry_date) {
            info!("added medicine '{}' (id {})", name, id);
            self.add_medicine_state = None;
            self.current_view = View::Inventory;
            if self.selected_index.is_none() {
                self.selected_index = Some(0);
            }
            self.sweep_requested = true;
        }
    }

    /// Removes the selected medicine and clamps the selection.
    pub fn remove_selected(&mut self) {
        let Some(medicine) = self.selected_medicine() else {
            return;
        };
        let id = medicine.id;
        let name = medicine.name.clone();
        if self.store.remove(id) {
            info!("removed medicine '{}' (id {})", name, id);
            self.sweep_requested = true;
        }
        self.selected_index = if self.store.is_empty() {
            None
        } else {
            Some(self.selected_index.unwrap_or(0).min(self.store.len() - 1))
        };
    }

    pub fn dismiss_oldest_toast(&mut self, now: Instant) {
        if let Some(id) = self.notifications.oldest().map(|n| n.id.clone()) {
            self.notifications.dismiss(&id, now);
        }
    }

    pub fn request_sweep(&mut self) {
        self.sweep_requested = true;
    }
}

pub struct App {
    pub state: AppState,
    schedule: SweepSchedule,
}

impl App {
    pub fn new(config: Config) -> Self {
        let schedule = SweepSchedule::new(config.sweep_interval(), Instant::now());
        Self {
            state: AppState::new(config),
            schedule,
        }
    }

    pub fn init(&mut self) {
        info!(
            "pillbox starting; sweep every {:?}, warning window {} days",
            self.state.config.sweep_interval(),
            self.state.config.warning_window_days
        );
        // First sweep runs on the first tick, before any user input.
        self.state.sweep_requested = true;
    }

    pub async fn tick(&mut self) -> anyhow::Result<()> {
        self.tick_at(Instant::now(), Utc::now());
        Ok(())
    }

    /// Drives time-based behavior: the scheduled or requested expiry sweep
    /// and toast auto-dismissal. Called once per UI tick.
    pub fn tick_at(&mut self, now: Instant, now_utc: DateTime<Utc>) {
        let due = self.schedule.poll(now);
        if due || self.state.sweep_requested {
            self.state.sweep_requested = false;
            sweep(
                &mut self.state.store,
                &mut self.state.notifications,
                now_utc,
                now,
                self.state.config.warning_window(),
            );
        }

        if let Some(evicted) = self.state.notifications.evict_due(now) {
            info!("toast '{}' auto-dismissed", evicted.title);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
