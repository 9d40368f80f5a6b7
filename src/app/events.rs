// ABOUTME: Event handling system for keyboard input and app actions

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    NextMedicine,
    PreviousMedicine,
    GoToTop,
    GoToBottom,
    OpenAddMedicine,
    RemoveSelected,
    SweepNow,      // Manual expiry check, without waiting for the schedule
    DismissToast,  // Dismiss the oldest visible toast
    // Add-medicine form events
    AddMedicineCancel,
    AddMedicineNextField,
    AddMedicineInputChar(char),
    AddMedicineBackspace,
    AddMedicineSubmit,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        use crate::app::state::View;

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        // The form view gets the keys first so text input can use any character.
        if state.current_view == View::AddMedicine {
            return Self::handle_add_medicine_keys(key_event);
        }

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::NextMedicine),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::PreviousMedicine),
            KeyCode::Char('g') => Some(AppEvent::GoToTop),
            KeyCode::Char('G') => Some(AppEvent::GoToBottom),
            KeyCode::Char('a') | KeyCode::Char('n') => Some(AppEvent::OpenAddMedicine),
            KeyCode::Char('d') => Some(AppEvent::RemoveSelected),
            KeyCode::Char('r') => Some(AppEvent::SweepNow),
            KeyCode::Char('x') => Some(AppEvent::DismissToast),
            _ => None,
        }
    }

    fn handle_add_medicine_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::AddMedicineCancel),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                Some(AppEvent::AddMedicineNextField)
            }
            KeyCode::Enter => Some(AppEvent::AddMedicineSubmit),
            KeyCode::Backspace => Some(AppEvent::AddMedicineBackspace),
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Quit)
            }
            KeyCode::Char(ch) => Some(AppEvent::AddMedicineInputChar(ch)),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState, now: Instant) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::NextMedicine => state.next_medicine(),
            AppEvent::PreviousMedicine => state.previous_medicine(),
            AppEvent::GoToTop => state.go_to_top(),
            AppEvent::GoToBottom => state.go_to_bottom(),
            AppEvent::OpenAddMedicine => state.open_add_medicine(),
            AppEvent::RemoveSelected => state.remove_selected(),
            AppEvent::SweepNow => state.request_sweep(),
            AppEvent::DismissToast => state.dismiss_oldest_toast(now),
            AppEvent::AddMedicineCancel => state.cancel_add_medicine(),
            AppEvent::AddMedicineNextField => state.form_next_field(),
            AppEvent::AddMedicineInputChar(ch) => state.form_input_char(ch),
            AppEvent::AddMedicineBackspace => state.form_backspace(),
            AppEvent::AddMedicineSubmit => state.submit_add_medicine(now),
        }
    }
}
