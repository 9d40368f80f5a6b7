// ABOUTME: Medicine card list component with expiry status styling

use chrono::Utc;
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::AppState;

pub struct MedicineListComponent {
    list_state: ListState,
}

impl Default for MedicineListComponent {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }
}

impl MedicineListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.list_state.select(state.selected_index);

        let now = Utc::now();
        let warning_window = state.config.warning_window();

        let mut items: Vec<ListItem> = state
            .store
            .iter()
            .map(|medicine| {
                let expired = medicine.is_expired(now);
                let expiring_soon =
                    !expired && now >= medicine.expires_at() - warning_window;

                let status_indicator = if expired {
                    "⚠"
                } else if expiring_soon {
                    "●"
                } else {
                    "○"
                };

                let style = if expired {
                    Style::default().fg(Color::Red)
                } else if expiring_soon {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };

                ListItem::new(format!(
                    "{} {}  expires on {}",
                    status_indicator,
                    medicine.name,
                    medicine.expiry_display()
                ))
                .style(style)
            })
            .collect();

        if items.is_empty() {
            items.push(
                ListItem::new("No medicines tracked. Press 'a' to add one.")
                    .style(Style::default().fg(Color::Gray)),
            );
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("Medicines ({})", state.store.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
