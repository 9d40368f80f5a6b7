// ABOUTME: Add-medicine form popup with name and expiry date inputs

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::state::FormField;
use crate::app::AppState;

pub struct AddMedicineComponent;

impl AddMedicineComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        if let Some(ref form) = state.add_medicine_state {
            let popup_area = self.centered_rect(60, 50, area);

            frame.render_widget(Clear, popup_area);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Title
                    Constraint::Length(3), // Name input
                    Constraint::Length(3), // Expiry date input
                    Constraint::Min(0),    // Spacer
                    Constraint::Length(3), // Instructions
                ])
                .split(popup_area);

            let title = Paragraph::new("Enter the details of the new medicine")
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan))
                        .title("Add New Medicine")
                        .style(Style::default().bg(Color::Black)),
                )
                .style(Style::default().fg(Color::Yellow).bg(Color::Black))
                .alignment(Alignment::Center);
            frame.render_widget(title, chunks[0]);

            self.render_input(
                frame,
                chunks[1],
                "Name",
                &form.name,
                "Medicine name",
                form.focused_field == FormField::Name,
            );
            self.render_input(
                frame,
                chunks[2],
                "Expiry Date",
                &form.expiry_input,
                "YYYY-MM-DD",
                form.focused_field == FormField::ExpiryDate,
            );

            let instructions =
                Paragraph::new("Tab: Switch field • Enter: Add • Esc: Cancel")
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::Gray)),
                    )
                    .style(Style::default().fg(Color::Gray).bg(Color::Black))
                    .alignment(Alignment::Center);
            frame.render_widget(instructions, chunks[4]);
        }
    }

    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        placeholder: &str,
        focused: bool,
    ) {
        let border_color = if focused { Color::Green } else { Color::White };
        let (text, text_style) = if value.is_empty() {
            (placeholder, Style::default().fg(Color::DarkGray).bg(Color::Black))
        } else {
            (value, Style::default().fg(Color::White).bg(Color::Black))
        };

        let input = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(label)
                    .style(Style::default().bg(Color::Black)),
            )
            .style(text_style);
        frame.render_widget(input, area);
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for AddMedicineComponent {
    fn default() -> Self {
        Self::new()
    }
}
