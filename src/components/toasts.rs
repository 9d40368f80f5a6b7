// ABOUTME: Toast stack overlay rendering ephemeral notifications top-right

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{AppState, Severity};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

pub struct ToastsComponent;

impl ToastsComponent {
    pub fn new() -> Self {
        Self
    }

    /// Renders visible toasts oldest-first from the top-right corner down,
    /// stopping when the stack runs out of vertical room.
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let entries = state.notifications.entries();
        if entries.is_empty() {
            return;
        }

        let width = TOAST_WIDTH.min(area.width);
        let x = area.right().saturating_sub(width);

        for (index, toast) in entries.iter().enumerate() {
            let y = area.y + (index as u16) * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);

            let (border_color, title_color) = match toast.severity {
                Severity::Destructive => (Color::Red, Color::Red),
                Severity::Default => (Color::Cyan, Color::Yellow),
            };

            frame.render_widget(Clear, toast_area);
            let body = Paragraph::new(toast.description.clone())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border_color))
                        .title(toast.title.clone())
                        .title_style(
                            Style::default()
                                .fg(title_color)
                                .add_modifier(Modifier::BOLD),
                        )
                        .style(Style::default().bg(Color::Black)),
                )
                .style(Style::default().fg(Color::White).bg(Color::Black));
            frame.render_widget(body, toast_area);
        }
    }
}

impl Default for ToastsComponent {
    fn default() -> Self {
        Self::new()
    }
}
