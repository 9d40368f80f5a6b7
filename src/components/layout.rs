// ABOUTME: Main layout component handling content arrangement, overlays, and menu bar

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::View;
use crate::app::AppState;

use super::{AddMedicineComponent, HelpComponent, MedicineListComponent, ToastsComponent};

pub struct LayoutComponent {
    medicine_list: MedicineListComponent,
    add_medicine: AddMedicineComponent,
    toasts: ToastsComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            medicine_list: MedicineListComponent::new(),
            add_medicine: AddMedicineComponent::new(),
            toasts: ToastsComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Medicine list
                Constraint::Length(3), // Bottom menu bar
            ])
            .split(frame.size());

        self.medicine_list.render(frame, main_chunks[0], state);
        self.render_menu_bar(frame, main_chunks[1]);

        // Overlays, bottom to top: form, help, toasts.
        if state.current_view == View::AddMedicine {
            self.add_medicine.render(frame, frame.size(), state);
        }

        if state.help_visible {
            self.help.render(frame, frame.size());
        }

        self.toasts.render(frame, frame.size(), state);
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let menu_text = "[a]dd [d]elete [r]e-check [x]dismiss toast [?]help [q]uit";

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
