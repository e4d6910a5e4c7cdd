//! User interface module: the panels and their composition.

pub mod form;
pub mod history;
pub mod layout;
pub mod output;
pub mod status;

use ratatui::widgets::Widget;

use crate::app::{ActivePane, App};

impl Widget for &App {
    fn render(self, _area: ratatui::prelude::Rect, buf: &mut ratatui::prelude::Buffer) {
        let layout = self.layout();
        let active = self.get_active_pane();

        self.form
            .render(layout.form_area, buf, active == ActivePane::Form);
        self.output
            .render(layout.output_area, buf, active == ActivePane::Output);
        self.history
            .render(layout.history_area, buf, active == ActivePane::History);
        self.status.render(layout.status_area, buf);
    }
}
