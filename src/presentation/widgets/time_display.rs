use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// The HH:MM:SS readout, centered in a bordered box
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDisplayWidget<'a> {
    title: &'a str,
    text: &'a str,
    style: Style,
}

impl<'a> TimeDisplayWidget<'a> {
    pub fn new(title: &'a str, text: &'a str, style: Style) -> Self {
        Self { title, text, style }
    }
}

impl Widget for TimeDisplayWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        // Vertically center a single line
        let [_, line, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);
        Paragraph::new(self.text)
            .style(self.style)
            .alignment(Alignment::Center)
            .render(line, buf);
    }
}
