use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonWidget<'a> {
    label: &'a str,
    style: Style,
}

impl<'a> ButtonWidget<'a> {
    pub fn new(label: &'a str, style: Style) -> Self {
        Self { label, style }
    }
}

impl Widget for ButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(self.style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.style),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_label_centered() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        ButtonWidget::new("Pause", Style::default()).render(area, &mut buf);

        let label_row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert_eq!(label_row, "│  Pause │");
    }
}
