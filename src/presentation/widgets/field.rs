use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// A titled numeric input box; shows a cursor while focused
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWidget<'a> {
    title: &'a str,
    value: &'a str,
    style: Style,
    focused: bool,
}

impl<'a> FieldWidget<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            style: Style::default(),
            focused: false,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn content(&self) -> String {
        if self.focused {
            format!("{}_", self.value)
        } else {
            self.value.to_owned()
        }
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style)
            .title(self.title);
        Paragraph::new(self.content())
            .style(self.style)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_content_shows_cursor_only_when_focused() {
        assert_eq!(FieldWidget::new("Hours", "12").content(), "12");
        assert_eq!(FieldWidget::new("Hours", "12").focused(true).content(), "12_");
        assert_eq!(FieldWidget::new("Hours", "").focused(true).content(), "_");
    }

    #[test]
    fn test_render_title_and_value() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        FieldWidget::new("Minutes", "05").render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).contains("Minutes"));
        assert!(row(1).starts_with("│05"));
    }
}
