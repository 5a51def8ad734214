use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Overlay listing each action with the keys bound to it
#[derive(Debug, Clone, PartialEq)]
pub struct HelpWidget {
    entries: Vec<(String, String)>,
    style: Style,
}

impl HelpWidget {
    pub fn new(entries: Vec<(String, String)>, style: Style) -> Self {
        Self { entries, style }
    }

    /// Area the overlay occupies inside `area`
    pub fn popup_area(&self, area: Rect) -> Rect {
        let key_width = self
            .entries
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);
        let action_width = self
            .entries
            .iter()
            .map(|(_, action)| action.chars().count())
            .max()
            .unwrap_or(0);
        let width = (key_width + action_width + 5).min(area.width as usize) as u16;
        let height = (self.entries.len() + 2).min(area.height as usize) as u16;
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        let key_width = self
            .entries
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);
        let lines: Vec<Line> = self
            .entries
            .iter()
            .map(|(keys, action)| Line::from(format!("{keys:<key_width$}  {action}")))
            .collect();

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .style(self.style)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entries() -> Vec<(String, String)> {
        vec![
            ("<q>".to_owned(), "Quit".to_owned()),
            ("<Space>".to_owned(), "ToggleTimer".to_owned()),
        ]
    }

    #[test]
    fn test_popup_area_is_centered() {
        let help = HelpWidget::new(entries(), Style::default());
        let popup = help.popup_area(Rect::new(0, 0, 40, 10));
        assert_eq!(popup, Rect::new(8, 3, 23, 4));
    }

    #[test]
    fn test_popup_area_fits_small_screen() {
        let help = HelpWidget::new(entries(), Style::default());
        let popup = help.popup_area(Rect::new(0, 0, 8, 2));
        assert_eq!(popup, Rect::new(0, 0, 8, 2));
    }

    #[test]
    fn test_render_lists_entries() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        HelpWidget::new(entries(), Style::default()).render(area, &mut buf);

        let row: String = (8..31).map(|x| buf[(x, 5)].symbol().to_string()).collect();
        assert_eq!(row, "│<Space>  ToggleTimer │");
    }
}
