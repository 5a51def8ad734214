use ratatui::{prelude::*, widgets::Paragraph};

/// One line: phase on the left, the latest status message after it
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarWidget<'a> {
    phase: String,
    message: Option<&'a str>,
    hint: &'a str,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(phase: impl ToString, message: Option<&'a str>, hint: &'a str, style: Style) -> Self {
        Self {
            phase: phase.to_string(),
            message,
            hint,
            style,
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(self.hint.len() as u16)])
                .areas(area);

        let mut spans = vec![Span::styled(format!("[{}]", self.phase), self.style.bold())];
        if let Some(message) = self.message {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(message, self.style));
        }
        Paragraph::new(Line::from(spans)).render(left, buf);
        Paragraph::new(self.hint)
            .style(self.style)
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_render_phase_and_message() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new("Paused", Some("Timer paused"), "? help", Style::default())
            .render(area, &mut buf);

        let text = line(&buf, area.width);
        assert!(text.starts_with("[Paused] Timer paused"));
        assert!(text.ends_with("? help"));
    }

    #[test]
    fn test_render_without_message() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new("Idle", None, "", Style::default()).render(area, &mut buf);

        assert_eq!(line(&buf, area.width).trim_end(), "[Idle]");
    }
}
