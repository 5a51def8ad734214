use std::collections::HashMap;
use std::str::FromStr;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de, Deserialize, Deserializer};

/// Named styles, e.g. `"display_running": "bold green"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, line)| {
                let style = parse_style(&line).map_err(de::Error::custom)?;
                Ok((name, style))
            })
            .collect::<Result<_, D::Error>>()?;

        Ok(Styles(styles))
    }
}

impl Styles {
    pub fn get_or_default(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

/// Parse `"bold yellow on black"`: modifiers, a foreground colour, and an
/// optional background colour after `on`.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut words = line.split_whitespace();

    while let Some(word) = words.next() {
        let lower = word.to_ascii_lowercase();
        style = match lower.as_str() {
            "bold" => style.add_modifier(Modifier::BOLD),
            "dim" => style.add_modifier(Modifier::DIM),
            "italic" => style.add_modifier(Modifier::ITALIC),
            "underlined" => style.add_modifier(Modifier::UNDERLINED),
            "reversed" => style.add_modifier(Modifier::REVERSED),
            "on" => {
                let bg = words
                    .next()
                    .ok_or_else(|| format!("Missing background colour in `{line}`"))?;
                style.bg(parse_color(bg)?)
            }
            _ => style.fg(parse_color(word)?),
        };
    }

    Ok(style)
}

fn parse_color(word: &str) -> Result<Color, String> {
    Color::from_str(word).map_err(|_| format!("Unknown colour `{word}`"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_fg_only() {
        assert_eq!(parse_style("green"), Ok(Style::default().fg(Color::Green)));
    }

    #[test]
    fn test_parse_style_full() {
        assert_eq!(
            parse_style("bold black on yellow"),
            Ok(Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Black)
                .bg(Color::Yellow))
        );
    }

    #[test]
    fn test_parse_style_errors() {
        assert!(parse_style("sparkly").is_err());
        assert!(parse_style("white on").is_err());
    }

    #[test]
    fn test_empty_style_is_default() {
        assert_eq!(parse_style(""), Ok(Style::default()));
    }

    #[test]
    fn test_get_or_default() -> color_eyre::Result<()> {
        let styles: Styles = json5::from_str(r#"{ "display": "bold white" }"#)?;
        assert_eq!(
            styles.get_or_default("display"),
            Style::default().add_modifier(Modifier::BOLD).fg(Color::White)
        );
        assert_eq!(styles.get_or_default("missing"), Style::default());
        Ok(())
    }
}
