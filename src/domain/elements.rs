//! The six UI elements the timer is bound to.
//!
//! Elements are declared by id in the `elements` table of the configuration.
//! [`Elements::resolve`] is the only way to obtain them and refuses to build
//! anything unless all six are present.

use std::collections::HashMap;

use color_eyre::eyre::{bail, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::domain::{
    clock::ZERO_DISPLAY,
    field::{FieldBounds, FieldRole},
    variant::{ControlLabel, TimerVariant},
};

/// Logical role of each required element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ElementRole {
    HoursField,
    MinutesField,
    SecondsField,
    ControlButton,
    ResetButton,
    Display,
}

impl ElementRole {
    /// Stable element id used in the configuration.
    pub fn id(self) -> &'static str {
        match self {
            ElementRole::HoursField => "hoursInput",
            ElementRole::MinutesField => "minutesInput",
            ElementRole::SecondsField => "secondsInput",
            ElementRole::ControlButton => "controlButton",
            ElementRole::ResetButton => "resetButton",
            ElementRole::Display => "display",
        }
    }

    fn default_title(self) -> &'static str {
        match self {
            ElementRole::HoursField => "Hours",
            ElementRole::MinutesField => "Minutes",
            ElementRole::SecondsField => "Seconds",
            ElementRole::ControlButton => "Control",
            ElementRole::ResetButton => "Reset",
            ElementRole::Display => "Remaining",
        }
    }
}

/// Per-element settings as written in the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementConfig {
    #[serde(default)]
    pub min: Option<u64>,
    #[serde(default)]
    pub max: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Element id -> settings.
pub type ElementLayout = HashMap<String, ElementConfig>;

/// Layout with all six elements and the stock bounds.
pub fn default_layout() -> ElementLayout {
    ElementRole::iter()
        .map(|role| {
            let config = match role {
                ElementRole::MinutesField | ElementRole::SecondsField => ElementConfig {
                    min: Some(0),
                    max: Some(59),
                    title: None,
                },
                ElementRole::HoursField => ElementConfig {
                    min: Some(0),
                    ..Default::default()
                },
                _ => ElementConfig::default(),
            };
            (role.id().to_owned(), config)
        })
        .collect()
}

/// Numeric text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub title: String,
    pub bounds: FieldBounds,
    value: String,
}

impl InputField {
    pub fn new(title: impl Into<String>, bounds: FieldBounds) -> Self {
        Self {
            title: title.into(),
            bounds,
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }
}

/// Button with a mutable visible label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl ToString) {
        self.label = label.to_string();
    }
}

/// Write-only text surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub title: String,
    text: String,
}

impl Display {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// The validated set of elements a timer controller is wired to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elements {
    pub hours: InputField,
    pub minutes: InputField,
    pub seconds: InputField,
    pub control: Button,
    pub reset: Button,
    pub display: Display,
}

impl Elements {
    /// Look up every required element in `layout`.
    ///
    /// Fails with every missing id listed when any element is absent, and
    /// when a field declares `max < min`.
    pub fn resolve(layout: &ElementLayout) -> Result<Self> {
        let missing: Vec<&str> = ElementRole::iter()
            .map(ElementRole::id)
            .filter(|id| !layout.contains_key(*id))
            .collect();
        if !missing.is_empty() {
            bail!(
                "One or more required elements are missing: {}",
                missing.join(", ")
            );
        }

        let field = |role: ElementRole| -> Result<InputField> {
            let config = &layout[role.id()];
            let bounds = FieldBounds::new(config.min.unwrap_or(0), config.max);
            if !bounds.is_valid() {
                bail!(
                    "Element {} has max {:?} below min {}",
                    role.id(),
                    bounds.max,
                    bounds.min
                );
            }
            Ok(InputField::new(title(layout, role), bounds))
        };

        Ok(Self {
            hours: field(ElementRole::HoursField)?,
            minutes: field(ElementRole::MinutesField)?,
            seconds: field(ElementRole::SecondsField)?,
            control: Button::new(ControlLabel::Start.to_string()),
            reset: Button::new(title(layout, ElementRole::ResetButton)),
            display: Display {
                title: title(layout, ElementRole::Display),
                text: ZERO_DISPLAY.to_owned(),
            },
        })
    }

    pub fn field(&self, role: FieldRole) -> &InputField {
        match role {
            FieldRole::Hours => &self.hours,
            FieldRole::Minutes => &self.minutes,
            FieldRole::Seconds => &self.seconds,
        }
    }

    pub fn field_mut(&mut self, role: FieldRole) -> &mut InputField {
        match role {
            FieldRole::Hours => &mut self.hours,
            FieldRole::Minutes => &mut self.minutes,
            FieldRole::Seconds => &mut self.seconds,
        }
    }

    /// Put every field back to the variant's zero representation.
    pub fn clear_fields(&mut self, variant: TimerVariant) {
        for role in FieldRole::iter() {
            self.field_mut(role).set_value(variant.zero_field());
        }
    }
}

fn title(layout: &ElementLayout, role: ElementRole) -> String {
    layout
        .get(role.id())
        .and_then(|config| config.title.clone())
        .unwrap_or_else(|| role.default_title().to_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[test]
    fn test_resolve_default_layout() -> Result<()> {
        let elements = Elements::resolve(&default_layout())?;

        assert_eq!(elements.hours.bounds, FieldBounds::new(0, None));
        assert_eq!(elements.minutes.bounds, FieldBounds::new(0, Some(59)));
        assert_eq!(elements.seconds.bounds, FieldBounds::new(0, Some(59)));
        assert_eq!(elements.control.label(), "Start");
        assert_eq!(elements.reset.label(), "Reset");
        assert_eq!(elements.display.text(), "00:00:00");
        assert_eq!(elements.hours.title, "Hours");
        Ok(())
    }

    #[rstest]
    #[case(ElementRole::HoursField)]
    #[case(ElementRole::MinutesField)]
    #[case(ElementRole::SecondsField)]
    #[case(ElementRole::ControlButton)]
    #[case(ElementRole::ResetButton)]
    #[case(ElementRole::Display)]
    fn test_resolve_fails_on_missing_element(#[case] role: ElementRole) {
        let mut layout = default_layout();
        layout.remove(role.id());

        let err = Elements::resolve(&layout).expect_err("missing element must fail");
        let message = err.to_string();
        assert!(message.contains("missing"), "unexpected error: {message}");
        assert!(message.contains(role.id()), "unexpected error: {message}");
    }

    #[test]
    fn test_resolve_lists_every_missing_element() {
        let err = Elements::resolve(&ElementLayout::new()).expect_err("empty layout must fail");
        let message = err.to_string();
        for role in ElementRole::iter() {
            assert!(message.contains(role.id()), "{} not listed", role.id());
        }
    }

    #[test]
    fn test_resolve_rejects_inverted_bounds() {
        let mut layout = default_layout();
        layout.insert(
            "secondsInput".to_owned(),
            ElementConfig {
                min: Some(10),
                max: Some(5),
                title: None,
            },
        );

        let err = Elements::resolve(&layout).expect_err("inverted bounds must fail");
        assert!(err.to_string().contains("secondsInput"));
    }

    #[test]
    fn test_custom_titles() -> Result<()> {
        let mut layout = default_layout();
        layout.insert(
            "resetButton".to_owned(),
            ElementConfig {
                title: Some("Clear".to_owned()),
                ..Default::default()
            },
        );

        let elements = Elements::resolve(&layout)?;
        assert_eq!(elements.reset.label(), "Clear");
        Ok(())
    }

    #[test]
    fn test_clear_fields() -> Result<()> {
        let mut elements = Elements::resolve(&default_layout())?;
        elements.hours.set_value("12");
        elements.seconds.push('9');

        elements.clear_fields(TimerVariant::Classic);
        for role in FieldRole::iter() {
            assert_eq!(elements.field(role).value(), "0");
        }

        elements.clear_fields(TimerVariant::Padded);
        for role in FieldRole::iter() {
            assert_eq!(elements.field(role).value(), "00");
        }
        Ok(())
    }
}
