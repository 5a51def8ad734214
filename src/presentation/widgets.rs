//! Reusable UI widgets
//!
//! Widgets take plain data and styles; they never see `AppState`.

pub mod button;
pub mod field;
pub mod help;
pub mod status_bar;
pub mod time_display;

pub use button::ButtonWidget;
pub use field::FieldWidget;
pub use help::HelpWidget;
pub use status_bar::StatusBarWidget;
pub use time_display::TimeDisplayWidget;
