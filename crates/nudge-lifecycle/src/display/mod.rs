//! Badge display metadata for status rendering.
//!
//! Maps wire status literals to the label, palette color, and description a
//! UI needs to render a status badge. The lookup is flat and shared across
//! entity kinds, and total: unknown literals get a neutral fallback entry
//! rather than an error.

mod badge_color;
mod status_display;

pub use badge_color::BadgeColor;
pub use status_display::{StatusDisplay, display_config};
