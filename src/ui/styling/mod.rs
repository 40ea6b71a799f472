//! Styling for the state toggle
//!
//! - [`colors`] - RGB565 color constants
//! - [`style`] - `ToggleStyle` paint configuration and `TextSize` presets

pub mod colors;
pub mod style;

pub use colors::{BLACK, DARK_GRAY, LIGHT_GRAY, WHITE, rgb888};
pub use style::{TextSize, ToggleStyle};
