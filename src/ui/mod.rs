// src/ui/mod.rs
//! UI building blocks for the state toggle
//!
//! - Core traits for drawable and touchable elements
//! - Time-based value animation
//! - Toggle styling (colors, fonts, dividers)
//! - The `StateToggleButton` component

pub mod animation;
pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use animation::{Interpolator, ValueAnimator};
pub use components::{MAX_SEGMENTS, MAX_TITLE_LEN, Segment, StateToggleButton};
pub use self::core::{
    Action, DirtyRegion, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable,
};
pub use styling::{TextSize, ToggleStyle};
