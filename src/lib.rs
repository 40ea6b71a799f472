//! Animated segmented state toggle for embedded-graphics displays
//!
//! A row of mutually exclusive labeled segments with a rounded selection
//! pill that slides to the touched segment and fires that segment's callback.
//!
//! The crate is `#![no_std]` with `extern crate alloc` so the widget runs on
//! embedded targets and on desktop hosts (simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod ui;

pub use config::ToggleAttributes;
pub use error::ToggleError;
pub use ui::{Segment, StateToggleButton};
