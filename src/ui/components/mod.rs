// src/ui/components/mod.rs
//! UI components library

pub mod state_toggle;

pub use state_toggle::{MAX_SEGMENTS, MAX_TITLE_LEN, Segment, StateToggleButton};
