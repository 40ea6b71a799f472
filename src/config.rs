//! Declarative toggle attributes
//!
//! The attribute set a toggle is styled from, with the stock defaults.
//! Attributes can be shipped as a `postcard` blob (e.g. from flash) and
//! decoded with [`ToggleAttributes::from_bytes`].

use serde::{Deserialize, Serialize};

use crate::error::ToggleError;
use crate::ui::styling::{TextSize, ToggleStyle, rgb888};

/// Default corner radius of the track and selection pill, in pixels
pub const DEFAULT_CORNER_RADIUS: f32 = 200.0;

/// Default duration of the selection animations
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 700;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ToggleAttributes {
    /// Track color as 8-bit RGB
    pub background_color: [u8; 3],
    pub selection_color: [u8; 3],
    pub text_color: [u8; 3],
    /// Requested label height in pixels
    pub text_size: f32,
    pub divider_color: [u8; 3],
    pub divider_enabled: bool,
    pub divider_width: u32,
    pub corner_radius: f32,
    pub animation_duration_ms: u32,
}

impl Default for ToggleAttributes {
    fn default() -> Self {
        Self {
            background_color: [0x44, 0x44, 0x44],
            selection_color: [0xCC, 0xCC, 0xCC],
            text_color: [0x00, 0x00, 0x00],
            text_size: 30.0,
            divider_color: [0xFF, 0xFF, 0xFF],
            divider_enabled: false,
            divider_width: 0,
            corner_radius: DEFAULT_CORNER_RADIUS,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

impl ToggleAttributes {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ToggleError> {
        postcard::from_bytes(bytes).map_err(ToggleError::InvalidAttributes)
    }

    pub fn to_bytes(&self) -> Result<alloc::vec::Vec<u8>, ToggleError> {
        postcard::to_allocvec(self).map_err(ToggleError::InvalidAttributes)
    }

    /// Paint configuration described by these attributes
    pub fn style(&self) -> ToggleStyle {
        let [br, bg, bb] = self.background_color;
        let [sr, sg, sb] = self.selection_color;
        let [tr, tg, tb] = self.text_color;
        let [dr, dg, db] = self.divider_color;

        ToggleStyle {
            background_color: rgb888(br, bg, bb),
            selection_color: rgb888(sr, sg, sb),
            text_color: rgb888(tr, tg, tb),
            text_size: TextSize::from_pixels(self.text_size),
            divider_color: rgb888(dr, dg, db),
            divider_enabled: self.divider_enabled,
            divider_width: self.divider_width,
        }
    }
}
