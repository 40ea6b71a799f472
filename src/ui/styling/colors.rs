//! Color definitions for the toggle
//!
//! Colors are RGB565, the 16-bit format of the target displays.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Neutral Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Pure black
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Light gray (`#CCCCCC`) - default selection pill
pub const LIGHT_GRAY: Rgb565 = rgb888(0xCC, 0xCC, 0xCC);

/// Dark gray (`#444444`) - default track background
pub const DARK_GRAY: Rgb565 = rgb888(0x44, 0x44, 0x44);

/// Convert an 8-bit-per-channel color to RGB565 by truncation
pub const fn rgb888(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}
