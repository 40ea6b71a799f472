//! Paint configuration for the state toggle
//!
//! Provides the `ToggleStyle` struct and builder methods for the visual
//! appearance of the toggle (track, pill, labels, dividers), plus the
//! `TextSize` font presets labels are rendered with.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{
    FONT_5X8, FONT_6X10, FONT_7X13, FONT_9X15, FONT_10X20,
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::PrimitiveStyle;

use super::colors::{BLACK, DARK_GRAY, LIGHT_GRAY, WHITE};

// ============================================================================
// Text Size
// ============================================================================

/// Label size presets backed by the built-in mono fonts
///
/// - `Tiny`: 5x8
/// - `Small`: 6x10
/// - `Medium`: 7x13
/// - `Large`: 9x15
/// - `XLarge`: 10x20 (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Tiny,
    Small,
    Medium,
    Large,
    #[default]
    XLarge,
}

impl TextSize {
    const ALL: [TextSize; 5] = [
        TextSize::Tiny,
        TextSize::Small,
        TextSize::Medium,
        TextSize::Large,
        TextSize::XLarge,
    ];

    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Tiny => &FONT_5X8,
            TextSize::Small => &FONT_6X10,
            TextSize::Medium => &FONT_7X13,
            TextSize::Large => &FONT_9X15,
            TextSize::XLarge => &FONT_10X20,
        }
    }

    /// Largest preset whose glyph height fits in `pixels`.
    ///
    /// Falls back to `Tiny` when nothing fits.
    pub fn from_pixels(pixels: f32) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|size| size.font().character_size.height as f32 <= pixels)
            .unwrap_or(TextSize::Tiny)
    }
}

// ============================================================================
// Toggle Style
// ============================================================================

/// Visual style of a [`StateToggleButton`](crate::ui::StateToggleButton)
///
/// # Examples
///
/// ```ignore
/// let style = ToggleStyle::new()
///     .with_selection(WHITE)
///     .with_divider(LIGHT_GRAY, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleStyle {
    /// Track fill behind all segments
    pub background_color: Rgb565,

    /// Fill of the selection pill
    pub selection_color: Rgb565,

    /// Label color
    pub text_color: Rgb565,

    /// Label font preset
    pub text_size: TextSize,

    /// Divider line color
    pub divider_color: Rgb565,

    /// Whether dividers are drawn between segments
    pub divider_enabled: bool,

    /// Divider stroke width in pixels (0 = invisible)
    pub divider_width: u32,
}

impl Default for ToggleStyle {
    fn default() -> Self {
        Self {
            background_color: DARK_GRAY,
            selection_color: LIGHT_GRAY,
            text_color: BLACK,
            text_size: TextSize::default(),
            divider_color: WHITE,
            divider_enabled: false,
            divider_width: 0,
        }
    }
}

impl ToggleStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_selection(mut self, color: Rgb565) -> Self {
        self.selection_color = color;
        self
    }

    pub fn with_text(mut self, color: Rgb565, size: TextSize) -> Self {
        self.text_color = color;
        self.text_size = size;
        self
    }

    /// Enables dividers with the given color and stroke width
    pub fn with_divider(mut self, color: Rgb565, width: u32) -> Self {
        self.divider_color = color;
        self.divider_width = width;
        self.divider_enabled = true;
        self
    }

    pub(crate) fn background_style(&self) -> PrimitiveStyle<Rgb565> {
        PrimitiveStyle::with_fill(self.background_color)
    }

    pub(crate) fn selection_style(&self) -> PrimitiveStyle<Rgb565> {
        PrimitiveStyle::with_fill(self.selection_color)
    }

    pub(crate) fn divider_style(&self) -> PrimitiveStyle<Rgb565> {
        PrimitiveStyle::with_stroke(self.divider_color, self.divider_width)
    }
}
