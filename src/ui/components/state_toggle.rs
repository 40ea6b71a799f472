// src/ui/components/state_toggle.rs
//! Segmented state toggle with an animated selection pill

use alloc::boxed::Box;
use core::fmt;

use embassy_time::{Duration, Instant};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{CornerRadii, Line, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use log::{debug, info, warn};

use crate::config::{DEFAULT_ANIMATION_DURATION_MS, DEFAULT_CORNER_RADIUS, ToggleAttributes};
use crate::error::ToggleError;
use crate::ui::animation::{Interpolator, ValueAnimator};
use crate::ui::core::{Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::ToggleStyle;

/// Maximum number of segments in one toggle
pub const MAX_SEGMENTS: usize = 8;

/// Maximum segment title length in bytes
pub const MAX_TITLE_LEN: usize = 32;

/// One selectable labeled region of the toggle
pub struct Segment {
    title: heapless::String<MAX_TITLE_LEN>,
    action: Box<dyn FnMut()>,
}

impl Segment {
    pub fn new(title: &str, action: impl FnMut() + 'static) -> Result<Self, ToggleError> {
        let mut title_string = heapless::String::new();
        title_string
            .push_str(title)
            .map_err(|_| ToggleError::TitleTooLong { max: MAX_TITLE_LEN })?;

        Ok(Self {
            title: title_string,
            action: Box::new(action),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// A row of mutually exclusive segments with a sliding selection pill
///
/// Each segment is `width / N` pixels wide. Tapping a segment (press and
/// release inside the same segment) runs its callback and animates the pill
/// over it. The pill's outer corners round off when it sits on the first or
/// last segment and square up in between.
///
/// Animations are driven by [`tick`](Self::tick); touch handling through
/// [`Touchable`] starts animations at the time of the most recent tick.
///
/// # Examples
/// ```ignore
/// let mut toggle = StateToggleButton::new(Rectangle::new(Point::new(10, 10), Size::new(300, 48)));
/// toggle.set_segments([
///     Segment::new("Day", || info!("day"))?,
///     Segment::new("Week", || info!("week"))?,
/// ])?;
///
/// loop {
///     toggle.tick(Instant::now());
///     if toggle.is_dirty() {
///         toggle.draw(&mut display)?;
///         toggle.mark_clean();
///     }
/// }
/// ```
pub struct StateToggleButton {
    bounds: Rectangle,
    segments: heapless::Vec<Segment, MAX_SEGMENTS>,
    segment_width: u32,
    style: ToggleStyle,
    corner_radius: f32,
    animation_duration: Duration,

    // Selection
    position: ValueAnimator,
    corner_radius_left: ValueAnimator,
    corner_radius_right: ValueAnimator,
    selection_rect: Rectangle,
    pressed_index: Option<usize>,
    last_tick: Instant,

    dirty: bool,
}

impl StateToggleButton {
    pub fn new(bounds: Rectangle) -> Self {
        let mut toggle = Self {
            bounds,
            segments: heapless::Vec::new(),
            segment_width: 0,
            style: ToggleStyle::default(),
            corner_radius: DEFAULT_CORNER_RADIUS,
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS as u64),
            position: ValueAnimator::new(0.0),
            corner_radius_left: ValueAnimator::new(DEFAULT_CORNER_RADIUS),
            corner_radius_right: ValueAnimator::new(0.0),
            selection_rect: Rectangle::zero(),
            pressed_index: None,
            last_tick: Instant::from_ticks(0),
            dirty: true,
        };
        toggle.calculate_selection_rect();
        toggle
    }

    /// Build a toggle styled from declarative attributes
    pub fn from_attributes(bounds: Rectangle, attributes: &ToggleAttributes) -> Self {
        let mut toggle = Self::new(bounds).with_style(attributes.style());
        toggle.corner_radius = attributes.corner_radius;
        toggle.corner_radius_left.set(attributes.corner_radius);
        toggle.animation_duration = Duration::from_millis(attributes.animation_duration_ms as u64);
        toggle
    }

    pub fn with_style(mut self, style: ToggleStyle) -> Self {
        self.style = style;
        self.dirty = true;
        self
    }

    pub fn set_style(&mut self, style: ToggleStyle) {
        if self.style != style {
            self.style = style;
            self.dirty = true;
        }
    }

    pub fn style(&self) -> &ToggleStyle {
        &self.style
    }

    /// Replace the segments.
    ///
    /// The current pill position is kept. A single segment gets a pill
    /// rounded on both sides.
    pub fn set_segments<I>(&mut self, segments: I) -> Result<(), ToggleError>
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut list = heapless::Vec::new();
        for segment in segments {
            list.push(segment)
                .map_err(|_| ToggleError::TooManySegments { max: MAX_SEGMENTS })?;
        }

        self.segments = list;
        if self.segments.len() == 1 {
            self.corner_radius_right.set(self.corner_radius);
        }

        self.segment_width = match self.segments.len() {
            0 => 0,
            n => self.bounds.size.width / n as u32,
        };
        debug!(
            "StateToggle: {} segments, {}px each",
            self.segments.len(),
            self.segment_width
        );

        self.calculate_selection_rect();
        self.dirty = true;
        Ok(())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_width(&self) -> u32 {
        self.segment_width
    }

    /// Pill position in segments; fractional while animating
    pub fn selected_position(&self) -> f32 {
        self.position.value()
    }

    /// Segment the pill is resting on or moving towards
    pub fn selected_index(&self) -> usize {
        self.position.target().max(0.0) as usize
    }

    /// Current pill rectangle in display coordinates
    pub fn selection_rect(&self) -> Rectangle {
        self.selection_rect
    }

    /// Current (left, right) pill corner radii before confinement
    pub fn corner_radii(&self) -> (f32, f32) {
        (
            self.corner_radius_left.value(),
            self.corner_radius_right.value(),
        )
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_running()
            || self.corner_radius_left.is_running()
            || self.corner_radius_right.is_running()
    }

    /// Animate the pill to `index` without running the segment's callback.
    pub fn select_index(&mut self, index: usize, now: Instant) -> Result<(), ToggleError> {
        let len = self.segments.len();
        if index >= len {
            warn!("StateToggle: cannot select index {} of {}", index, len);
            return Err(ToggleError::IndexOutOfRange { index, len });
        }

        self.animate_to_index(index, now);
        Ok(())
    }

    /// Advance running animations to `now`.
    ///
    /// Returns true while any animation is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.last_tick = now;

        let moved = self.position.update(now)
            | self.corner_radius_left.update(now)
            | self.corner_radius_right.update(now);

        if moved {
            self.calculate_selection_rect();
            self.dirty = true;
        }

        self.is_animating()
    }

    /// Handle a touch event, starting any resulting animation at `now`
    pub fn handle_touch_at(&mut self, event: TouchEvent, now: Instant) -> TouchResult {
        match event {
            TouchEvent::Press(point) => {
                if !self.contains_point(point) {
                    self.pressed_index = None;
                    return TouchResult::NotHandled;
                }
                let local = self.to_local(point);
                self.pressed_index = self.segment_at(local.x);
                debug!(
                    "StateToggle: press at x={} -> {:?}",
                    local.x, self.pressed_index
                );
                TouchResult::Handled
            }
            TouchEvent::Drag(_) => {
                if self.pressed_index.is_some() {
                    TouchResult::Handled
                } else {
                    TouchResult::NotHandled
                }
            }
            TouchEvent::Release(point) => {
                let pressed = self.pressed_index.take();
                let local = self.to_local(point);
                let height = self.bounds.size.height as i32;

                let released = match self.segment_at(local.x) {
                    Some(index) if local.y > 0 && local.y < height => index,
                    _ => return TouchResult::NotHandled,
                };
                if pressed != Some(released) {
                    return TouchResult::NotHandled;
                }

                info!(
                    "StateToggle: selected segment {} ({})",
                    released,
                    self.segments[released].title()
                );
                (self.segments[released].action)();
                self.animate_to_index(released, now);

                TouchResult::Action(Action::SegmentSelected(released))
            }
        }
    }

    fn animate_to_index(&mut self, index: usize, now: Instant) {
        let last = self.segments.len().saturating_sub(1);
        let (left, right) = if index == 0 {
            let right = if self.segments.len() == 1 {
                self.corner_radius
            } else {
                0.0
            };
            (self.corner_radius, right)
        } else if index == last {
            (0.0, self.corner_radius)
        } else {
            (0.0, 0.0)
        };
        debug!(
            "StateToggle: animating to {} (corners {} / {})",
            index, left, right
        );

        let duration = self.animation_duration;
        self.corner_radius_left
            .animate_to(left, now, duration, Interpolator::AccelerateDecelerate);
        self.corner_radius_right
            .animate_to(right, now, duration, Interpolator::AccelerateDecelerate);
        self.position
            .animate_to(index as f32, now, duration, Interpolator::Decelerate);
        self.dirty = true;
    }

    /// Segment whose interior contains local `x`; boundaries belong to none
    fn segment_at(&self, x: i32) -> Option<usize> {
        let width = self.segment_width as i32;
        if width == 0 || x <= 0 {
            return None;
        }

        let index = (x / width) as usize;
        if x % width == 0 || index >= self.segments.len() {
            return None;
        }
        Some(index)
    }

    fn to_local(&self, point: TouchPoint) -> Point {
        point.to_point() - self.bounds.top_left
    }

    fn calculate_selection_rect(&mut self) {
        let left = libm::roundf(self.position.value() * self.segment_width as f32) as i32;
        self.selection_rect = Rectangle::new(
            self.bounds.top_left + Point::new(left, 0),
            Size::new(self.segment_width, self.bounds.size.height),
        );
    }

    /// Round a radius to pixels, confined to half the shorter side of `size`
    fn confine_radius(radius: f32, size: Size) -> Size {
        let limit = size.width.min(size.height) / 2;
        Size::new_equal((libm::roundf(radius.max(0.0)) as u32).min(limit))
    }
}

impl Drawable for StateToggleButton {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        // Track
        let track_radius = Self::confine_radius(self.corner_radius, self.bounds.size);
        RoundedRectangle::with_equal_corners(self.bounds, track_radius)
            .into_styled(self.style.background_style())
            .draw(display)?;

        if self.segments.is_empty() || self.segment_width == 0 {
            return Ok(());
        }

        // Pill
        let pill_size = self.selection_rect.size;
        let left = Self::confine_radius(self.corner_radius_left.value(), pill_size);
        let right = Self::confine_radius(self.corner_radius_right.value(), pill_size);
        let radii = CornerRadii {
            top_left: left,
            top_right: right,
            bottom_right: right,
            bottom_left: left,
        };
        RoundedRectangle::new(self.selection_rect, radii)
            .into_styled(self.style.selection_style())
            .draw(display)?;

        // Dividers and labels
        let origin = self.bounds.top_left;
        let width = self.segment_width as i32;
        let height = self.bounds.size.height as i32;
        let divider_margin = height / 8;
        let draw_dividers = self.style.divider_enabled && self.style.divider_width > 0;

        let text_style = MonoTextStyle::new(self.style.text_size.font(), self.style.text_color);
        let layout = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        for (index, segment) in self.segments.iter().enumerate() {
            let x = origin.x + index as i32 * width;

            if index != 0 && draw_dividers {
                Line::new(
                    Point::new(x, origin.y + divider_margin),
                    Point::new(x, origin.y + height - divider_margin),
                )
                .into_styled(self.style.divider_style())
                .draw(display)?;
            }

            let center = Point::new(x + width / 2, origin.y + height / 2);
            Text::with_text_style(segment.title(), center, text_style, layout).draw(display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for StateToggleButton {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        let now = self.last_tick;
        self.handle_touch_at(event, now)
    }
}

impl fmt::Debug for StateToggleButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateToggleButton")
            .field("bounds", &self.bounds)
            .field("segments", &self.segments)
            .field("position", &self.position.value())
            .field("pressed_index", &self.pressed_index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::DirtyRegion;
    use crate::ui::styling::{BLACK, TextSize, WHITE};
    use alloc::rc::Rc;
    use core::cell::Cell;
    use embedded_graphics::mock_display::MockDisplay;

    const PILL: Rgb565 = WHITE;
    const TRACK: Rgb565 = Rgb565::new(0, 0, 31);
    const DIVIDER: Rgb565 = Rgb565::new(31, 0, 0);

    fn at_ms(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn touch(x: u16, y: u16) -> TouchPoint {
        TouchPoint::new(x, y)
    }

    /// 60x20 toggle at the origin with three 20px segments and tap counters
    fn toggle_with_counters() -> (StateToggleButton, [Rc<Cell<u32>>; 3]) {
        let counters = [
            Rc::new(Cell::new(0)),
            Rc::new(Cell::new(0)),
            Rc::new(Cell::new(0)),
        ];
        let style = ToggleStyle::new()
            .with_background(TRACK)
            .with_selection(PILL)
            .with_text(BLACK, TextSize::Tiny);
        let mut toggle =
            StateToggleButton::new(Rectangle::new(Point::zero(), Size::new(60, 20))).with_style(style);

        let segments = ["A", "B", "C"].iter().zip(counters.iter()).map(|(title, counter)| {
            let counter = counter.clone();
            Segment::new(title, move || counter.set(counter.get() + 1)).unwrap()
        });
        toggle.set_segments(segments).unwrap();
        (toggle, counters)
    }

    fn tap(toggle: &mut StateToggleButton, x: u16, y: u16, now: Instant) -> TouchResult {
        toggle.handle_touch_at(TouchEvent::Press(touch(x, y)), now);
        toggle.handle_touch_at(TouchEvent::Release(touch(x, y)), now)
    }

    #[test]
    fn test_segment_width_divides_bounds() {
        let (toggle, _) = toggle_with_counters();
        assert_eq!(toggle.segment_width(), 20);
        assert_eq!(toggle.segments().len(), 3);
        assert_eq!(toggle.segments()[1].title(), "B");
    }

    #[test]
    fn test_initial_selection_state() {
        let (toggle, _) = toggle_with_counters();
        assert_eq!(toggle.selected_index(), 0);
        assert_eq!(
            toggle.selection_rect(),
            Rectangle::new(Point::zero(), Size::new(20, 20))
        );
        assert_eq!(toggle.corner_radii(), (DEFAULT_CORNER_RADIUS, 0.0));
    }

    #[test]
    fn test_tap_runs_callback_and_animates() {
        let (mut toggle, counters) = toggle_with_counters();

        let result = tap(&mut toggle, 30, 10, at_ms(0));
        assert_eq!(result, TouchResult::Action(Action::SegmentSelected(1)));
        assert_eq!(counters[1].get(), 1);
        assert_eq!(counters[0].get() + counters[2].get(), 0);
        assert_eq!(toggle.selected_index(), 1);

        assert!(toggle.tick(at_ms(350)));
        let mid = toggle.selected_position();
        assert!(mid > 0.5 && mid < 1.0, "decelerating pill at {}", mid);

        assert!(!toggle.tick(at_ms(700)));
        assert_eq!(toggle.selected_position(), 1.0);
        assert_eq!(toggle.selection_rect().top_left, Point::new(20, 0));
        assert_eq!(toggle.corner_radii(), (0.0, 0.0));
    }

    #[test]
    fn test_last_segment_rounds_right_corners() {
        let (mut toggle, _) = toggle_with_counters();
        tap(&mut toggle, 50, 10, at_ms(0));
        toggle.tick(at_ms(1000));
        assert_eq!(toggle.corner_radii(), (0.0, DEFAULT_CORNER_RADIUS));

        tap(&mut toggle, 10, 10, at_ms(1000));
        toggle.tick(at_ms(2000));
        assert_eq!(toggle.corner_radii(), (DEFAULT_CORNER_RADIUS, 0.0));
        assert_eq!(toggle.selected_position(), 0.0);
    }

    #[test]
    fn test_release_on_other_segment_is_ignored() {
        let (mut toggle, counters) = toggle_with_counters();
        toggle.handle_touch_at(TouchEvent::Press(touch(10, 10)), at_ms(0));
        assert_eq!(
            toggle.handle_touch_at(TouchEvent::Drag(touch(30, 10)), at_ms(0)),
            TouchResult::Handled
        );

        let result = toggle.handle_touch_at(TouchEvent::Release(touch(30, 10)), at_ms(0));
        assert_eq!(result, TouchResult::NotHandled);
        assert!(counters.iter().all(|c| c.get() == 0));
        assert!(!toggle.is_animating());
    }

    #[test]
    fn test_boundaries_and_edges_select_nothing() {
        let (mut toggle, counters) = toggle_with_counters();

        // Exactly on a segment boundary
        assert_eq!(tap(&mut toggle, 20, 10, at_ms(0)), TouchResult::NotHandled);
        // Top edge is outside the strict vertical range
        assert_eq!(tap(&mut toggle, 30, 0, at_ms(0)), TouchResult::NotHandled);
        // Outside the widget
        assert_eq!(
            toggle.handle_touch_at(TouchEvent::Press(touch(30, 40)), at_ms(0)),
            TouchResult::NotHandled
        );
        assert_eq!(
            toggle.handle_touch_at(TouchEvent::Drag(touch(30, 40)), at_ms(0)),
            TouchResult::NotHandled
        );

        assert!(counters.iter().all(|c| c.get() == 0));
    }

    #[test]
    fn test_reselecting_current_segment_runs_callback() {
        let (mut toggle, counters) = toggle_with_counters();
        tap(&mut toggle, 10, 10, at_ms(0));
        tap(&mut toggle, 10, 10, at_ms(10));
        assert_eq!(counters[0].get(), 2);
    }

    #[test]
    fn test_select_index_skips_callback() {
        let (mut toggle, counters) = toggle_with_counters();
        toggle.select_index(2, at_ms(0)).unwrap();
        toggle.tick(at_ms(700));

        assert_eq!(toggle.selected_position(), 2.0);
        assert!(counters.iter().all(|c| c.get() == 0));
    }

    #[test]
    fn test_select_index_out_of_range() {
        let (mut toggle, _) = toggle_with_counters();
        let result = toggle.select_index(3, at_ms(0));
        assert!(matches!(
            result,
            Err(ToggleError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(!toggle.is_animating());
    }

    #[test]
    fn test_retarget_mid_animation() {
        let (mut toggle, _) = toggle_with_counters();
        toggle.select_index(2, at_ms(0)).unwrap();
        toggle.tick(at_ms(100));
        let from = toggle.selected_position();
        assert!(from > 0.0);

        toggle.select_index(0, at_ms(100)).unwrap();
        toggle.tick(at_ms(100));
        assert_eq!(toggle.selected_position(), from);

        toggle.tick(at_ms(800));
        assert_eq!(toggle.selected_position(), 0.0);
    }

    #[test]
    fn test_single_segment_pill_rounded_both_sides() {
        let mut toggle = StateToggleButton::new(Rectangle::new(Point::zero(), Size::new(40, 20)));
        toggle
            .set_segments([Segment::new("Only", || {}).unwrap()])
            .unwrap();
        assert_eq!(toggle.corner_radii(), (DEFAULT_CORNER_RADIUS, DEFAULT_CORNER_RADIUS));

        toggle.select_index(0, at_ms(0)).unwrap();
        toggle.tick(at_ms(700));
        assert_eq!(toggle.corner_radii(), (DEFAULT_CORNER_RADIUS, DEFAULT_CORNER_RADIUS));
        assert_eq!(toggle.segment_width(), 40);
    }

    #[test]
    fn test_too_many_segments_keeps_previous_list() {
        let (mut toggle, _) = toggle_with_counters();
        let many = (0..MAX_SEGMENTS + 1).map(|_| Segment::new("x", || {}).unwrap());

        let result = toggle.set_segments(many);
        assert!(matches!(result, Err(ToggleError::TooManySegments { .. })));
        assert_eq!(toggle.segments().len(), 3);
    }

    #[test]
    fn test_title_too_long() {
        let title = "abcdefghijklmnopqrstuvwxyz0123456789";
        assert!(matches!(
            Segment::new(title, || {}),
            Err(ToggleError::TitleTooLong { max: MAX_TITLE_LEN })
        ));
    }

    #[test]
    fn test_empty_toggle_ignores_touches() {
        let mut toggle = StateToggleButton::new(Rectangle::new(Point::zero(), Size::new(60, 20)));
        assert_eq!(toggle.segment_width(), 0);
        assert_eq!(tap(&mut toggle, 30, 10, at_ms(0)), TouchResult::NotHandled);
        assert!(toggle.select_index(0, at_ms(0)).is_err());
    }

    #[test]
    fn test_touch_is_relative_to_bounds() {
        let mut toggle =
            StateToggleButton::new(Rectangle::new(Point::new(100, 50), Size::new(60, 20)));
        toggle
            .set_segments([
                Segment::new("A", || {}).unwrap(),
                Segment::new("B", || {}).unwrap(),
            ])
            .unwrap();

        let result = tap(&mut toggle, 145, 60, at_ms(0));
        assert_eq!(result, TouchResult::Action(Action::SegmentSelected(1)));

        toggle.tick(at_ms(700));
        assert_eq!(toggle.selection_rect().top_left, Point::new(130, 50));
    }

    #[test]
    fn test_touchable_uses_last_tick() {
        let (mut toggle, _) = toggle_with_counters();
        toggle.tick(at_ms(5000));

        toggle.handle_touch(TouchEvent::Press(touch(50, 10)));
        toggle.handle_touch(TouchEvent::Release(touch(50, 10)));

        assert!(toggle.tick(at_ms(5350)));
        assert!(!toggle.tick(at_ms(5700)));
        assert_eq!(toggle.selected_position(), 2.0);
    }

    #[test]
    fn test_from_attributes_applies_timing_and_radius() {
        let attrs = ToggleAttributes {
            corner_radius: 4.0,
            animation_duration_ms: 100,
            ..ToggleAttributes::default()
        };
        let mut toggle =
            StateToggleButton::from_attributes(Rectangle::new(Point::zero(), Size::new(60, 20)), &attrs);
        toggle
            .set_segments([
                Segment::new("A", || {}).unwrap(),
                Segment::new("B", || {}).unwrap(),
            ])
            .unwrap();

        assert_eq!(toggle.corner_radii(), (4.0, 0.0));
        toggle.select_index(1, at_ms(0)).unwrap();
        assert!(!toggle.tick(at_ms(100)));
        assert_eq!(toggle.corner_radii(), (0.0, 4.0));
    }

    #[test]
    fn test_tick_marks_dirty_only_when_moving() {
        let (mut toggle, _) = toggle_with_counters();
        toggle.mark_clean();
        toggle.tick(at_ms(10));
        assert!(!toggle.is_dirty());

        toggle.select_index(1, at_ms(10)).unwrap();
        toggle.mark_clean();
        toggle.tick(at_ms(200));
        assert!(toggle.is_dirty());
    }

    #[test]
    fn test_draw_track_pill_and_rounded_corner() {
        let (toggle, _) = toggle_with_counters();
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);

        toggle.draw(&mut display).unwrap();

        // Pill over the first segment, clear of the label
        assert_eq!(display.get_pixel(Point::new(5, 10)), Some(PILL));
        // Track over the second segment, above the label
        assert_eq!(display.get_pixel(Point::new(30, 1)), Some(TRACK));
        // Rounded outer corner leaves the very corner unpainted
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        // Label glyph pixels
        assert!(
            (26..35).any(|x| (6..15).any(|y| display.get_pixel(Point::new(x, y)) == Some(BLACK)))
        );
    }

    #[test]
    fn test_draw_after_moving_to_last_segment() {
        let (mut toggle, _) = toggle_with_counters();
        toggle.select_index(2, at_ms(0)).unwrap();
        toggle.tick(at_ms(700));

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        toggle.draw(&mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(45, 1)), Some(PILL));
        assert_eq!(display.get_pixel(Point::new(5, 10)), Some(TRACK));
        // Squared left corner of the pill sits inside the track
        assert_eq!(display.get_pixel(Point::new(40, 1)), Some(PILL));
    }

    #[test]
    fn test_draw_dividers_between_segments() {
        let (toggle, _) = toggle_with_counters();
        let style = *toggle.style();
        let toggle = toggle.with_style(style.with_divider(DIVIDER, 1));

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        toggle.draw(&mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(20, 10)), Some(DIVIDER));
        assert_eq!(display.get_pixel(Point::new(40, 10)), Some(DIVIDER));
        // Margin of height / 8 above the divider
        assert_eq!(display.get_pixel(Point::new(40, 1)), Some(TRACK));
        assert_ne!(display.get_pixel(Point::new(0, 10)), Some(DIVIDER));
    }

    #[test]
    fn test_press_outside_clears_pending_press() {
        let (mut toggle, counters) = toggle_with_counters();
        toggle.handle_touch_at(TouchEvent::Press(touch(10, 10)), at_ms(0));

        // The release for the first press never arrived
        assert_eq!(
            toggle.handle_touch_at(TouchEvent::Press(touch(10, 40)), at_ms(0)),
            TouchResult::NotHandled
        );
        assert_eq!(
            toggle.handle_touch_at(TouchEvent::Drag(touch(10, 40)), at_ms(0)),
            TouchResult::NotHandled
        );
        assert_eq!(
            toggle.handle_touch_at(TouchEvent::Release(touch(10, 10)), at_ms(0)),
            TouchResult::NotHandled
        );
        assert!(counters.iter().all(|c| c.get() == 0));
        assert!(!toggle.is_animating());
    }

    #[test]
    fn test_drag_after_boundary_press_not_handled() {
        let (mut toggle, _) = toggle_with_counters();
        assert_eq!(
            toggle.handle_touch_at(TouchEvent::Press(touch(20, 10)), at_ms(0)),
            TouchResult::Handled
        );
        assert_eq!(
            toggle.handle_touch_at(TouchEvent::Drag(touch(25, 10)), at_ms(0)),
            TouchResult::NotHandled
        );
    }

    #[test]
    fn test_set_segments_keeps_selected_position() {
        let (mut toggle, _) = toggle_with_counters();
        toggle.select_index(2, at_ms(0)).unwrap();
        toggle.tick(at_ms(700));

        toggle
            .set_segments(["X", "Y", "Z"].map(|title| Segment::new(title, || {}).unwrap()))
            .unwrap();

        assert_eq!(toggle.selected_position(), 2.0);
        assert_eq!(toggle.selected_index(), 2);
        assert_eq!(toggle.selection_rect().top_left, Point::new(40, 0));
        assert_eq!(toggle.segments()[2].title(), "Z");
    }

    #[test]
    fn test_empty_toggle_draws_only_track() {
        let style = ToggleStyle::new().with_background(TRACK).with_selection(PILL);
        let toggle =
            StateToggleButton::new(Rectangle::new(Point::zero(), Size::new(60, 20))).with_style(style);

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        toggle.draw(&mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(30, 10)), Some(TRACK));
        for x in 0..64 {
            for y in 0..64 {
                let pixel = display.get_pixel(Point::new(x, y));
                assert!(
                    pixel.is_none() || pixel == Some(TRACK),
                    "unexpected pixel at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_zero_width_dividers_draw_nothing() {
        let (toggle, _) = toggle_with_counters();
        let style = *toggle.style();
        let toggle = toggle.with_style(style.with_divider(DIVIDER, 0));
        assert!(toggle.style().divider_enabled);

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        toggle.draw(&mut display).unwrap();

        for x in 0..64 {
            for y in 0..64 {
                assert_ne!(display.get_pixel(Point::new(x, y)), Some(DIVIDER));
            }
        }
        assert_eq!(display.get_pixel(Point::new(15, 10)), Some(PILL));
    }

    #[test]
    fn test_dirty_region_follows_dirty_flag() {
        let (mut toggle, _) = toggle_with_counters();
        assert_eq!(
            toggle.dirty_region(),
            Some(DirtyRegion::new(Rectangle::new(Point::zero(), Size::new(60, 20))))
        );

        toggle.mark_clean();
        assert_eq!(toggle.dirty_region(), None);
    }
}
