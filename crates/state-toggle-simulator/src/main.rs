//! Desktop simulator for the state-toggle widget.
//!
//! Renders two toggles in an SDL2 window via `embedded-graphics-simulator`.
//! The lower toggle is styled from a postcard-encoded attribute blob.
//!
//! # Key bindings
//!
//! | Key | Action                                  |
//! |-----|-----------------------------------------|
//! | 1-4 | Select a segment of the upper toggle    |
//! | D   | Toggle dividers on the upper toggle     |
//! | Q   | Quit                                    |
//!
//! Mouse button down/up/move are forwarded as touch press/release/drag.

use std::time::Duration;

use embassy_time::Instant;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use state_toggle::ui::styling::WHITE;
use state_toggle::ui::{Drawable, ToggleStyle, TouchEvent, TouchPoint, TouchResult};
use state_toggle::{Segment, StateToggleButton, ToggleAttributes, ToggleError};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 320;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

const SCREEN_BACKGROUND: Rgb565 = Rgb565::BLACK;

// ---------------------------------------------------------------------------
// Toggle setup
// ---------------------------------------------------------------------------

fn range_toggle() -> Result<StateToggleButton, ToggleError> {
    let bounds = Rectangle::new(Point::new(20, 50), Size::new(280, 48));
    let mut toggle = StateToggleButton::new(bounds);

    toggle.set_segments(
        ["Day", "Week", "Month", "Year"]
            .into_iter()
            .map(|title| Segment::new(title, move || info!("Range → {}", title)))
            .collect::<Result<Vec<_>, _>>()?,
    )?;
    Ok(toggle)
}

/// Toggle styled from a serialized attribute blob, as firmware would load it.
fn mode_toggle() -> Result<StateToggleButton, ToggleError> {
    let blob = ToggleAttributes {
        background_color: [0x1D, 0x2F, 0x2B],
        selection_color: [0x5F, 0xB9, 0x8D],
        text_color: [0xFF, 0xFF, 0xFF],
        text_size: 15.0,
        divider_enabled: true,
        divider_width: 1,
        animation_duration_ms: 400,
        ..ToggleAttributes::default()
    }
    .to_bytes()?;

    let attributes = ToggleAttributes::from_bytes(&blob)?;
    let bounds = Rectangle::new(Point::new(40, 140), Size::new(240, 36));
    let mut toggle = StateToggleButton::from_attributes(bounds, &attributes);

    toggle.set_segments([
        Segment::new("Off", || info!("Mode → off"))?,
        Segment::new("Auto", || info!("Mode → auto"))?,
        Segment::new("On", || info!("Mode → on"))?,
    ])?;
    Ok(toggle)
}

/// Map an SDL keycode to a segment index.
fn keycode_to_index(keycode: Keycode) -> Option<usize> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(0),
        Keycode::Num2 | Keycode::Kp2 => Some(1),
        Keycode::Num3 | Keycode::Kp3 => Some(2),
        Keycode::Num4 | Keycode::Kp4 => Some(3),
        _ => None,
    }
}

fn to_touch(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<(), ToggleError> {
    env_logger::init();
    info!("Starting state-toggle simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: 1-4=Select  D=Dividers  Q=Quit");

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("State Toggle Simulator", &output_settings);

    let mut toggles = [range_toggle()?, mode_toggle()?];

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    // SimulatorDisplay's error type is Infallible; the Result is still checked.
    if let Err(e) = display.clear(SCREEN_BACKGROUND) {
        error!("Clear error: {:?}", e);
    }
    window.update(&display);

    'running: loop {
        let frame_start = std::time::Instant::now();
        let now = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            let touch = match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    if keycode == Keycode::D {
                        let style = *toggles[0].style();
                        let style = if style.divider_enabled {
                            ToggleStyle {
                                divider_enabled: false,
                                ..style
                            }
                        } else {
                            style.with_divider(WHITE, 2)
                        };
                        toggles[0].set_style(style);
                    }

                    if let Some(index) = keycode_to_index(keycode) {
                        if let Err(e) = toggles[0].select_index(index, now) {
                            error!("Select failed: {}", e);
                        }
                    }
                    continue;
                }

                SimulatorEvent::MouseButtonDown { point, .. } => TouchEvent::Press(to_touch(point)),
                SimulatorEvent::MouseButtonUp { point, .. } => TouchEvent::Release(to_touch(point)),
                SimulatorEvent::MouseMove { point } => TouchEvent::Drag(to_touch(point)),

                _ => continue,
            };

            for toggle in toggles.iter_mut() {
                if let TouchResult::Action(action) = toggle.handle_touch_at(touch, now) {
                    info!("Touch → action {:?}", action);
                }
            }
        }

        // --- Animation tick -----------------------------------------------
        for toggle in toggles.iter_mut() {
            toggle.tick(now);
        }

        // --- Render -------------------------------------------------------
        for toggle in toggles.iter_mut() {
            let Some(region) = toggle.dirty_region() else {
                continue;
            };

            // Clear behind the rounded track corners
            if let Err(e) = region
                .bounds
                .into_styled(PrimitiveStyle::with_fill(SCREEN_BACKGROUND))
                .draw(&mut display)
            {
                error!("Clear error: {:?}", e);
            }
            if let Err(e) = toggle.draw(&mut display) {
                error!("Draw error: {:?}", e);
            }
            toggle.mark_clean();
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
    Ok(())
}
