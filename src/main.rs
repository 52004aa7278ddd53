// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_sign_loss)] // f32->u32 where we know sign is positive

//! Analog Watch Face Simulator.
//!
//! Renders a classic analog watch face with smoothly sweeping hands, sixty
//! dial ticks that double as a charge-progress indicator, a day-of-month
//! box, and a date-keyed background cache that makes the per-frame cost of
//! ordinary rendering a single bitmap blit.
//!
//! The rendering engine is host-agnostic: everything draws through generic
//! [`DrawTarget`]s, so the same code renders to the SDL simulator window
//! here and to the offscreen cache bitmaps. This binary is the simulator
//! host: it feeds the engine wall-clock time from [`chrono`] and fakes the
//! platform state (ambient mode, display capabilities, mute, battery) from
//! the keyboard.
//!
//! # Display Modes
//!
//! | Mode | When | Rendering |
//! |-------|------------------------------------|------------------------------------------|
//! | Full | Interactive | Color background, all hands, solid ticks |
//! | Gray | Ambient | Greyscale background, no second hand |
//! | Black | Ambient + low-bit or burn-in flags | Black background, hollow hands and ticks |
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----------|-------------------------------------------|
//! | `A` | Toggle ambient mode |
//! | `L` | Toggle low-bit ambient capability |
//! | `B` | Toggle burn-in protection capability |
//! | `M` | Toggle mute mode (dimmed hands) |
//! | `C` | Toggle charging |
//! | `Up/Down` | Adjust charge percentage in 5% steps |
//!
//! Key repeat is ignored for the toggles to prevent spam when holding keys.

mod bitmap;
mod cache;
mod colors;
mod config;
mod date_box;
mod geometry;
mod paint;
mod painter;
mod state;
mod styles;
mod time_angles;

use std::thread;

use bitmap::Bitmap;
use chrono::{Datelike, Local};
use colors::{BLACK, WATCH_HAND_COLOR, WATCH_HAND_SECOND_COLOR, WATCH_TICK_COLOR};
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use paint::PaintBucket;
use painter::WatchPainter;
use state::{ChargingStatus, DisplayMode};

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Analog Watch Face Sim", &output_settings);

    // Build the engine and establish the surface before the first frame.
    let bucket = PaintBucket::new(WATCH_HAND_COLOR, WATCH_HAND_SECOND_COLOR, WATCH_TICK_COLOR);
    let mut painter = WatchPainter::new(bucket);
    painter.update_surface(SCREEN_WIDTH, SCREEN_HEIGHT);

    // A real host supplies a dial photo pre-scaled to the surface; the
    // simulator generates one, plus the greyscale variant for Gray mode.
    let background = demo_background();
    let background_gray = desaturate(&background);
    painter.cache_backgrounds(background, Some(background_gray), Local::now().day() as i32);

    // ==========================================================================
    // Host State (keyboard-driven stand-ins for platform callbacks)
    // ==========================================================================

    let mut ambient = false;
    let mut low_bit_ambient = false;
    let mut burn_in_protection = false;
    let mut mute = false;
    let mut charging = ChargingStatus::default();

    // Initial clear before the first frame
    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        // Handle window events (close, key presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // A: Toggle ambient mode, flipping the hand paints with it
                        Keycode::A => {
                            ambient = !ambient;
                            painter.bucket_mut().update_watch_hand_styles(ambient);
                        }
                        // L: Toggle the low-bit ambient hardware capability
                        Keycode::L => low_bit_ambient = !low_bit_ambient,
                        // B: Toggle the burn-in protection hardware capability
                        Keycode::B => burn_in_protection = !burn_in_protection,
                        // M: Toggle mute mode (alpha-dimmed hands)
                        Keycode::M => {
                            mute = !mute;
                            painter.bucket_mut().set_mute_mode(mute);
                        }
                        // C: Toggle charging (switches to the live tick sweep)
                        Keycode::C => charging.is_charging = !charging.is_charging,
                        // Up/Down: Adjust the charge percentage
                        Keycode::Up => charging.percent = (charging.percent + 5.0).min(100.0),
                        Keycode::Down => charging.percent = (charging.percent - 5.0).max(0.0),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let mode = DisplayMode::from_ambient_flags(ambient, low_bit_ambient, burn_in_protection);
        let now = Local::now();
        let date = now.day() as i32;

        // Background (cached or live) first, hands on top. The background
        // covers the whole surface, so no per-frame clear is needed.
        painter.draw_background(&mut display, mode, charging, date);
        painter.draw_watch_face(&mut display, now.time(), mode);

        // Update window with rendered frame
        window.update(&display);

        // Sleep to maintain target frame rate (~30 FPS)
        thread::sleep(FRAME_TIME);
    }
}

/// Generate a procedural dial background: a dark blue radial gradient,
/// brightest at the center, fading to black at the rim. Stands in for the
/// photo a real host would supply.
fn demo_background() -> Bitmap {
    let size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut background = Bitmap::black(size);
    let center_x = SCREEN_WIDTH as f32 / 2.0;
    let center_y = SCREEN_HEIGHT as f32 / 2.0;

    for y in 0..SCREEN_HEIGHT as i32 {
        for x in 0..SCREEN_WIDTH as i32 {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            // Normalized distance: 0.0 at the center, 1.0 at the rim.
            let dist = (dx * dx + dy * dy).sqrt() / center_x;
            if dist > 1.0 {
                continue; // corners stay black
            }
            let fade = 1.0 - dist;
            let blue = (fade * 16.0) as u8 + 4;
            let green = (fade * 10.0) as u8;
            Pixel(Point::new(x, y), Rgb565::new(0, green, blue))
                .draw(&mut background)
                .ok();
        }
    }
    background
}

/// Per-pixel luma desaturation for the greyscale ambient background.
fn desaturate(src: &Bitmap) -> Bitmap {
    let size = src.size();
    let mut gray = Bitmap::black(size);

    for y in 0..size.height as i32 {
        for x in 0..size.width as i32 {
            let point = Point::new(x, y);
            let Some(color) = src.get_pixel(point) else {
                continue;
            };
            let raw = u32::from(color.into_storage());
            let r = ((raw >> 11) & 0x1F) * 255 / 31;
            let g = ((raw >> 5) & 0x3F) * 255 / 63;
            let b = (raw & 0x1F) * 255 / 31;
            // Standard luma weights, integer math.
            let luma = (r * 30 + g * 59 + b * 11) / 100;
            let shade = Rgb565::new((luma * 31 / 255) as u8, (luma * 63 / 255) as u8, (luma * 31 / 255) as u8);
            Pixel(point, shade).draw(&mut gray).ok();
        }
    }
    gray
}

// =============================================================================
// Unit Tests
// =============================================================================
