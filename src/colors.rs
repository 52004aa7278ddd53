//! Color constants for the watch face.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to many embedded displays and requires no
//! conversion when writing to the display buffer. The `RgbColor` trait
//! provides pre-defined constants with guaranteed optimal values.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Background fill, inset strokes, date-box interior.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Default hand color and inactive tick color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Second hand and its center circle.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Ticks in the active state while charging.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Default Watch Palette
// =============================================================================

/// Hour and minute hand color.
pub const WATCH_HAND_COLOR: Rgb565 = WHITE;

/// Second hand color.
pub const WATCH_HAND_SECOND_COLOR: Rgb565 = RED;

/// Tick color in the active state (charge-progress sweep).
pub const WATCH_TICK_COLOR: Rgb565 = GREEN;
