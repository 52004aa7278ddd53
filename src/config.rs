//! Watch face configuration constants.
//!
//! Layout values that do not depend on the surface size are computed at
//! compile time as `const`. Everything derived from the surface size (center
//! point, concrete hand lengths, tick radii) is recomputed once per resize
//! in [`WatchPainter::update_surface`](crate::painter::WatchPainter::update_surface),
//! never per frame.

use std::time::Duration;

// =============================================================================
// Display Configuration (simulator surface)
// =============================================================================

/// Demo surface width in pixels (square watch surface).
pub const SCREEN_WIDTH: u32 = 400;

/// Demo surface height in pixels.
pub const SCREEN_HEIGHT: u32 = 400;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time for interactive mode (~30 FPS, enough for a smoothly
/// sweeping second hand without burning the host CPU).
pub const FRAME_TIME: Duration = Duration::from_millis(33);

// =============================================================================
// Hand Geometry (fractions of the half-width, scaled on resize)
// =============================================================================

/// Hour hand length as a fraction of the surface half-width.
pub const HOUR_HAND_LENGTH: f32 = 0.7;

/// Minute hand length as a fraction of the surface half-width.
pub const MINUTE_HAND_LENGTH: f32 = 0.8;

/// Second hand forward length as a fraction of the surface half-width.
pub const SECOND_HAND_LENGTH: f32 = 0.9;

/// Second hand counterweight ("overshoot") length, pointing 180° away.
pub const SECOND_HAND_LENGTH2: f32 = 0.2;

/// Radius of the gap between the center point and each hand's base, and of
/// the circle drawn over the center.
pub const CENTER_GAP_AND_CIRCLE_RADIUS: f32 = 8.0;

// =============================================================================
// Tick Geometry
// =============================================================================

/// Number of tick positions around the dial (one per second mark).
pub const NUM_TICKS: i32 = 60;

/// Every 5th tick is a major (hour) mark.
pub const MAJOR_TICK_INTERVAL: i32 = 5;

/// Small tick start radius: `center.x - SMALL_TICK_OFFSET`.
pub const SMALL_TICK_OFFSET: f32 = 17.0;

/// Small tick end radius: `center.x - SMALL_TICK_END_OFFSET`.
pub const SMALL_TICK_END_OFFSET: f32 = 10.0;

/// Big tick start radius: `center.x - BIG_TICK_OFFSET`. Big ticks run from
/// here to the rim.
pub const BIG_TICK_OFFSET: f32 = 25.0;

/// Big tick inset start radius: `center.x - BIG_INSET_OFFSET`. The black
/// inset stroke starts 1px inside the big tick, narrowing the visible tick
/// in low-power display modes.
pub const BIG_INSET_OFFSET: f32 = 24.0;

// =============================================================================
// Stroke Widths
// =============================================================================

/// Hour hand stroke width.
pub const HOUR_STROKE_WIDTH: u32 = 15;

/// Minute hand stroke width.
pub const MINUTE_STROKE_WIDTH: u32 = 10;

/// Second hand stroke width.
pub const SECOND_STROKE_WIDTH: u32 = 5;

/// Major (hour mark) tick stroke width.
pub const LARGE_TICK_STROKE_WIDTH: u32 = 16;

/// Minor (second mark) tick stroke width.
pub const SMALL_TICK_STROKE_WIDTH: u32 = 2;

/// Inset strokes are 2px narrower than the stroke they overlay, leaving a
/// 1px visible outline on each side.
pub const INSET_NARROWING: u32 = 2;

// =============================================================================
// Date Box
// =============================================================================

/// Date box half-width in pixels.
pub const DATE_BOX_HALF_WIDTH: i32 = 20;

/// Date box half-height in pixels.
pub const DATE_BOX_HALF_HEIGHT: i32 = 18;

/// Date box center offset from the bottom edge of the surface.
pub const DATE_BOX_BOTTOM_OFFSET: f32 = 50.0;
