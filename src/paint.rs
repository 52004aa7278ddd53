//! Two-state paint objects and the named paint set for one frame.
//!
//! # Binary Paints
//!
//! Every stroke on the watch face is drawn with a [`BinaryPaint`]: a style
//! holding two named configurations ("active" and "inactive") behind a
//! boolean. Flipping the boolean swaps only the color and the fill/stroke
//! mode; the stroke width is fixed at construction and never replayed by a
//! state switch. This is what lets the charge-progress sweep recolor sixty
//! ticks by toggling three paints instead of rebuilding styles per tick.
//!
//! # Alpha Overlay
//!
//! Mute mode dims the hands via an alpha overlay that is independent of the
//! active/inactive switch. Rgb565 has no alpha channel, so alpha is applied
//! at resolve time by scaling the RGB components toward black with
//! fixed-point integer math.
//!
//! # Paint Bucket
//!
//! [`PaintBucket`] owns the full named set needed for one frame and exposes
//! the bulk toggles: hand activation for ambient transitions, the mute
//! alpha overlay, and the lockstep tick group used by the charge sweep.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};

use crate::colors::{BLACK, WHITE};
use crate::config::{
    HOUR_STROKE_WIDTH,
    INSET_NARROWING,
    LARGE_TICK_STROKE_WIDTH,
    MINUTE_STROKE_WIDTH,
    SECOND_STROKE_WIDTH,
    SMALL_TICK_STROKE_WIDTH,
};
use crate::geometry::Vec2;

/// Mute-mode alpha for the hour and minute hands.
const MUTE_HAND_ALPHA: u8 = 100;

/// Mute-mode alpha for the second hand.
const MUTE_SECOND_ALPHA: u8 = 80;

/// Fully opaque alpha (no dimming).
const OPAQUE_ALPHA: u8 = 255;

// =============================================================================
// Binary Paint
// =============================================================================

/// Whether a paint fills shapes or strokes their outline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaintMode {
    Stroke,
    Fill,
}

/// A paint with two states.
///
/// Construction configures the active record and fixes the stroke width.
/// The inactive record defaults to white/stroke and can be overridden with
/// [`BinaryPaint::with_inactive`].
#[derive(Clone, Copy, Debug)]
pub struct BinaryPaint {
    active_color: Rgb565,
    active_mode: PaintMode,
    inactive_color: Rgb565,
    inactive_mode: PaintMode,
    stroke_width: u32,
    alpha: u8,
    active: bool,
}

impl BinaryPaint {
    /// Create a paint in the active state.
    pub const fn new(color: Rgb565, stroke_width: u32, mode: PaintMode) -> Self {
        Self {
            active_color: color,
            active_mode: mode,
            inactive_color: WHITE,
            inactive_mode: PaintMode::Stroke,
            stroke_width,
            alpha: OPAQUE_ALPHA,
            active: true,
        }
    }

    /// Override the inactive record (default: white, stroke).
    pub const fn with_inactive(mut self, color: Rgb565, mode: PaintMode) -> Self {
        self.inactive_color = color;
        self.inactive_mode = mode;
        self
    }

    /// Switch to the active settings.
    pub const fn activate(&mut self) {
        self.active = true;
    }

    /// Switch to the inactive settings.
    pub const fn deactivate(&mut self) {
        self.active = false;
    }

    /// Boolean form of [`activate`](Self::activate)/[`deactivate`](Self::deactivate).
    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Set the alpha overlay. Orthogonal to the active/inactive switch.
    pub const fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    #[inline]
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    #[inline]
    pub const fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Resolve the current color with the alpha overlay applied.
    pub fn color(&self) -> Rgb565 {
        let base = if self.active { self.active_color } else { self.inactive_color };
        dim_rgb565(base, self.alpha)
    }

    /// Resolve the current fill/stroke mode.
    pub const fn mode(&self) -> PaintMode {
        if self.active { self.active_mode } else { self.inactive_mode }
    }

    /// Style for line segments. Lines always stroke at the paint's width,
    /// whatever the fill/stroke mode says.
    pub fn line_style(&self) -> PrimitiveStyle<Rgb565> {
        PrimitiveStyle::with_stroke(self.color(), self.stroke_width)
    }

    /// Style for closed shapes (circles, rectangles), honoring the mode.
    pub fn shape_style(&self) -> PrimitiveStyle<Rgb565> {
        match self.mode() {
            PaintMode::Stroke => PrimitiveStyle::with_stroke(self.color(), self.stroke_width),
            PaintMode::Fill => PrimitiveStyle::with_fill(self.color()),
        }
    }
}

/// Scale an Rgb565 color toward black by `alpha` (255 = unchanged).
///
/// Components are extracted from the 5-6-5 packed form and scaled with
/// integer math; `alpha + 1` over 256 avoids a division while keeping
/// `alpha = 255` exact for every component value.
fn dim_rgb565(color: Rgb565, alpha: u8) -> Rgb565 {
    if alpha == OPAQUE_ALPHA {
        return color;
    }

    let raw = color.into_storage();
    let r = u32::from((raw >> 11) & 0x1F);
    let g = u32::from((raw >> 5) & 0x3F);
    let b = u32::from(raw & 0x1F);

    let scale = u32::from(alpha) + 1; // 256 = identity
    let r = (r * scale) >> 8;
    let g = (g * scale) >> 8;
    let b = (b * scale) >> 8;

    Rgb565::new(r as u8, g as u8, b as u8)
}

// =============================================================================
// Paint Bucket
// =============================================================================

/// The full named set of paints for one frame.
pub struct PaintBucket {
    pub hour: BinaryPaint,
    pub minute: BinaryPaint,
    pub second: BinaryPaint,

    pub hour_inset: BinaryPaint,
    pub minute_inset: BinaryPaint,

    pub small_tick: BinaryPaint,
    pub big_tick: BinaryPaint,
    pub big_tick_inset: BinaryPaint,

    pub date_box: BinaryPaint,
    pub date_box_inset: BinaryPaint,
    pub date_text: BinaryPaint,
}

impl PaintBucket {
    /// Build the paint set from the three palette colors.
    ///
    /// Tick paints get explicit inactive records: big ticks fall back to
    /// white, the big-tick inset to black (it overdraws in low-power modes).
    pub const fn new(hand_color: Rgb565, second_color: Rgb565, tick_color: Rgb565) -> Self {
        Self {
            hour: BinaryPaint::new(hand_color, HOUR_STROKE_WIDTH, PaintMode::Fill),
            minute: BinaryPaint::new(hand_color, MINUTE_STROKE_WIDTH, PaintMode::Fill),
            second: BinaryPaint::new(second_color, SECOND_STROKE_WIDTH, PaintMode::Fill),

            hour_inset: BinaryPaint::new(BLACK, HOUR_STROKE_WIDTH - INSET_NARROWING, PaintMode::Fill),
            minute_inset: BinaryPaint::new(BLACK, MINUTE_STROKE_WIDTH - INSET_NARROWING, PaintMode::Fill),

            small_tick: BinaryPaint::new(tick_color, SMALL_TICK_STROKE_WIDTH, PaintMode::Stroke),
            big_tick: BinaryPaint::new(tick_color, LARGE_TICK_STROKE_WIDTH, PaintMode::Stroke)
                .with_inactive(WHITE, PaintMode::Stroke),
            big_tick_inset: BinaryPaint::new(
                tick_color,
                LARGE_TICK_STROKE_WIDTH - INSET_NARROWING,
                PaintMode::Stroke,
            )
            .with_inactive(BLACK, PaintMode::Stroke),

            date_box: BinaryPaint::new(WHITE, 1, PaintMode::Fill),
            date_box_inset: BinaryPaint::new(BLACK, 2, PaintMode::Fill),
            date_text: BinaryPaint::new(WHITE, 2, PaintMode::Fill),
        }
    }

    /// Hands are active exactly when the display is interactive.
    pub const fn update_watch_hand_styles(&mut self, is_ambient: bool) {
        self.hour.set_active(!is_ambient);
        self.minute.set_active(!is_ambient);
        self.second.set_active(!is_ambient);
    }

    /// Reduce hand alpha in mute mode. The overlay is independent of the
    /// active/inactive color switch.
    pub const fn set_mute_mode(&mut self, in_mute_mode: bool) {
        self.hour.set_alpha(if in_mute_mode { MUTE_HAND_ALPHA } else { OPAQUE_ALPHA });
        self.minute.set_alpha(if in_mute_mode { MUTE_HAND_ALPHA } else { OPAQUE_ALPHA });
        self.second.set_alpha(if in_mute_mode { MUTE_SECOND_ALPHA } else { OPAQUE_ALPHA });
    }

    /// Set the whole tick group at once. The three tick paints always move
    /// in lockstep; the charge-progress sweep depends on it.
    pub fn set_tick_group_active(&mut self, active: bool) {
        for paint in [&mut self.big_tick, &mut self.big_tick_inset, &mut self.small_tick] {
            paint.set_active(active);
        }
    }

    pub fn set_ticks_active(&mut self) {
        self.set_tick_group_active(true);
    }

    pub fn set_ticks_inactive(&mut self) {
        self.set_tick_group_active(false);
    }

    pub fn draw_hour<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, start: Vec2, end: Vec2) {
        draw_line(target, start, end, &self.hour);
    }

    pub fn draw_minute<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, start: Vec2, end: Vec2) {
        draw_line(target, start, end, &self.minute);
    }

    pub fn draw_second<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, start: Vec2, end: Vec2) {
        draw_line(target, start, end, &self.second);
    }

    pub fn draw_hour_inset<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, start: Vec2, end: Vec2) {
        draw_line(target, start, end, &self.hour_inset);
    }

    pub fn draw_minute_inset<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, start: Vec2, end: Vec2) {
        draw_line(target, start, end, &self.minute_inset);
    }
}

/// Draw a single segment with the given paint.
pub fn draw_line<D: DrawTarget<Color = Rgb565>>(target: &mut D, start: Vec2, end: Vec2, paint: &BinaryPaint) {
    Line::new(start.to_point(), end.to_point())
        .into_styled(paint.line_style())
        .draw(target)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GREEN, RED};

    #[test]
    fn test_new_paint_starts_active() {
        let paint = BinaryPaint::new(RED, 5, PaintMode::Fill);
        assert!(paint.is_active());
        assert_eq!(paint.color(), RED);
        assert_eq!(paint.mode(), PaintMode::Fill);
    }

    #[test]
    fn test_inactive_defaults_to_white_stroke() {
        let mut paint = BinaryPaint::new(RED, 5, PaintMode::Fill);
        paint.deactivate();
        assert_eq!(paint.color(), WHITE);
        assert_eq!(paint.mode(), PaintMode::Stroke);
    }

    #[test]
    fn test_switch_swaps_color_and_mode_only() {
        let mut paint = BinaryPaint::new(GREEN, 16, PaintMode::Stroke).with_inactive(BLACK, PaintMode::Stroke);

        paint.deactivate();
        assert_eq!(paint.color(), BLACK);
        assert_eq!(paint.stroke_width(), 16, "width must survive a state switch");

        paint.activate();
        assert_eq!(paint.color(), GREEN);
        assert_eq!(paint.stroke_width(), 16);
    }

    #[test]
    fn test_set_active_boolean_form() {
        let mut paint = BinaryPaint::new(RED, 5, PaintMode::Fill);
        paint.set_active(false);
        assert!(!paint.is_active());
        paint.set_active(true);
        assert!(paint.is_active());
    }

    #[test]
    fn test_line_style_uses_resolved_color() {
        let mut paint = BinaryPaint::new(RED, 5, PaintMode::Fill);
        assert_eq!(paint.line_style().stroke_color, Some(RED));
        assert_eq!(paint.line_style().stroke_width, 5);
        paint.deactivate();
        assert_eq!(paint.line_style().stroke_color, Some(WHITE));
    }

    #[test]
    fn test_shape_style_honors_mode() {
        let paint = BinaryPaint::new(RED, 5, PaintMode::Fill);
        assert_eq!(paint.shape_style().fill_color, Some(RED));
        assert_eq!(paint.shape_style().stroke_color, None);

        let paint = BinaryPaint::new(GREEN, 2, PaintMode::Stroke);
        assert_eq!(paint.shape_style().stroke_color, Some(GREEN));
        assert_eq!(paint.shape_style().fill_color, None);
    }

    // -------------------------------------------------------------------------
    // Alpha Overlay Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_dim_identity_at_full_alpha() {
        assert_eq!(dim_rgb565(RED, 255), RED);
        assert_eq!(dim_rgb565(WHITE, 255), WHITE);
    }

    #[test]
    fn test_dim_to_black_at_zero_alpha() {
        assert_eq!(dim_rgb565(WHITE, 0), BLACK);
        assert_eq!(dim_rgb565(GREEN, 0), BLACK);
    }

    #[test]
    fn test_dim_reduces_components() {
        let dimmed = dim_rgb565(WHITE, 100);
        let raw = dimmed.into_storage();
        let r = (raw >> 11) & 0x1F;
        let g = (raw >> 5) & 0x3F;
        let b = raw & 0x1F;
        assert!(r < 31 && g < 63 && b < 31, "all components should shrink");
        assert!(r > 0 && g > 0 && b > 0, "alpha 100 should not black out white");
    }

    #[test]
    fn test_alpha_overlay_survives_state_switch() {
        let mut paint = BinaryPaint::new(RED, 5, PaintMode::Fill);
        paint.set_alpha(100);
        let dimmed_active = paint.color();
        assert_ne!(dimmed_active, RED);

        // Switching states must not reset the overlay.
        paint.deactivate();
        assert_eq!(paint.alpha(), 100);
        assert_ne!(paint.color(), WHITE, "inactive color should also be dimmed");
    }

    // -------------------------------------------------------------------------
    // Paint Bucket Tests
    // -------------------------------------------------------------------------

    fn bucket() -> PaintBucket {
        PaintBucket::new(WHITE, RED, GREEN)
    }

    #[test]
    fn test_hand_styles_follow_ambient() {
        let mut b = bucket();
        b.update_watch_hand_styles(true);
        assert!(!b.hour.is_active());
        assert!(!b.minute.is_active());
        assert!(!b.second.is_active());

        b.update_watch_hand_styles(false);
        assert!(b.hour.is_active());
        assert!(b.minute.is_active());
        assert!(b.second.is_active());
    }

    #[test]
    fn test_mute_mode_alpha_values() {
        let mut b = bucket();
        b.set_mute_mode(true);
        assert_eq!(b.hour.alpha(), 100);
        assert_eq!(b.minute.alpha(), 100);
        assert_eq!(b.second.alpha(), 80);

        b.set_mute_mode(false);
        assert_eq!(b.hour.alpha(), 255);
        assert_eq!(b.minute.alpha(), 255);
        assert_eq!(b.second.alpha(), 255);
    }

    #[test]
    fn test_tick_group_moves_in_lockstep() {
        let mut b = bucket();
        b.set_ticks_inactive();
        assert!(!b.big_tick.is_active());
        assert!(!b.big_tick_inset.is_active());
        assert!(!b.small_tick.is_active());

        b.set_ticks_active();
        assert!(b.big_tick.is_active());
        assert!(b.big_tick_inset.is_active());
        assert!(b.small_tick.is_active());
    }

    #[test]
    fn test_inactive_tick_colors() {
        let mut b = bucket();
        b.set_ticks_inactive();
        assert_eq!(b.big_tick.color(), WHITE);
        assert_eq!(b.big_tick_inset.color(), BLACK);
        assert_eq!(b.small_tick.color(), WHITE);
    }

    #[test]
    fn test_inset_widths_are_narrower() {
        let b = bucket();
        assert_eq!(b.hour_inset.stroke_width(), b.hour.stroke_width() - 2);
        assert_eq!(b.minute_inset.stroke_width(), b.minute.stroke_width() - 2);
        assert_eq!(b.big_tick_inset.stroke_width(), b.big_tick.stroke_width() - 2);
    }
}
