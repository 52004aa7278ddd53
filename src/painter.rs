//! Watch face rendering orchestrator.
//!
//! [`WatchPainter`] turns wall-clock time and charge state into draw calls:
//! it owns the hand/tick geometry derived from the surface size, drives the
//! [`PaintBucket`] state transitions, and decides per frame whether the
//! background comes from the date-keyed cache or is rendered live.
//!
//! # Background Caching Policy
//!
//! Ordinary (non-charging) frames blit one pre-rendered bitmap; the
//! expensive render of background + sixty ticks + date box happens at most
//! once per calendar day, when the date tag goes stale. While charging the
//! cache is bypassed entirely: the charge percentage can change between
//! frames and the progress sweep must always reflect it, never a stale
//! bitmap.
//!
//! # Charge-Progress Tick Sweep
//!
//! All tick paints start active and are flipped inactive the moment the
//! loop index reaches the stop index, so the first `stop_index` positions
//! render in the charging color and the rest in the default color. The
//! post-loop "stop index >= 59" guard looks redundant but is not: without
//! it the final tick is left active when the switch never fires past 59.
//! Both rules are kept as-is; they interact.

use chrono::NaiveTime;
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Circle,
};

use crate::bitmap::Bitmap;
use crate::cache::CachedBackgrounds;
use crate::config::{
    BIG_INSET_OFFSET,
    BIG_TICK_OFFSET,
    CENTER_GAP_AND_CIRCLE_RADIUS,
    HOUR_HAND_LENGTH,
    MAJOR_TICK_INTERVAL,
    MINUTE_HAND_LENGTH,
    NUM_TICKS,
    SECOND_HAND_LENGTH,
    SECOND_HAND_LENGTH2,
    SMALL_TICK_END_OFFSET,
    SMALL_TICK_OFFSET,
};
use crate::date_box::DatePainter;
use crate::geometry::{Vec2, rotate_coordinate};
use crate::paint::{BinaryPaint, PaintBucket, draw_line};
use crate::state::{ChargingStatus, DisplayMode};
use crate::time_angles::{TimeField, hand_degrees};

/// The twelve-o'clock mark starts 10px further in than ordinary big ticks.
const TWELVE_O_CLOCK_EXTRA: f32 = 10.0;

/// Tick radii derived from the surface size, recomputed once per resize.
#[derive(Clone, Copy, Debug, Default)]
struct TickGeometry {
    small_tick_radius: f32,
    end_small_tick_radius: f32,
    big_tick_radius: f32,
    big_inset_radius: f32,
}

/// Renders the complete watch face: cached or live background, charge
/// sweep, hands, and the center circle.
pub struct WatchPainter {
    bucket: PaintBucket,
    center: Vec2,

    // Concrete hand lengths in pixels, derived from the surface half-width.
    second_hand_length: f32,
    second_hand_length2: f32,
    minute_hand_length: f32,
    hour_hand_length: f32,

    ticks: TickGeometry,
    backgrounds: CachedBackgrounds,
    date_painter: DatePainter,
}

impl WatchPainter {
    pub fn new(bucket: PaintBucket) -> Self {
        Self {
            bucket,
            center: Vec2::default(),
            second_hand_length: 0.0,
            second_hand_length2: 0.0,
            minute_hand_length: 0.0,
            hour_hand_length: 0.0,
            ticks: TickGeometry::default(),
            backgrounds: CachedBackgrounds::new(),
            date_painter: DatePainter::new(),
        }
    }

    /// The paint set, for host-driven transitions (ambient, mute mode).
    pub fn bucket_mut(&mut self) -> &mut PaintBucket {
        &mut self.bucket
    }

    /// The background cache (read-only; the painter manages its lifecycle).
    pub fn backgrounds(&self) -> &CachedBackgrounds {
        &self.backgrounds
    }

    /// Call when the surface resolution changes, before the first draw.
    ///
    /// Everything here is derived from the center point: hand lengths as
    /// fractions of the half-width, tick radii as fixed offsets from the
    /// rim.
    pub fn update_surface(&mut self, width: u32, height: u32) {
        self.center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);

        self.second_hand_length = self.center.x * SECOND_HAND_LENGTH;
        self.second_hand_length2 = self.center.x * SECOND_HAND_LENGTH2;
        self.minute_hand_length = self.center.x * MINUTE_HAND_LENGTH;
        self.hour_hand_length = self.center.x * HOUR_HAND_LENGTH;

        self.ticks = TickGeometry {
            small_tick_radius: self.center.x - SMALL_TICK_OFFSET,
            end_small_tick_radius: self.center.x - SMALL_TICK_END_OFFSET,
            big_tick_radius: self.center.x - BIG_TICK_OFFSET,
            big_inset_radius: self.center.x - BIG_INSET_OFFSET,
        };

        self.date_painter.on_surface_change(width, height);
    }

    /// Store the host-supplied raw backgrounds and regenerate the cached
    /// triple immediately. Call after [`update_surface`](Self::update_surface)
    /// whenever the surface or the background image changes.
    pub fn cache_backgrounds(&mut self, color: Bitmap, gray: Option<Bitmap>, date: i32) {
        self.backgrounds.set_raw_backgrounds(color, gray);
        self.regenerate_backgrounds(date);
    }

    /// Render the color, gray and black cached backgrounds for `date`.
    fn regenerate_backgrounds(&mut self, date: i32) {
        let color = self.generate_cached_background(DisplayMode::Full, date);
        let gray = self.generate_cached_background(DisplayMode::Gray, date);
        let black = self.generate_cached_background(DisplayMode::Black, date);
        self.backgrounds.set_cached_backgrounds(color, gray, black, date);
    }

    /// Render one cached background: the raw image (or solid black when the
    /// mode carries none), a non-charging tick sweep, and the date box.
    fn generate_cached_background(&mut self, mode: DisplayMode, date: i32) -> Bitmap {
        let width = (self.center.x * 2.0) as u32;
        let height = (self.center.y * 2.0) as u32;

        let mut result = Bitmap::black(Size::new(width, height));
        if let Some(raw) = self.backgrounds.raw_background(mode) {
            raw.draw_to(&mut result);
        }
        self.draw_ticks(&mut result, ChargingStatus::default(), mode);
        self.date_painter.draw_date(&mut result, &self.bucket, date);
        result
    }

    /// The tick index at which the charge-progress sweep stops.
    fn stop_charging_index(charging: ChargingStatus) -> i32 {
        if !charging.is_charging {
            return 0;
        }
        (charging.percent / 100.0 * NUM_TICKS as f32).round() as i32
    }

    /// A coordinate rotated around the surface center.
    fn rotate_coordinate(&self, degrees: f32, distance: f32) -> Vec2 {
        rotate_coordinate(self.center, degrees, distance)
    }

    /// Draw a single tick from `tick_radius` out to `end_radius`.
    fn draw_tick<D: DrawTarget<Color = Rgb565>>(
        &self,
        target: &mut D,
        tick_radius: f32,
        end_radius: f32,
        tick_index: i32,
        paint: &BinaryPaint,
    ) {
        let rotation_degrees = (tick_index * 360 / NUM_TICKS) as f32;
        let inner = self.rotate_coordinate(rotation_degrees, tick_radius);
        let outer = self.rotate_coordinate(rotation_degrees, end_radius);
        draw_line(target, inner, outer, paint);
    }

    /// Draw all sixty ticks, colored by the charge-progress sweep.
    ///
    /// Normally baked into the cached backgrounds; drawn live every frame
    /// while charging so the sweep always reflects the current percentage.
    fn draw_ticks<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        target: &mut D,
        charging: ChargingStatus,
        mode: DisplayMode,
    ) {
        let stop_charging_index = Self::stop_charging_index(charging);
        // Overlay the black insets in low-power modes, unless charging.
        let draw_black = mode < DisplayMode::Full && !charging.is_charging;
        self.bucket.set_ticks_active();

        for tick_index in 0..NUM_TICKS {
            if tick_index >= stop_charging_index {
                self.bucket.set_ticks_inactive();
            }
            if tick_index == 0 {
                self.draw_twelve_o_clock(target, draw_black);
                continue;
            }
            let is_major = tick_index % MAJOR_TICK_INTERVAL == 0;
            if is_major {
                self.draw_tick(target, self.ticks.big_tick_radius, self.center.x, tick_index, &self.bucket.big_tick);
                // Overdraw a narrower black stroke 1px inside the tick.
                if draw_black {
                    self.draw_tick(
                        target,
                        self.ticks.big_inset_radius,
                        self.center.x,
                        tick_index,
                        &self.bucket.big_tick_inset,
                    );
                }
            } else {
                self.draw_tick(
                    target,
                    self.ticks.small_tick_radius,
                    self.ticks.end_small_tick_radius,
                    tick_index,
                    &self.bucket.small_tick,
                );
            }
        }
        // Fix bug where these are left active: when the stop index sits at
        // or past the last tick, the in-loop switch never fires after it.
        if stop_charging_index >= NUM_TICKS - 1 {
            self.bucket.set_ticks_inactive();
        }
    }

    /// The twelve-o'clock mark: two adjacent parallel ticks.
    fn draw_twelve_o_clock<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, draw_black: bool) {
        let inner = self.rotate_coordinate(0.0, self.ticks.big_tick_radius - TWELVE_O_CLOCK_EXTRA);
        let outer = self.rotate_coordinate(0.0, self.center.x);
        Self::draw_thick_tick(target, &self.bucket.big_tick, inner, outer, 0.0, 1.0);

        if draw_black {
            let inner = self.rotate_coordinate(0.0, self.ticks.big_inset_radius - TWELVE_O_CLOCK_EXTRA);
            let outer = self.rotate_coordinate(0.0, self.center.x);
            Self::draw_thick_tick(target, &self.bucket.big_tick_inset, inner, outer, -1.0, 3.0);
        }
    }

    /// Draw two parallel ticks next to each other: one shifted left by half
    /// the stroke width, then a second one stroke-width-plus-margin to the
    /// right of it.
    fn draw_thick_tick<D: DrawTarget<Color = Rgb565>>(
        target: &mut D,
        paint: &BinaryPaint,
        mut inner: Vec2,
        mut outer: Vec2,
        left_offset: f32,
        right_offset: f32,
    ) {
        let tick_width = paint.stroke_width() as f32;
        inner.x -= tick_width * 0.5 - left_offset;
        outer.x -= tick_width * 0.5 - left_offset;
        draw_line(target, inner, outer, paint);
        inner.x += tick_width + right_offset;
        outer.x += tick_width + right_offset;
        draw_line(target, inner, outer, paint);
    }

    /// Draw the background, including ticks and the date box.
    ///
    /// While charging the raw background and a fresh sweep are drawn every
    /// call; otherwise the cached bitmap for `mode` is blitted, after
    /// regenerating the triple if `date` went stale.
    pub fn draw_background<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        target: &mut D,
        mode: DisplayMode,
        charge_status: ChargingStatus,
        date: i32,
    ) {
        if charge_status.is_charging {
            self.backgrounds.draw_raw_background(target, mode);
            self.draw_ticks(target, charge_status, mode);
            self.date_painter.draw_date(target, &self.bucket, date);
        } else {
            if self.backgrounds.requires_rebuild(date) {
                self.regenerate_backgrounds(date);
            }
            self.backgrounds.draw_background(target, mode);
        }
    }

    /// Draw the hands and the center circle for the given time of day.
    ///
    /// In [`DisplayMode::Full`] the second hand and its counterweight are
    /// drawn with a filled center circle. Below Full the hour and minute
    /// hands are overdrawn with their narrower black inset paints, giving
    /// hollow outlined hands, and the center circle uses the small-tick
    /// paint (stroked, not filled).
    pub fn draw_watch_face<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, time: NaiveTime, mode: DisplayMode) {
        let seconds_rotation = hand_degrees(TimeField::Second, time);
        let minutes_rotation = hand_degrees(TimeField::Minute, time);
        let hours_rotation = hand_degrees(TimeField::Hour, time);

        let hour_start = self.rotate_coordinate(hours_rotation, CENTER_GAP_AND_CIRCLE_RADIUS);
        let hour_end = self.rotate_coordinate(hours_rotation, self.hour_hand_length);

        let minute_start = self.rotate_coordinate(minutes_rotation, CENTER_GAP_AND_CIRCLE_RADIUS);
        let minute_end = self.rotate_coordinate(minutes_rotation, self.minute_hand_length);

        // The counterweight points 180° away from the hand.
        let second_start = self.rotate_coordinate(180.0 + seconds_rotation, self.second_hand_length2);
        let second_end = self.rotate_coordinate(seconds_rotation, self.second_hand_length);

        self.bucket.draw_hour(target, hour_start, hour_end);
        self.bucket.draw_minute(target, minute_start, minute_end);
        if mode == DisplayMode::Full {
            self.bucket.draw_second(target, second_start, second_end);
            self.draw_center_circle(target, &self.bucket.second);
        } else {
            // Overdraw the hour and minute hands in black.
            self.bucket.draw_hour_inset(target, hour_start, hour_end);
            self.bucket.draw_minute_inset(target, minute_start, minute_end);
            self.draw_center_circle(target, &self.bucket.small_tick);
        }
    }

    fn draw_center_circle<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, paint: &BinaryPaint) {
        Circle::with_center(self.center.to_point(), (CENTER_GAP_AND_CIRCLE_RADIUS * 2.0) as u32)
            .into_styled(paint.shape_style())
            .draw(target)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
