//! Wall-clock time to hand rotation angles.
//!
//! Each hand's angle is a continuous function of the time of day, including
//! the sub-unit fractions: the second hand sweeps through milliseconds, the
//! minute hand creeps as seconds pass, and the hour hand creeps between hour
//! marks. Nothing here steps or snaps.

use chrono::{NaiveTime, Timelike};

/// Degrees per second/minute mark on the dial (360 / 60).
const DEGREES_PER_UNIT: f32 = 6.0;

/// One hour spans five second-marks on the dial.
const HOUR_TO_SIXTY: f32 = 5.0;

const MINUTES_PER_HOUR: f32 = 60.0;
const SECONDS_PER_MINUTE: f32 = 60.0;
const SECONDS_PER_HOUR: f32 = MINUTES_PER_HOUR * SECONDS_PER_MINUTE;
const MILLIS_PER_SECOND: f32 = 1000.0;
const MILLIS_PER_MINUTE: f32 = MILLIS_PER_SECOND * SECONDS_PER_MINUTE;
const MILLIS_PER_HOUR: f32 = MILLIS_PER_SECOND * SECONDS_PER_HOUR;

/// Which hand an angle is being computed for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

/// Rotation angle in degrees for the given hand at the given time of day.
///
/// 0° is 12 o'clock; angles grow clockwise, matching
/// [`rotate_coordinate`](crate::geometry::rotate_coordinate).
pub fn hand_degrees(field: TimeField, time: NaiveTime) -> f32 {
    let hour12 = (time.hour() % 12) as f32;
    let minutes = time.minute() as f32;
    let seconds = time.second() as f32;
    let millis = (time.nanosecond() / 1_000_000) as f32;

    match field {
        TimeField::Hour => {
            DEGREES_PER_UNIT
                * HOUR_TO_SIXTY
                * (hour12 + minutes / MINUTES_PER_HOUR + seconds / SECONDS_PER_HOUR + millis / MILLIS_PER_HOUR)
        }
        TimeField::Minute => {
            DEGREES_PER_UNIT * (minutes + seconds / SECONDS_PER_MINUTE + millis / MILLIS_PER_MINUTE)
        }
        TimeField::Second => DEGREES_PER_UNIT * (seconds + millis / MILLIS_PER_SECOND),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, ms).unwrap()
    }

    #[test]
    fn test_second_hand_known_values() {
        assert_eq!(hand_degrees(TimeField::Second, time(0, 0, 0, 0)), 0.0);
        assert_eq!(hand_degrees(TimeField::Second, time(0, 0, 15, 0)), 90.0);
        assert_eq!(hand_degrees(TimeField::Second, time(0, 0, 30, 0)), 180.0);
        assert_eq!(hand_degrees(TimeField::Second, time(0, 0, 45, 0)), 270.0);
    }

    #[test]
    fn test_second_hand_millisecond_sweep() {
        // Halfway between two second marks.
        assert_eq!(hand_degrees(TimeField::Second, time(0, 0, 10, 500)), 63.0);
    }

    #[test]
    fn test_second_hand_strictly_increases_within_a_second() {
        // Continuity: degrees strictly increase as milliseconds advance.
        let mut prev = -1.0f32;
        for ms in (0..1000).step_by(50) {
            let deg = hand_degrees(TimeField::Second, time(0, 0, 30, ms));
            assert!(deg > prev, "angle did not increase at {ms}ms");
            prev = deg;
        }
    }

    #[test]
    fn test_minute_hand_creeps_with_seconds() {
        let on_the_minute = hand_degrees(TimeField::Minute, time(0, 20, 0, 0));
        let half_past = hand_degrees(TimeField::Minute, time(0, 20, 30, 0));
        assert_eq!(on_the_minute, 120.0);
        assert_eq!(half_past, 123.0);
    }

    #[test]
    fn test_hour_hand_known_values() {
        assert_eq!(hand_degrees(TimeField::Hour, time(3, 0, 0, 0)), 90.0);
        assert_eq!(hand_degrees(TimeField::Hour, time(6, 0, 0, 0)), 180.0);
        // The hour hand creeps halfway to the next mark at half past.
        assert_eq!(hand_degrees(TimeField::Hour, time(3, 30, 0, 0)), 105.0);
    }

    #[test]
    fn test_hour_hand_wraps_at_twelve() {
        // 12 o'clock and midnight both map to 0° (12-hour dial).
        assert_eq!(hand_degrees(TimeField::Hour, time(12, 0, 0, 0)), 0.0);
        assert_eq!(hand_degrees(TimeField::Hour, time(0, 0, 0, 0)), 0.0);
        // PM hours reuse the same positions.
        assert_eq!(hand_degrees(TimeField::Hour, time(15, 0, 0, 0)), 90.0);
    }

    #[test]
    fn test_full_revolution_bounds() {
        // Just before wraparound, each hand sits below 360°.
        let almost = time(11, 59, 59, 999);
        assert!(hand_degrees(TimeField::Second, almost) < 360.0);
        assert!(hand_degrees(TimeField::Minute, almost) < 360.0);
        assert!(hand_degrees(TimeField::Hour, almost) < 360.0);
    }
}
