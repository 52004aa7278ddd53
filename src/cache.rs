//! Date-keyed background bitmap cache.
//!
//! Rendering the dial background (photo + sixty ticks + date box) is the
//! expensive part of a frame, and it only changes once per calendar day.
//! [`CachedBackgrounds`] memoizes one pre-rendered bitmap per display mode,
//! tagged with the date it was rendered for. The triple is replaced
//! atomically; there is never more than one live entry, so no general cache
//! structure is needed — just a tag comparison.
//!
//! The raw (un-ticked) backgrounds are also held here for the live charging
//! path, which bypasses the cache entirely because the charge sweep changes
//! between frames. Black mode carries no raw image; its fallback is a solid
//! black fill, which is defined behavior rather than an error.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::bitmap::Bitmap;
use crate::colors::BLACK;
use crate::state::DisplayMode;

/// One atomically-replaced set of pre-rendered backgrounds.
struct CachedSet {
    color: Bitmap,
    gray: Bitmap,
    black: Bitmap,
    /// The date tag these three bitmaps were rendered for.
    date: i32,
}

/// Pre-rendered backgrounds for each display mode, keyed by date.
#[derive(Default)]
pub struct CachedBackgrounds {
    raw_color: Option<Bitmap>,
    raw_gray: Option<Bitmap>,
    cached: Option<CachedSet>,
}

impl CachedBackgrounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the host-supplied raw backgrounds (full color and, when the
    /// device renders greyscale ambient, a pre-desaturated variant).
    pub fn set_raw_backgrounds(&mut self, color: Bitmap, gray: Option<Bitmap>) {
        self.raw_color = Some(color);
        self.raw_gray = gray;
    }

    /// The raw background for a mode. Black mode never has one.
    pub fn raw_background(&self, mode: DisplayMode) -> Option<&Bitmap> {
        match mode {
            DisplayMode::Black => None,
            DisplayMode::Gray => self.raw_gray.as_ref(),
            DisplayMode::Full => self.raw_color.as_ref(),
        }
    }

    /// Whether the cached triple is stale for `date`.
    pub fn requires_rebuild(&self, date: i32) -> bool {
        self.cached.as_ref().is_none_or(|set| set.date != date)
    }

    /// Atomically replace the cached triple.
    ///
    /// All three bitmaps must have been rendered for the same date and
    /// surface size; the caller regenerates them together.
    pub fn set_cached_backgrounds(&mut self, color: Bitmap, gray: Bitmap, black: Bitmap, date: i32) {
        self.cached = Some(CachedSet { color, gray, black, date });
    }

    /// The cached bitmap for a mode.
    ///
    /// # Panics
    ///
    /// Panics if called before the first
    /// [`set_cached_backgrounds`](Self::set_cached_backgrounds): the host
    /// must establish surface size and backgrounds before the first frame.
    pub fn background(&self, mode: DisplayMode) -> &Bitmap {
        let set = self.cached.as_ref().expect("backgrounds not cached before first draw");
        match mode {
            DisplayMode::Black => &set.black,
            DisplayMode::Gray => &set.gray,
            DisplayMode::Full => &set.color,
        }
    }

    /// Blit the cached background for `mode` at the origin.
    pub fn draw_background<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, mode: DisplayMode) {
        self.background(mode).draw_to(target);
    }

    /// Blit the raw background for `mode`, falling back to a solid black
    /// fill when the mode carries no raw image. This is the live-charging
    /// path; ticks are drawn on top afterwards.
    pub fn draw_raw_background<D: DrawTarget<Color = Rgb565>>(&self, target: &mut D, mode: DisplayMode) {
        match self.raw_background(mode) {
            Some(background) => background.draw_to(target),
            None => {
                target.clear(BLACK).ok();
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
