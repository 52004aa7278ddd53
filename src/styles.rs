//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `TextStyle` is const-constructible in embedded-graphics 0.8, so the date
//! alignment style lives in the binary's read-only data section. The date
//! numeral's color comes from a [`BinaryPaint`](crate::paint::BinaryPaint)
//! at draw time, so only the font reference is shared here.
//! Usage: `MonoTextStyle::new(DATE_FONT, paint.color())`.

use embedded_graphics::{
    mono_font::MonoFont,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

/// Centered text anchored at its vertical middle. A single anchor point
/// centers the date numeral inside the date box.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Large font for the day-of-month numeral (`ProFont` 24pt).
pub const DATE_FONT: &MonoFont = &PROFONT_24_POINT;
