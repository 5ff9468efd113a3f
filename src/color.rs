//! 8-bit color math shared by the fade pipeline and the rainbow effect.
//!
//! Colors are `palette::Srgb<u8>`. No gamma handling is done here; the
//! channel values are sent to the strip as-is.

use palette::Srgb;

/// An RGB pixel with 8-bit channels.
pub type Color = Srgb<u8>;

/// All channels off.
pub const BLACK: Color = Srgb::new(0, 0, 0);

/// Color shown after construction: a dim blue.
pub const DEFAULT_COLOR: Color = Srgb::new(0, 0, 48);

/// Brightness shown after construction.
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Scales one channel by `brightness / 255`, truncating.
#[inline]
pub fn scale_channel(value: u8, brightness: u8) -> u8 {
    // value * brightness <= 255 * 255, so the quotient always fits in a u8
    ((u16::from(value) * u16::from(brightness)) / 255) as u8
}

/// Scales every channel of `color` by `brightness / 255`.
///
/// `0` yields black and `255` yields `color` unchanged.
#[inline]
pub fn apply_brightness(color: Color, brightness: u8) -> Color {
    Srgb::new(
        scale_channel(color.red, brightness),
        scale_channel(color.green, brightness),
        scale_channel(color.blue, brightness),
    )
}

/// Linear interpolation of one 8-bit value.
///
/// Computed as `from + (to - from) * progress` in floating point, clamped to
/// `0..=255` and truncated.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp_channel(from: u8, to: u8, progress: f32) -> u8 {
    let from = f32::from(from);
    let to = f32::from(to);
    let value = from + (to - from) * progress;
    value.clamp(0.0, 255.0) as u8
}

/// Channel-wise [`lerp_channel`] between two colors.
#[inline]
pub fn interpolate(from: Color, to: Color, progress: f32) -> Color {
    Srgb::new(
        lerp_channel(from.red, to.red, progress),
        lerp_channel(from.green, to.green, progress),
        lerp_channel(from.blue, to.blue, progress),
    )
}
