//! Rainbow cycle rendering.
//!
//! Pure functions: the same phase, pixel count and brightness always produce
//! the same pixels.

use crate::color::{Color, apply_brightness};
use palette::Srgb;

/// Milliseconds per rainbow phase step (~4 Hz over 256 steps, ~16 s per cycle).
pub const DEFAULT_EFFECT_TICK_MS: u64 = 62;

/// Number of distinct phase values before the rainbow repeats.
pub const PHASE_MODULUS: u64 = 256;

/// Maps a wheel position to a color.
///
/// The 0-255 range is split into three 85-wide bands walking
/// red, green, blue and back to red. `brightness` scales every channel the
/// same way [`apply_brightness`] does.
pub fn wheel(position: u8, brightness: u8) -> Color {
    let position = 255 - position;
    let color = if position < 85 {
        Srgb::new(255 - position * 3, 0, position * 3)
    } else if position < 170 {
        let position = position - 85;
        Srgb::new(0, position * 3, 255 - position * 3)
    } else {
        let position = position - 170;
        Srgb::new(position * 3, 255 - position * 3, 0)
    };

    apply_brightness(color, brightness)
}

/// Fills `pixels` with one full hue revolution shifted by `phase`.
pub fn rainbow_cycle(pixels: &mut [Color], phase: u8, brightness: u8) {
    let count = pixels.len();
    for (index, pixel) in pixels.iter_mut().enumerate() {
        let offset = index * 256 / count;
        #[allow(clippy::cast_possible_truncation)]
        let position = ((offset + usize::from(phase)) & 0xFF) as u8;
        *pixel = wheel(position, brightness);
    }
}

/// Rainbow phase for a clock reading.
///
/// `tick_ms` of zero is treated as one.
#[allow(clippy::cast_possible_truncation)]
pub fn phase_at(elapsed_ms: u64, tick_ms: u64) -> u8 {
    ((elapsed_ms / tick_ms.max(1)) % PHASE_MODULUS) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;

    #[test]
    fn wheel_band_edges() {
        assert_eq!(wheel(0, 255), Srgb::new(255, 0, 0));
        assert_eq!(wheel(85, 255), Srgb::new(0, 255, 0));
        assert_eq!(wheel(170, 255), Srgb::new(0, 0, 255));
        assert_eq!(wheel(255, 255), Srgb::new(255, 0, 0));
    }

    #[test]
    fn wheel_inside_bands() {
        // 255 - 64 = 191, third band, offset 21
        assert_eq!(wheel(64, 255), Srgb::new(63, 192, 0));
        // 255 - 128 = 127, second band, offset 42
        assert_eq!(wheel(128, 255), Srgb::new(0, 126, 129));
        // 255 - 192 = 63, first band
        assert_eq!(wheel(192, 255), Srgb::new(66, 0, 189));
    }

    #[test]
    fn wheel_applies_brightness() {
        assert_eq!(wheel(85, 128), Srgb::new(0, 128, 0));
        assert_eq!(wheel(42, 0), BLACK);
    }

    #[test]
    fn empty_strip_is_a_no_op() {
        let mut pixels: [Color; 0] = [];
        rainbow_cycle(&mut pixels, 17, 255);
    }

    #[test]
    fn phase_wraps_at_modulus() {
        assert_eq!(phase_at(0, 62), 0);
        assert_eq!(phase_at(61, 62), 0);
        assert_eq!(phase_at(62 * 3, 62), 3);
        assert_eq!(phase_at(62 * 256, 62), 0);
        assert_eq!(phase_at(62 * 257 + 10, 62), 1);
    }

    #[test]
    fn zero_tick_does_not_divide_by_zero() {
        assert_eq!(phase_at(300, 0), 44);
    }
}
