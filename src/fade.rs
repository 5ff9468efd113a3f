//! Linear color and brightness fades advanced once per rendered frame.

use crate::color::{Color, interpolate, lerp_channel};

/// Progress added per frame for color and brightness commands.
pub const FAST_FADE_STEP: f32 = 0.003;

/// Progress added per frame for power on/off transitions.
pub const SLOW_FADE_STEP: f32 = 0.001;

/// Result of advancing a fade by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeFrame {
    /// Still fading. Holds the interpolated color and brightness, brightness not yet applied.
    InProgress {
        /// Interpolated color.
        color: Color,
        /// Interpolated brightness.
        brightness: u8,
    },
    /// Progress reached 1. The caller snaps to the fade target.
    Complete,
}

/// An in-flight linear interpolation between two (color, brightness) pairs.
///
/// Progress starts at 0 and only grows. The fade is complete once progress
/// reaches 1; there is no tolerance below that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from_color: Color,
    to_color: Color,
    from_brightness: u8,
    to_brightness: u8,
    progress: f32,
    step: f32,
}

impl Fade {
    /// Creates a fade at progress 0.
    ///
    /// `step` must be positive, otherwise the fade never completes.
    pub fn new(
        from_color: Color,
        from_brightness: u8,
        to_color: Color,
        to_brightness: u8,
        step: f32,
    ) -> Self {
        debug_assert!(step > 0.0, "fade step must be positive");
        Self {
            from_color,
            to_color,
            from_brightness,
            to_brightness,
            progress: 0.0,
            step,
        }
    }

    /// Adds one step of progress and reports the resulting frame.
    pub fn advance(&mut self) -> FadeFrame {
        self.progress += self.step;

        if self.is_complete() {
            FadeFrame::Complete
        } else {
            FadeFrame::InProgress {
                color: self.color(),
                brightness: self.brightness(),
            }
        }
    }

    /// Returns true once progress has reached 1.
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Color at the current progress.
    pub fn color(&self) -> Color {
        interpolate(self.from_color, self.to_color, self.progress.min(1.0))
    }

    /// Brightness at the current progress.
    pub fn brightness(&self) -> u8 {
        lerp_channel(self.from_brightness, self.to_brightness, self.progress.min(1.0))
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn from_color(&self) -> Color {
        self.from_color
    }

    pub fn to_color(&self) -> Color {
        self.to_color
    }

    pub fn from_brightness(&self) -> u8 {
        self.from_brightness
    }

    pub fn to_brightness(&self) -> u8 {
        self.to_brightness
    }
}
