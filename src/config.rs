//! Controller configuration.
//!
//! Loading configuration from flash, files or the environment is left to the
//! host; this module only validates the values handed in.

use heapless::String;

use crate::color::{Color, DEFAULT_BRIGHTNESS, DEFAULT_COLOR};
use crate::effect::DEFAULT_EFFECT_TICK_MS;
use crate::fade::{FAST_FADE_STEP, SLOW_FADE_STEP};
use crate::topic::MAX_PREFIX_LEN;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Topic prefix does not leave room for the longest topic suffix.
    PrefixTooLong {
        /// Longest accepted prefix in bytes.
        max: usize,
    },
    /// More pixels requested than the controller buffer holds.
    PixelCountExceedsCapacity {
        /// Requested pixel count.
        pixel_count: usize,
        /// Buffer capacity of the controller.
        capacity: usize,
    },
    /// A fade step is not in `(0, 1]`.
    InvalidFadeStep,
    /// Effect tick is zero.
    InvalidEffectTick,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::PrefixTooLong { max } => {
                write!(f, "topic prefix is longer than {} bytes", max)
            }
            ConfigError::PixelCountExceedsCapacity {
                pixel_count,
                capacity,
            } => {
                write!(
                    f,
                    "pixel count {} exceeds buffer capacity of {}",
                    pixel_count, capacity
                )
            }
            ConfigError::InvalidFadeStep => {
                write!(f, "fade step must be greater than 0 and at most 1")
            }
            ConfigError::InvalidEffectTick => {
                write!(f, "effect tick must be at least 1 ms")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Validated controller configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LightConfig {
    topic_prefix: String<MAX_PREFIX_LEN>,
    pixel_count: usize,
    fast_fade_step: f32,
    slow_fade_step: f32,
    effect_tick_ms: u64,
    initial_color: Color,
    initial_brightness: u8,
}

impl LightConfig {
    /// Starts a configuration with default fades, effect timing and initial state.
    pub fn builder(topic_prefix: &str, pixel_count: usize) -> ConfigBuilder<'_> {
        ConfigBuilder::new(topic_prefix, pixel_count)
    }

    /// Topic prefix every topic is derived from.
    pub fn topic_prefix(&self) -> &str {
        &self.topic_prefix
    }

    /// Number of pixels rendered per frame.
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Fade step for color and brightness commands.
    pub fn fast_fade_step(&self) -> f32 {
        self.fast_fade_step
    }

    /// Fade step for power transitions.
    pub fn slow_fade_step(&self) -> f32 {
        self.slow_fade_step
    }

    /// Milliseconds per rainbow phase step.
    pub fn effect_tick_ms(&self) -> u64 {
        self.effect_tick_ms
    }

    pub fn initial_color(&self) -> Color {
        self.initial_color
    }

    pub fn initial_brightness(&self) -> u8 {
        self.initial_brightness
    }
}

/// Builder for [`LightConfig`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder<'a> {
    topic_prefix: &'a str,
    pixel_count: usize,
    fast_fade_step: f32,
    slow_fade_step: f32,
    effect_tick_ms: u64,
    initial_color: Color,
    initial_brightness: u8,
}

impl<'a> ConfigBuilder<'a> {
    /// Creates a builder with default settings.
    pub fn new(topic_prefix: &'a str, pixel_count: usize) -> Self {
        Self {
            topic_prefix,
            pixel_count,
            fast_fade_step: FAST_FADE_STEP,
            slow_fade_step: SLOW_FADE_STEP,
            effect_tick_ms: DEFAULT_EFFECT_TICK_MS,
            initial_color: DEFAULT_COLOR,
            initial_brightness: DEFAULT_BRIGHTNESS,
        }
    }

    /// Sets the fade step used for color and brightness commands.
    #[must_use]
    pub fn fast_fade_step(mut self, step: f32) -> Self {
        self.fast_fade_step = step;
        self
    }

    /// Sets the fade step used for power transitions.
    #[must_use]
    pub fn slow_fade_step(mut self, step: f32) -> Self {
        self.slow_fade_step = step;
        self
    }

    /// Sets how many milliseconds each rainbow phase step lasts.
    #[must_use]
    pub fn effect_tick_ms(mut self, tick_ms: u64) -> Self {
        self.effect_tick_ms = tick_ms;
        self
    }

    /// Sets the color shown after construction.
    #[must_use]
    pub fn initial_color(mut self, color: Color) -> Self {
        self.initial_color = color;
        self
    }

    /// Sets the brightness shown after construction.
    #[must_use]
    pub fn initial_brightness(mut self, brightness: u8) -> Self {
        self.initial_brightness = brightness;
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    /// * `PrefixTooLong` - Prefix exceeds [`MAX_PREFIX_LEN`] bytes
    /// * `InvalidFadeStep` - A fade step is not in `(0, 1]`
    /// * `InvalidEffectTick` - Effect tick is zero
    pub fn build(self) -> Result<LightConfig, ConfigError> {
        let mut topic_prefix: String<MAX_PREFIX_LEN> = String::new();
        topic_prefix
            .push_str(self.topic_prefix)
            .map_err(|_| ConfigError::PrefixTooLong {
                max: MAX_PREFIX_LEN,
            })?;

        if !valid_step(self.fast_fade_step) || !valid_step(self.slow_fade_step) {
            return Err(ConfigError::InvalidFadeStep);
        }

        if self.effect_tick_ms == 0 {
            return Err(ConfigError::InvalidEffectTick);
        }

        Ok(LightConfig {
            topic_prefix,
            pixel_count: self.pixel_count,
            fast_fade_step: self.fast_fade_step,
            slow_fade_step: self.slow_fade_step,
            effect_tick_ms: self.effect_tick_ms,
            initial_color: self.initial_color,
            initial_brightness: self.initial_brightness,
        })
    }
}

// NaN fails both comparisons
fn valid_step(step: f32) -> bool {
    step > 0.0 && step <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    #[test]
    fn defaults() {
        let config = LightConfig::builder("home/desk", 30).build().unwrap();
        assert_eq!(config.topic_prefix(), "home/desk");
        assert_eq!(config.pixel_count(), 30);
        assert_eq!(config.fast_fade_step(), FAST_FADE_STEP);
        assert_eq!(config.slow_fade_step(), SLOW_FADE_STEP);
        assert_eq!(config.effect_tick_ms(), 62);
        assert_eq!(config.initial_color(), Srgb::new(0, 0, 48));
        assert_eq!(config.initial_brightness(), 255);
    }

    #[test]
    fn overrides() {
        let config = LightConfig::builder("x", 4)
            .fast_fade_step(0.5)
            .slow_fade_step(1.0)
            .effect_tick_ms(10)
            .initial_color(Srgb::new(1, 2, 3))
            .initial_brightness(9)
            .build()
            .unwrap();
        assert_eq!(config.fast_fade_step(), 0.5);
        assert_eq!(config.slow_fade_step(), 1.0);
        assert_eq!(config.effect_tick_ms(), 10);
        assert_eq!(config.initial_color(), Srgb::new(1, 2, 3));
        assert_eq!(config.initial_brightness(), 9);
    }

    #[test]
    fn rejects_bad_fade_steps() {
        for step in [0.0, -0.1, 1.5, f32::NAN, f32::INFINITY] {
            assert_eq!(
                LightConfig::builder("x", 1).fast_fade_step(step).build(),
                Err(ConfigError::InvalidFadeStep)
            );
            assert_eq!(
                LightConfig::builder("x", 1).slow_fade_step(step).build(),
                Err(ConfigError::InvalidFadeStep)
            );
        }
    }

    #[test]
    fn rejects_zero_effect_tick() {
        assert_eq!(
            LightConfig::builder("x", 1).effect_tick_ms(0).build(),
            Err(ConfigError::InvalidEffectTick)
        );
    }

    #[test]
    fn rejects_long_prefix() {
        let prefix = "p".repeat(MAX_PREFIX_LEN + 1);
        assert_eq!(
            LightConfig::builder(&prefix, 1).build(),
            Err(ConfigError::PrefixTooLong {
                max: MAX_PREFIX_LEN
            })
        );
    }
}
