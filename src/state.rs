//! The light's mutable state.
//!
//! [`LightState`] is owned by the controller. Callers get a shared reference
//! for inspection; only the controller mutates it.

use crate::color::Color;
use crate::fade::{Fade, FadeFrame};
use crate::types::{Effect, EffectName, PowerState, none_effect_name};

/// Power, color, brightness, fade and effect of the light.
#[derive(Debug, Clone, PartialEq)]
pub struct LightState {
    /// On/off.
    pub power: PowerState,
    /// Target color. Equals the displayed color once no fade is running.
    pub color: Color,
    /// Target brightness.
    pub brightness: u8,
    /// Start color of the current fade. While off, the color restored on power-on.
    pub previous_color: Color,
    /// Start brightness of the current fade. While off, the brightness restored on power-on.
    pub previous_brightness: u8,
    /// The fade in flight, if any.
    pub fade: Option<Fade>,
    /// Effect selected by `effect_name`.
    pub effect: Effect,
    /// Effect name as last received.
    pub effect_name: EffectName,
}

impl LightState {
    /// Creates a powered-on state showing `color` at `brightness` with no effect.
    pub fn new(color: Color, brightness: u8) -> Self {
        Self {
            power: PowerState::On,
            color,
            brightness,
            previous_color: color,
            previous_brightness: brightness,
            fade: None,
            effect: Effect::None,
            effect_name: none_effect_name(),
        }
    }

    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Starts fading from the current target to a new one.
    ///
    /// The current target becomes the previous values. Any fade in flight is
    /// replaced.
    pub(crate) fn start_fade(&mut self, color: Color, brightness: u8, step: f32) {
        self.previous_color = self.color;
        self.previous_brightness = self.brightness;
        self.color = color;
        self.brightness = brightness;
        self.fade = Some(Fade::new(
            self.previous_color,
            self.previous_brightness,
            color,
            brightness,
            step,
        ));
    }

    /// Advances the fade by one frame and returns the color and brightness to show.
    ///
    /// Brightness is not yet applied to the returned color. Once the fade
    /// completes the exact target is returned and the fade is dropped.
    pub(crate) fn advance_fade(&mut self) -> (Color, u8) {
        if let Some(fade) = self.fade.as_mut() {
            match fade.advance() {
                FadeFrame::InProgress { color, brightness } => return (color, brightness),
                FadeFrame::Complete => {
                    trace!("fade complete");
                    self.fade = None;
                }
            }
        }

        (self.color, self.brightness)
    }

    /// Selects an effect by its wire name.
    pub(crate) fn set_effect(&mut self, name: EffectName) {
        self.effect = Effect::from_name(&name);
        self.effect_name = name;
    }

    /// Returns to static color output.
    pub(crate) fn clear_effect(&mut self) {
        self.effect = Effect::None;
        self.effect_name = none_effect_name();
    }
}
