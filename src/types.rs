//! Core value types of the light.

use heapless::String;

/// Maximum length in bytes of an effect name accepted from the wire.
pub const EFFECT_NAME_LEN: usize = 32;

/// The effect name exactly as received, echoed back on the status topic.
pub type EffectName = String<EFFECT_NAME_LEN>;

/// Whether the light is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Light output follows color, brightness and effect.
    On,
    /// Light is faded to black. Color and brightness commands are stored for later.
    Off,
}

impl PowerState {
    /// Wire payload for [`PowerState::On`].
    pub const ON: &'static str = "ON";

    /// Wire payload for [`PowerState::Off`].
    pub const OFF: &'static str = "OFF";

    /// Returns the wire payload for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            PowerState::On => Self::ON,
            PowerState::Off => Self::OFF,
        }
    }

    /// Returns true for [`PowerState::On`].
    pub fn is_on(self) -> bool {
        self == PowerState::On
    }
}

impl core::fmt::Display for PowerState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The procedural effect selected for rendering.
///
/// The wire accepts any string. `"none"` maps to [`Effect::None`] and every
/// other string, typos included, maps to [`Effect::Rainbow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Static color output.
    #[default]
    None,
    /// Rotating rainbow across the strip.
    Rainbow,
}

impl Effect {
    /// Wire name that disables procedural effects.
    pub const NONE_NAME: &'static str = "none";

    /// Maps a wire effect name to its variant.
    pub fn from_name(name: &str) -> Self {
        if name == Self::NONE_NAME {
            Effect::None
        } else {
            Effect::Rainbow
        }
    }

    /// Returns true when a procedural effect overrides the static color.
    pub fn is_active(self) -> bool {
        self != Effect::None
    }
}

/// Returns the effect name `"none"`.
pub fn none_effect_name() -> EffectName {
    let mut name = EffectName::new();
    // "none" always fits
    let _ = name.push_str(Effect::NONE_NAME);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_none_disables_effects() {
        assert_eq!(Effect::from_name("none"), Effect::None);
        assert_eq!(Effect::from_name("rainbow"), Effect::Rainbow);
        assert_eq!(Effect::from_name("None"), Effect::Rainbow);
        assert_eq!(Effect::from_name(""), Effect::Rainbow);
        assert!(!Effect::None.is_active());
        assert!(Effect::Rainbow.is_active());
    }

    #[test]
    fn power_state_payloads() {
        assert_eq!(PowerState::On.as_str(), "ON");
        assert_eq!(PowerState::Off.as_str(), "OFF");
        assert!(PowerState::On.is_on());
        assert!(!PowerState::Off.is_on());
    }

    #[test]
    fn default_effect_name_is_none() {
        assert_eq!(none_effect_name().as_str(), "none");
    }
}
