//! Inbound command parsing and outbound status payloads.
//!
//! Every payload is validated completely before a [`LightCommand`] is built,
//! so a rejected message never leaves a partially applied change behind.

use core::fmt::Write;

use heapless::String;
use palette::Srgb;

use crate::color::Color;
use crate::types::{EffectName, PowerState};

/// Capacity of a formatted status payload (`"255,255,255"` needs 11 bytes).
pub const MSG_BUFFER_SIZE: usize = 20;

/// A formatted status payload.
pub type Payload = String<MSG_BUFFER_SIZE>;

/// Which command topic a message arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandKind {
    /// `switch`
    Power,
    /// `brightness/set`
    Brightness,
    /// `rgb/set`
    Rgb,
    /// `effect/set`
    Effect,
}

impl core::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            CommandKind::Power => "power",
            CommandKind::Brightness => "brightness",
            CommandKind::Rgb => "rgb",
            CommandKind::Effect => "effect",
        };
        f.write_str(name)
    }
}

/// A validated light command.
#[derive(Debug, Clone, PartialEq)]
pub enum LightCommand {
    /// Switch the light on or off.
    Power(PowerState),
    /// Set the brightness.
    Brightness(u8),
    /// Set a static color. Cancels any running effect while the light is on.
    Rgb(Color),
    /// Select an effect by name.
    Effect(EffectName),
}

impl LightCommand {
    /// Parses a payload received for `kind`.
    ///
    /// # Errors
    /// Returns the first validation failure. Nothing is partially parsed.
    pub fn parse(kind: CommandKind, payload: &str) -> Result<Self, CommandError> {
        match kind {
            CommandKind::Power => payload.parse().map(LightCommand::Power),
            CommandKind::Brightness => parse_brightness(payload).map(LightCommand::Brightness),
            CommandKind::Rgb => parse_rgb(payload).map(LightCommand::Rgb),
            CommandKind::Effect => EffectName::try_from(payload)
                .map(LightCommand::Effect)
                .map_err(|_| CommandError::EffectNameTooLong),
        }
    }

    /// Returns the kind of topic this command belongs to.
    pub fn kind(&self) -> CommandKind {
        match self {
            LightCommand::Power(_) => CommandKind::Power,
            LightCommand::Brightness(_) => CommandKind::Brightness,
            LightCommand::Rgb(_) => CommandKind::Rgb,
            LightCommand::Effect(_) => CommandKind::Effect,
        }
    }
}

/// Reasons a command payload is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Power payload is neither `ON` nor `OFF`.
    InvalidPower,
    /// A numeric field is not a decimal integer.
    InvalidNumber,
    /// A numeric field is outside `0..=255`.
    OutOfRange,
    /// An RGB payload does not have exactly three comma-separated fields.
    WrongFieldCount,
    /// Effect name exceeds [`crate::types::EFFECT_NAME_LEN`] bytes.
    EffectNameTooLong,
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CommandError::InvalidPower => write!(f, "power payload must be ON or OFF"),
            CommandError::InvalidNumber => write!(f, "value is not a decimal integer"),
            CommandError::OutOfRange => write!(f, "value is outside 0..=255"),
            CommandError::WrongFieldCount => {
                write!(f, "rgb payload must have three comma-separated fields")
            }
            CommandError::EffectNameTooLong => write!(f, "effect name is too long"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

impl core::str::FromStr for PowerState {
    type Err = CommandError;

    /// Case-sensitive: only `ON` and `OFF` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PowerState::ON => Ok(PowerState::On),
            PowerState::OFF => Ok(PowerState::Off),
            _ => Err(CommandError::InvalidPower),
        }
    }
}

/// Parses a decimal `0..=255` value. Surrounding whitespace is ignored.
pub fn parse_brightness(payload: &str) -> Result<u8, CommandError> {
    parse_channel(payload)
}

/// Parses an `"R,G,B"` payload.
///
/// The payload is split at its first and last comma. All three channels are
/// checked before a color is returned.
pub fn parse_rgb(payload: &str) -> Result<Color, CommandError> {
    let (first, last) = match (payload.find(','), payload.rfind(',')) {
        (Some(first), Some(last)) if first < last => (first, last),
        _ => return Err(CommandError::WrongFieldCount),
    };

    let red = parse_channel(&payload[..first])?;
    let green = parse_channel(&payload[first + 1..last])?;
    let blue = parse_channel(&payload[last + 1..])?;

    Ok(Srgb::new(red, green, blue))
}

fn parse_channel(field: &str) -> Result<u8, CommandError> {
    let value: i64 = field
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidNumber)?;
    u8::try_from(value).map_err(|_| CommandError::OutOfRange)
}

/// Formats a brightness status payload.
pub fn format_brightness(brightness: u8) -> Payload {
    let mut payload = Payload::new();
    // at most 3 digits
    let _ = write!(payload, "{}", brightness);
    payload
}

/// Formats an `"R,G,B"` status payload.
pub fn format_rgb(color: Color) -> Payload {
    let mut payload = Payload::new();
    // at most 11 bytes
    let _ = write!(payload, "{},{},{}", color.red, color.green, color.blue);
    payload
}
