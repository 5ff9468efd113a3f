//! MQTT topic names derived from a prefix.
//!
//! All topics are built once, at construction, into owned fixed-capacity
//! strings.

use heapless::String;

use crate::command::CommandKind;
use crate::config::ConfigError;

/// Capacity of a full topic string.
pub const MAX_TOPIC_LEN: usize = 128;

/// Longest topic suffix; bounds the prefix length.
const LONGEST_SUFFIX: &str = BRIGHTNESS_STATUS_SUFFIX;

/// Longest accepted topic prefix.
pub const MAX_PREFIX_LEN: usize = MAX_TOPIC_LEN - LONGEST_SUFFIX.len();

pub const STATUS_SUFFIX: &str = "/status";
pub const SWITCH_SUFFIX: &str = "/switch";
pub const BRIGHTNESS_STATUS_SUFFIX: &str = "/brightness/status";
pub const BRIGHTNESS_SET_SUFFIX: &str = "/brightness/set";
pub const RGB_STATUS_SUFFIX: &str = "/rgb/status";
pub const RGB_SET_SUFFIX: &str = "/rgb/set";
pub const EFFECT_STATUS_SUFFIX: &str = "/effect/status";
pub const EFFECT_SET_SUFFIX: &str = "/effect/set";

/// A full topic string.
pub type Topic = String<MAX_TOPIC_LEN>;

/// Status and command topics of one light.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topics {
    /// `P/status`, power state out.
    pub status: Topic,
    /// `P/switch`, power commands in.
    pub switch: Topic,
    /// `P/brightness/status`
    pub brightness_status: Topic,
    /// `P/brightness/set`
    pub brightness_set: Topic,
    /// `P/rgb/status`
    pub rgb_status: Topic,
    /// `P/rgb/set`
    pub rgb_set: Topic,
    /// `P/effect/status`
    pub effect_status: Topic,
    /// `P/effect/set`
    pub effect_set: Topic,
}

impl Topics {
    /// Builds every topic under `prefix`.
    ///
    /// # Errors
    /// `PrefixTooLong` if `prefix` exceeds [`MAX_PREFIX_LEN`] bytes.
    pub fn new(prefix: &str) -> Result<Self, ConfigError> {
        if prefix.len() > MAX_PREFIX_LEN {
            return Err(ConfigError::PrefixTooLong {
                max: MAX_PREFIX_LEN,
            });
        }

        Ok(Self {
            status: prefixed(prefix, STATUS_SUFFIX)?,
            switch: prefixed(prefix, SWITCH_SUFFIX)?,
            brightness_status: prefixed(prefix, BRIGHTNESS_STATUS_SUFFIX)?,
            brightness_set: prefixed(prefix, BRIGHTNESS_SET_SUFFIX)?,
            rgb_status: prefixed(prefix, RGB_STATUS_SUFFIX)?,
            rgb_set: prefixed(prefix, RGB_SET_SUFFIX)?,
            effect_status: prefixed(prefix, EFFECT_STATUS_SUFFIX)?,
            effect_set: prefixed(prefix, EFFECT_SET_SUFFIX)?,
        })
    }

    /// Topics the light subscribes to, in subscription order.
    pub fn command_topics(&self) -> [&str; 4] {
        [
            self.switch.as_str(),
            self.brightness_set.as_str(),
            self.rgb_set.as_str(),
            self.effect_set.as_str(),
        ]
    }

    /// Routes an inbound topic by exact match.
    pub fn command_kind(&self, topic: &str) -> Option<CommandKind> {
        if topic == self.switch.as_str() {
            Some(CommandKind::Power)
        } else if topic == self.brightness_set.as_str() {
            Some(CommandKind::Brightness)
        } else if topic == self.rgb_set.as_str() {
            Some(CommandKind::Rgb)
        } else if topic == self.effect_set.as_str() {
            Some(CommandKind::Effect)
        } else {
            None
        }
    }
}

fn prefixed(prefix: &str, suffix: &str) -> Result<Topic, ConfigError> {
    let too_long = |_| ConfigError::PrefixTooLong {
        max: MAX_PREFIX_LEN,
    };

    let mut topic = Topic::new();
    topic.push_str(prefix).map_err(too_long)?;
    topic.push_str(suffix).map_err(too_long)?;
    Ok(topic)
}
