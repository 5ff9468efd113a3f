#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LightController`**: Owns the light state and pixel buffer, handles MQTT commands and renders frames
//! - **`LightCommand`**: A validated power, brightness, RGB or effect command
//! - **`LightState`**: Power, target and previous color/brightness, running fade and effect
//! - **`Fade`**: Linear interpolation advanced by a fixed step on every rendered frame
//! - **`Effect`**: Static color (`None`) or the rotating rainbow (`Rainbow`)
//! - **`MqttClient`**: Trait to implement for your MQTT connection
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`LightConfig`**: Validated topic prefix, pixel count, fade steps and effect timing
//!
//! Colors are `Srgb<u8>`. Brightness is applied as `channel * brightness / 255`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod logging;

pub mod client;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod effect;
pub mod fade;
pub mod state;
pub mod time;
pub mod topic;
pub mod types;

pub use client::MqttClient;
pub use color::{BLACK, Color, apply_brightness};
pub use command::{CommandError, CommandKind, LightCommand};
pub use config::{ConfigBuilder, ConfigError, LightConfig};
pub use controller::LightController;
pub use effect::{rainbow_cycle, wheel};
pub use fade::{FAST_FADE_STEP, Fade, FadeFrame, SLOW_FADE_STEP};
pub use state::LightState;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use topic::Topics;
pub use types::{Effect, EffectName, PowerState};

#[cfg(feature = "std")]
pub use time::SystemClock;
