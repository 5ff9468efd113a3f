//! LED strip controller with command handling, fades and frame rendering.
//!
//! Provides [`LightController`], which owns the light state and the pixel
//! buffer, reacts to MQTT commands and renders one frame per call to
//! [`LightController::render`].

use crate::client::MqttClient;
use crate::color::{BLACK, Color, apply_brightness};
use crate::command::{LightCommand, format_brightness, format_rgb};
use crate::config::{ConfigError, LightConfig};
use crate::effect::{phase_at, rainbow_cycle};
use crate::state::LightState;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::topic::Topics;
use crate::types::{Effect, EffectName, PowerState};

/// Every status message is published retained.
const RETAIN: bool = true;

/// Controls one LED strip from MQTT commands.
///
/// The controller never blocks: [`handle_message`](Self::handle_message)
/// and [`render`](Self::render) are meant to be called from the same loop.
/// Malformed commands are dropped without changing state or publishing.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `C` - MQTT client implementation type
/// * `T` - Time source implementation type
/// * `N` - Pixel buffer capacity
pub struct LightController<'t, I: TimeInstant, C: MqttClient, T: TimeSource<I>, const N: usize> {
    client: C,
    time_source: &'t T,
    epoch: I,
    config: LightConfig,
    topics: Topics,
    state: LightState,
    pixels: [Color; N],
}

impl<'t, I: TimeInstant, C: MqttClient, T: TimeSource<I>, const N: usize>
    LightController<'t, I, C, T, N>
{
    /// Creates a controller with default fades and effect timing.
    ///
    /// # Errors
    /// * `PrefixTooLong` - The prefix does not fit the topic buffers
    /// * `PixelCountExceedsCapacity` - `pixel_count` is larger than `N`
    pub fn new(
        topic_prefix: &str,
        pixel_count: usize,
        client: C,
        time_source: &'t T,
    ) -> Result<Self, ConfigError> {
        let config = LightConfig::builder(topic_prefix, pixel_count).build()?;
        Self::with_config(config, client, time_source)
    }

    /// Creates a controller from a validated configuration.
    ///
    /// # Errors
    /// * `PixelCountExceedsCapacity` - The configured pixel count is larger than `N`
    pub fn with_config(
        config: LightConfig,
        client: C,
        time_source: &'t T,
    ) -> Result<Self, ConfigError> {
        if config.pixel_count() > N {
            return Err(ConfigError::PixelCountExceedsCapacity {
                pixel_count: config.pixel_count(),
                capacity: N,
            });
        }

        let topics = Topics::new(config.topic_prefix())?;
        let state = LightState::new(config.initial_color(), config.initial_brightness());

        Ok(Self {
            client,
            time_source,
            epoch: time_source.now(),
            config,
            topics,
            state,
            pixels: [BLACK; N],
        })
    }

    /// Subscribes to the four command topics.
    pub fn subscribe(&mut self) {
        for topic in self.topics.command_topics() {
            debug!("subscribing to {}", topic);
            self.client.subscribe(topic);
        }
    }

    /// Routes an inbound message by exact topic match.
    ///
    /// Messages on unknown topics and malformed payloads are ignored.
    pub fn handle_message(&mut self, topic: &str, payload: &str) {
        let Some(kind) = self.topics.command_kind(topic) else {
            trace!("ignoring message on {}", topic);
            return;
        };

        match LightCommand::parse(kind, payload) {
            Ok(command) => self.apply(command),
            Err(err) => debug!("dropping {} command: {}", kind, err),
        }
    }

    /// Applies a validated command.
    pub fn apply(&mut self, command: LightCommand) {
        match command {
            LightCommand::Power(PowerState::On) => self.turn_on(),
            LightCommand::Power(PowerState::Off) => self.turn_off(),
            LightCommand::Brightness(brightness) => self.set_brightness(brightness),
            LightCommand::Rgb(color) => self.set_color(color),
            LightCommand::Effect(name) => self.set_effect(name),
        }
    }

    fn turn_on(&mut self) {
        if self.state.is_on() {
            return;
        }

        debug!("power on");
        self.state.power = PowerState::On;
        let color = self.state.previous_color;
        let brightness = self.state.previous_brightness;
        self.state
            .start_fade(color, brightness, self.config.slow_fade_step());

        self.publish_state();
        self.publish_brightness();
        self.publish_color();
    }

    fn turn_off(&mut self) {
        if !self.state.is_on() {
            return;
        }

        debug!("power off");
        self.state.power = PowerState::Off;
        self.state.start_fade(BLACK, 0, self.config.slow_fade_step());

        self.publish_state();
    }

    fn set_brightness(&mut self, brightness: u8) {
        if !self.state.is_on() {
            // restored on power-on
            self.state.previous_brightness = brightness;
            return;
        }

        debug!("brightness {}", brightness);
        let color = self.state.color;
        self.state
            .start_fade(color, brightness, self.config.fast_fade_step());
        self.publish_brightness();
    }

    fn set_color(&mut self, color: Color) {
        if !self.state.is_on() {
            // restored on power-on, effect left as is
            self.state.previous_color = color;
            return;
        }

        debug!("color {},{},{}", color.red, color.green, color.blue);
        let brightness = self.state.brightness;
        self.state
            .start_fade(color, brightness, self.config.fast_fade_step());
        self.publish_color();

        self.state.clear_effect();
        self.publish_effect();
    }

    fn set_effect(&mut self, name: EffectName) {
        debug!("effect {}", name.as_str());
        self.state.set_effect(name);
        self.publish_effect();
    }

    /// Renders the next frame and returns it.
    ///
    /// Advances a running fade by one step. Without an effect every pixel gets
    /// the same color; with an effect the fade only drives brightness and the
    /// rainbow supplies the colors.
    pub fn render(&mut self) -> &[Color] {
        let count = self.config.pixel_count();

        match self.state.effect {
            Effect::None => {
                let (color, brightness) = self.state.advance_fade();
                self.pixels[..count].fill(apply_brightness(color, brightness));
            }
            Effect::Rainbow => {
                let phase = self.phase();
                let (_, brightness) = self.state.advance_fade();
                rainbow_cycle(&mut self.pixels[..count], phase, brightness);
            }
        }

        &self.pixels[..count]
    }

    /// Current rainbow phase derived from the time source.
    pub fn phase(&self) -> u8 {
        let elapsed = self.time_source.now().duration_since(self.epoch);
        phase_at(elapsed.as_millis(), self.config.effect_tick_ms())
    }

    /// Publishes `ON` or `OFF` to the status topic.
    pub fn publish_state(&mut self) {
        self.client
            .publish(&self.topics.status, self.state.power.as_str(), RETAIN);
    }

    /// Publishes the target brightness.
    pub fn publish_brightness(&mut self) {
        let payload = format_brightness(self.state.brightness);
        self.client
            .publish(&self.topics.brightness_status, &payload, RETAIN);
    }

    /// Publishes the target color as `R,G,B`.
    pub fn publish_color(&mut self) {
        let payload = format_rgb(self.state.color);
        self.client.publish(&self.topics.rgb_status, &payload, RETAIN);
    }

    /// Publishes the effect name as last received.
    pub fn publish_effect(&mut self) {
        self.client.publish(
            &self.topics.effect_status,
            &self.state.effect_name,
            RETAIN,
        );
    }

    /// Publishes every status topic, e.g. after (re)connecting.
    pub fn publish_all(&mut self) {
        self.publish_state();
        self.publish_brightness();
        self.publish_color();
        self.publish_effect();
    }

    /// Returns the current light state.
    pub fn state(&self) -> &LightState {
        &self.state
    }

    /// Returns true while a fade is running.
    pub fn is_fading(&self) -> bool {
        self.state.is_fading()
    }

    /// Returns the number of pixels rendered per frame.
    pub fn pixel_count(&self) -> usize {
        self.config.pixel_count()
    }

    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    pub fn topics(&self) -> &Topics {
        &self.topics
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }
}
