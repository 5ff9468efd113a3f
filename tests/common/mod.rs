//! Shared test infrastructure for strip-light integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use strip_light::{
    Color, LightConfig, LightController, MqttClient, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock MQTT Client
// ============================================================================

/// A message the controller published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub topic: String,
    pub payload: String,
    pub retain: bool,
}

/// Mock client that records subscriptions and publishes
#[derive(Debug, Default)]
pub struct MockClient {
    pub subscriptions: Vec<String>,
    pub published: Vec<Published>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything published so far
    pub fn take_published(&mut self) -> Vec<Published> {
        std::mem::take(&mut self.published)
    }

    /// (topic, payload) pairs published so far
    pub fn messages(&self) -> Vec<(&str, &str)> {
        self.published
            .iter()
            .map(|p| (p.topic.as_str(), p.payload.as_str()))
            .collect()
    }
}

impl MqttClient for MockClient {
    fn subscribe(&mut self, topic: &str) {
        self.subscriptions.push(topic.to_string());
    }

    fn publish(&mut self, topic: &str, payload: &str, retain: bool) {
        self.published.push(Published {
            topic: topic.to_string(),
            payload: payload.to_string(),
            retain,
        });
    }
}

// ============================================================================
// Controller Helpers
// ============================================================================

pub const PREFIX: &str = "home/strip";
pub const PIXELS: usize = 8;
pub const CAPACITY: usize = 16;

pub type TestController<'t> = LightController<'t, TestInstant, MockClient, MockTimeSource, CAPACITY>;

/// Controller with default configuration
pub fn controller(timer: &MockTimeSource) -> TestController<'_> {
    LightController::new(PREFIX, PIXELS, MockClient::new(), timer).unwrap()
}

/// Controller with custom configuration
pub fn controller_with(timer: &MockTimeSource, config: LightConfig) -> TestController<'_> {
    LightController::with_config(config, MockClient::new(), timer).unwrap()
}

pub fn topic(suffix: &str) -> String {
    format!("{}{}", PREFIX, suffix)
}

/// Sends a message on `PREFIX` + `suffix`
pub fn send(light: &mut TestController<'_>, suffix: &str, payload: &str) {
    light.handle_message(&topic(suffix), payload);
}

/// Renders until the running fade completes and returns the last frame
pub fn settle(light: &mut TestController<'_>) -> Vec<Color> {
    for _ in 0..100_000 {
        let frame = light.render().to_vec();
        if !light.is_fading() {
            return frame;
        }
    }
    panic!("fade never completed");
}

/// Asserts every pixel of `frame` equals `color`
pub fn assert_uniform(frame: &[Color], color: Color) {
    assert!(!frame.is_empty());
    for (index, pixel) in frame.iter().enumerate() {
        assert_eq!(*pixel, color, "pixel {} differs", index);
    }
}
