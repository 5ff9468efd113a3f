//! Messaging abstraction.

/// Trait for abstracting the MQTT connection.
///
/// Implement this for your MQTT client to let the controller subscribe to
/// command topics and publish status. Connection management, reconnects and
/// transport errors are handled by the implementation; these methods cannot
/// fail and must not block.
pub trait MqttClient {
    /// Subscribes to `topic`.
    fn subscribe(&mut self, topic: &str);

    /// Publishes `payload` to `topic`. The controller always sets `retain`.
    fn publish(&mut self, topic: &str, payload: &str, retain: bool);
}

impl<C: MqttClient + ?Sized> MqttClient for &mut C {
    fn subscribe(&mut self, topic: &str) {
        (**self).subscribe(topic);
    }

    fn publish(&mut self, topic: &str, payload: &str, retain: bool) {
        (**self).publish(topic, payload, retain);
    }
}
