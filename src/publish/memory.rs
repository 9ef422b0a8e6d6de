//! In-memory publisher
//!
//! Keeps every accepted message in order. Topics can be marked as failing to
//! exercise the loop's handling of rejected publishes.

use std::collections::HashSet;

use crate::publish::{PublishError, PublishedMessage, Publisher};

/// Publisher that records messages in memory
#[derive(Debug, Default)]
pub struct InMemoryPublisher {
    messages: Vec<PublishedMessage>,
    failing_topics: HashSet<String>,
    flush_count: u64,
}

impl InMemoryPublisher {
    /// Create an empty publisher
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every message sent to `topic`
    pub fn with_failing_topic(mut self, topic: impl Into<String>) -> Self {
        self.failing_topics.insert(topic.into());
        self
    }

    /// Accepted messages in publish order
    pub fn messages(&self) -> &[PublishedMessage] {
        &self.messages
    }

    /// Accepted messages for one topic
    pub fn messages_for<'a>(&'a self, topic: &'a str) -> impl Iterator<Item = &'a PublishedMessage> + 'a {
        self.messages.iter().filter(move |message| message.topic == topic)
    }

    /// How many times `flush` was called
    pub fn flush_count(&self) -> u64 {
        self.flush_count
    }
}

impl Publisher for InMemoryPublisher {
    fn publish(&mut self, topic: &str, key: &str, value: &[u8]) -> Result<(), PublishError> {
        if self.failing_topics.contains(topic) {
            return Err(PublishError::Rejected {
                topic: topic.to_string(),
                reason: "topic marked as failing".to_string(),
            });
        }

        self.messages.push(PublishedMessage {
            topic: topic.to_string(),
            key: key.to_string(),
            value: value.to_vec(),
        });
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PublishError> {
        self.flush_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_messages_in_order() {
        let mut publisher = InMemoryPublisher::new();
        publisher.publish("a", "1", b"{}").unwrap();
        publisher.publish("b", "2", b"{}").unwrap();
        publisher.publish("a", "3", b"{}").unwrap();

        let keys: Vec<&str> = publisher.messages().iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
        assert_eq!(publisher.messages_for("a").count(), 2);
    }

    #[test]
    fn test_failing_topic_is_rejected() {
        let mut publisher = InMemoryPublisher::new().with_failing_topic("weather_data");

        let result = publisher.publish("weather_data", "1", b"{}");
        assert!(matches!(result, Err(PublishError::Rejected { .. })));
        assert!(publisher.messages().is_empty());

        publisher.publish("gps_data", "2", b"{}").unwrap();
        publisher.flush().unwrap();
        assert_eq!(publisher.messages().len(), 1);
        assert_eq!(publisher.flush_count(), 1);
    }
}
