//! Publishing telemetry records
//!
//! The journey loop only knows the narrow [`Publisher`] interface:
//! `publish(topic, key, value)` followed by `flush()`. Broker clients live outside
//! this crate; two in-crate implementations cover the binary and the tests.
//!
//! - **JsonLinesPublisher**: JSON-lines envelopes to any `std::io::Write`
//! - **InMemoryPublisher**: Records messages, can reject chosen topics

pub mod json_lines;
pub mod memory;
pub mod publisher;

// Re-export all public types for convenience
pub use json_lines::*;
pub use memory::*;
pub use publisher::*;
