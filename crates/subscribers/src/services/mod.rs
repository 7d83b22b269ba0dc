//! Business logic services for the subscriber registry.

pub mod registry;

pub use registry::{SubscriberRegistry, SUBSCRIBERS_KEY};
