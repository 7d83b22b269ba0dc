//! Shared types for the subscriber registry.

pub mod errors;
pub mod outcome;

pub use errors::{SubscriberError, SubscriberResult};
pub use outcome::RegistrationOutcome;
