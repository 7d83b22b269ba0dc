//! Domain entities for the subscriber registry.

pub mod chat_id;
pub mod subscriber_set;

pub use chat_id::ChatId;
pub use subscriber_set::SubscriberSet;
