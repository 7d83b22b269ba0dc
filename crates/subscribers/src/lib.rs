//! # Slotwatch Subscribers Crate
//!
//! Keeps track of which Telegram chats want to hear about new appointment
//! slots. The whole subscriber set lives under one well-known key in a
//! [`KeyValueStore`](slotwatch_storage::KeyValueStore) and every operation
//! performs its own load → mutate → save cycle.
//!
//! ## Architecture
//!
//! - **Entities**: [`ChatId`] and [`SubscriberSet`], plus the persisted encoding
//! - **Services**: [`SubscriberRegistry`], the only writer of the set
//! - **Types**: outcomes and error definitions
//!
//! ## Usage
//!
//! ```rust
//! use slotwatch_storage::MemoryStore;
//! use slotwatch_subscribers::{ChatId, RegistrationOutcome, SubscriberRegistry};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let registry = SubscriberRegistry::new(MemoryStore::new());
//!
//! let outcome = registry.register(ChatId(42)).await;
//! assert_eq!(outcome, RegistrationOutcome::Registered);
//! assert_eq!(outcome.message(), "You are now registered for updates!");
//! # });
//! ```

pub mod entities;
pub mod services;
pub mod types;

pub use entities::{ChatId, SubscriberSet};
pub use services::{SubscriberRegistry, SUBSCRIBERS_KEY};
pub use types::{RegistrationOutcome, SubscriberError, SubscriberResult};
