//! Subscriber set entity and its persisted encoding.
//!
//! The stored form is a JSON array of integers, e.g. `[111,222]`. Order is
//! insertion order and is preserved across encode/decode.

use std::collections::HashSet;

use tracing::debug;

use super::ChatId;
use crate::types::{SubscriberError, SubscriberResult};

/// Every chat currently opted in to notifications. No id appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriberSet {
    members: Vec<ChatId>,
}

impl SubscriberSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, chat_id: ChatId) -> bool {
        self.members.contains(&chat_id)
    }

    /// Add `chat_id`. Returns `false` if it was already a member.
    pub fn insert(&mut self, chat_id: ChatId) -> bool {
        if self.contains(chat_id) {
            return false;
        }
        self.members.push(chat_id);
        true
    }

    /// Remove `chat_id`. Returns `false` if it was not a member.
    pub fn remove(&mut self, chat_id: ChatId) -> bool {
        match self.members.iter().position(|member| *member == chat_id) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ChatId> + '_ {
        self.members.iter().copied()
    }

    pub fn as_slice(&self) -> &[ChatId] {
        &self.members
    }

    /// Parse a stored value. Blank input is the empty set; anything that is
    /// not a JSON array of integers is [`SubscriberError::Malformed`].
    pub fn decode(raw: &str) -> SubscriberResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::new());
        }

        let ids: Vec<ChatId> = serde_json::from_str(raw)
            .map_err(|e| SubscriberError::Malformed(e.to_string()))?;

        let stored = ids.len();
        let set: Self = ids.into_iter().collect();
        if set.len() != stored {
            debug!(
                stored,
                unique = set.len(),
                "collapsed duplicate chat ids in stored subscriber set"
            );
        }
        Ok(set)
    }

    /// Canonical stored form: compact JSON array in insertion order.
    pub fn encode(&self) -> SubscriberResult<String> {
        serde_json::to_string(&self.members)
            .map_err(|e| SubscriberError::Serialization(e.to_string()))
    }
}

impl FromIterator<ChatId> for SubscriberSet {
    fn from_iter<I: IntoIterator<Item = ChatId>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let members = iter.into_iter().filter(|id| seen.insert(*id)).collect();
        Self { members }
    }
}

impl<'a> IntoIterator for &'a SubscriberSet {
    type Item = &'a ChatId;
    type IntoIter = std::slice::Iter<'a, ChatId>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
