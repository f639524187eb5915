//! Messaging panel records.

use crate::model::EntityId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Whether a conversation is one-to-one or a team thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationKind {
    Direct,
    Group,
}

/// Conversation list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: EntityId,
    pub name: String,
    pub last_message: String,
    pub timestamp: NaiveDateTime,
    pub unread: u32,
    /// Empty for direct conversations.
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ConversationKind,
}

impl Conversation {
    pub fn has_unread(&self) -> bool {
        self.unread > 0
    }
}

/// One message in an open thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: EntityId,
    pub sender: String,
    pub content: String,
    pub timestamp: NaiveDateTime,
    /// Sent by the signed-in user.
    pub is_own: bool,
}
