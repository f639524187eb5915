//! Messaging page: conversation list, open thread and compose box.

use crate::model::conversation::{Conversation, Message};
use crate::model::{find_by_id, EntityId};
use crate::page::{Intent, Reducer};
use crate::search::filter::filter_items;
use crate::search::query::TextQuery;
use chrono::NaiveDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagesEvent {
    Search(String),
    /// A conversation in the list was clicked.
    SelectConversation(Conversation),
    EditDraft(String),
    /// Send pressed at the given local time.
    Send { at: NaiveDateTime },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagesPage {
    search: TextQuery,
    selected: Option<EntityId>,
    sender: String,
    draft: String,
    thread: Vec<Message>,
    last_intent: Option<Intent>,
}

impl MessagesPage {
    /// Opens the first conversation with `thread` shown; own messages are
    /// sent as `sender`.
    pub fn new(conversations: &[Conversation], thread: Vec<Message>, sender: impl Into<String>) -> Self {
        Self {
            search: TextQuery::default(),
            selected: conversations.first().map(|conversation| conversation.id.clone()),
            sender: sender.into(),
            draft: String::new(),
            thread,
            last_intent: None,
        }
    }

    pub fn search(&self) -> &TextQuery {
        &self.search
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn thread(&self) -> &[Message] {
        &self.thread
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn last_intent(&self) -> Option<&Intent> {
        self.last_intent.as_ref()
    }

    /// Conversations whose name matches the search box, in list order.
    pub fn visible<'a>(&self, conversations: &'a [Conversation]) -> Vec<&'a Conversation> {
        filter_items(conversations, &self.search)
    }

    /// The open conversation, if it still exists in `conversations`.
    pub fn selected<'a>(&self, conversations: &'a [Conversation]) -> Option<&'a Conversation> {
        let id = self.selected.as_deref()?;
        conversations
            .iter()
            .find(|conversation| conversation.id == id)
    }

    /// Number of conversations showing an unread badge.
    pub fn unread_count(&self, conversations: &[Conversation]) -> usize {
        conversations
            .iter()
            .filter(|conversation| conversation.has_unread())
            .count()
    }

    /// Opens the conversation with `id`; unknown ids are ignored.
    pub fn select_by_id(self, conversations: &[Conversation], id: &str) -> Self {
        match find_by_id(conversations, id) {
            Some(conversation) => {
                self.reduce(MessagesEvent::SelectConversation(conversation.clone()))
            }
            None => self,
        }
    }

    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }
}

impl Reducer for MessagesPage {
    type Event = MessagesEvent;

    fn reduce(mut self, event: Self::Event) -> Self {
        match event {
            MessagesEvent::Search(text) => self.search = TextQuery::new(text),
            MessagesEvent::SelectConversation(conversation) => {
                self.selected = Some(conversation.id)
            }
            MessagesEvent::EditDraft(text) => self.draft = text,
            MessagesEvent::Send { at } => {
                let Some(conversation) = self.selected.clone() else {
                    return self;
                };
                if !self.can_send() {
                    return self;
                }
                let message = Message {
                    id: Uuid::new_v4().to_string(),
                    sender: self.sender.clone(),
                    content: std::mem::take(&mut self.draft),
                    timestamp: at,
                    is_own: true,
                };
                self.thread.push(message);
                self.last_intent = Some(Intent::MessageSent { conversation }.record("messages"));
            }
        }
        self
    }
}
