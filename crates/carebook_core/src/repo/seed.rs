//! JSON seed data source.
//!
//! # Responsibility
//! - Decode the bundled seed document into typed collections.
//! - Allow callers to substitute their own document (tests, demos).
//!
//! # Invariants
//! - Missing top-level collections decode as empty.
//! - Decoding is all-or-nothing; a single bad record rejects the document.

use crate::model::appointment::Appointment;
use crate::model::client::Client;
use crate::model::conversation::{Conversation, Message};
use crate::model::note::Note;
use crate::model::staff::Staff;
use crate::repo::DataSource;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const EMBEDDED_SEED: &str = include_str!("../../data/seed.json");

pub type SeedResult<T> = Result<T, SeedError>;

/// Failure to read or decode a seed document.
#[derive(Debug)]
pub enum SeedError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode(serde_json::Error),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "invalid seed document: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// In-memory collections decoded from a seed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl SeedData {
    /// Decodes the seed document bundled with this crate.
    pub fn embedded() -> SeedResult<Self> {
        Self::from_json_str(EMBEDDED_SEED)
    }

    /// Decodes a seed document from JSON text.
    pub fn from_json_str(json: &str) -> SeedResult<Self> {
        let data: Self = serde_json::from_str(json)?;
        data.log_loaded();
        Ok(data)
    }

    /// Reads and decodes a seed document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> SeedResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    fn log_loaded(&self) {
        info!(
            "event=seed_loaded module=repo status=ok staff={} clients={} appointments={} notes={} conversations={}",
            self.staff.len(),
            self.clients.len(),
            self.appointments.len(),
            self.notes.len(),
            self.conversations.len()
        );
    }
}

impl DataSource for SeedData {
    fn staff(&self) -> &[Staff] {
        &self.staff
    }

    fn clients(&self) -> &[Client] {
        &self.clients
    }

    fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    fn notes(&self) -> &[Note] {
        &self.notes
    }

    fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    fn messages(&self) -> &[Message] {
        &self.messages
    }
}
