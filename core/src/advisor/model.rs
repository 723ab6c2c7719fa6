use serde::{Deserialize, Serialize};

use crate::ids::{message_id_ulid, now_rfc3339_utc};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// Source descriptor referenced from a message body via a `[n]` marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    pub id: String,
    pub source: String,
    pub page: Option<String>,
}

/// One entry in the append-only conversation log. A citation's lifetime is
/// bound to its owning message; ids are only meaningful within that message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub message_id: String,
    pub role: Role,
    pub content: String,
    pub citations: Vec<Citation>,
    pub is_error: bool,
    pub ts_utc: String, // RFC3339 UTC string
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            message_id: message_id_ulid(),
            role: Role::User,
            content: content.into(),
            citations: Vec::new(),
            is_error: false,
            ts_utc: now_rfc3339_utc(),
        }
    }

    pub fn assistant(content: impl Into<String>, citations: Vec<Citation>) -> Self {
        Self {
            message_id: message_id_ulid(),
            role: Role::Assistant,
            content: content.into(),
            citations,
            is_error: false,
            ts_utc: now_rfc3339_utc(),
        }
    }

    pub fn assistant_error(content: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::assistant(content, Vec::new())
        }
    }
}

/// Advisor output: answer text with the citations its markers resolve to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub citations: Vec<Citation>,
}
