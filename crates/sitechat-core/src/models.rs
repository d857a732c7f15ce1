//! Core data types that flow through the answer pipeline.
//!
//! Everything here is built fresh per query and never persisted by the
//! pipeline itself; callers own storage of history and answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// A scored passage returned by a [`DocumentStore`](crate::store::DocumentStore).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievedPassage {
    /// Passage text as stored in the index.
    pub text: String,
    /// Where the passage came from (page URL or document key).
    pub source_id: String,
    /// Backend-specific relevance score; higher is better.
    pub score: f32,
}

impl RetrievedPassage {
    pub fn new(text: impl Into<String>, source_id: impl Into<String>, score: f32) -> Self {
        Self {
            text: text.into(),
            source_id: source_id.into(),
            score,
        }
    }
}

/// Who authored a history message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }

    /// Speaker label used when history is flattened into a prompt.
    pub fn speaker(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Bot => "Assistant",
        }
    }
}

impl FromStr for Role {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "bot" => Ok(Role::Bot),
            other => Err(InputError::UnknownRole {
                role: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message of a conversation, oldest first when in a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub message: String,
}

impl HistoryEntry {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            message: message.into(),
        }
    }

    pub fn bot(message: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            message: message.into(),
        }
    }

    /// Build a history from raw `(role, message)` pairs.
    ///
    /// Order is preserved. Any role outside `user`/`bot` rejects the whole
    /// history.
    pub fn parse_pairs<R, M>(pairs: &[(R, M)]) -> Result<Vec<HistoryEntry>, InputError>
    where
        R: AsRef<str>,
        M: AsRef<str>,
    {
        pairs
            .iter()
            .map(|(role, message)| {
                Ok(HistoryEntry {
                    role: role.as_ref().parse()?,
                    message: message.as_ref().to_string(),
                })
            })
            .collect()
    }
}

/// Which knowledge source produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFlag {
    None,
    KnowledgeBase,
    Internet,
}

impl SourceFlag {
    /// Wire representation: `None` maps to an absent value.
    pub fn as_label(&self) -> Option<&'static str> {
        match self {
            SourceFlag::None => None,
            SourceFlag::KnowledgeBase => Some("knowledge_base"),
            SourceFlag::Internet => Some("internet"),
        }
    }
}

/// Final output of one orchestration call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerResult {
    pub answer_text: String,
    pub matched: bool,
    pub source_flag: SourceFlag,
}

/// How verbose the generated answer should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Low,
    Medium,
    #[default]
    High,
}

impl FromStr for DetailLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(DetailLevel::Low),
            "medium" => Ok(DetailLevel::Medium),
            "high" => Ok(DetailLevel::High),
            other => Err(format!(
                "unknown detail level '{}': expected low, medium, or high",
                other
            )),
        }
    }
}

/// A chunk of an indexed page's text.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub id: String,
    pub document_id: String,
    pub chunk_index: i64,
    pub text: String,
    pub hash: String,
}
