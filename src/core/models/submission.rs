use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One uploaded file as the wire describes it. Byte transfer happens out of
/// band; the submission only records what was attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
}

/// A stored answer: scalar kinds submit a single string, multi-select kinds
/// an ordered list, file kinds a descriptor list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    One(String),
    Many(Vec<String>),
    Files(Vec<FileDescriptor>),
}

impl Answer {
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::One(value) => value.is_empty(),
            Answer::Many(values) => values.is_empty(),
            Answer::Files(files) => files.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    /// Only a pending submission may still be decided; approved and rejected
    /// are terminal.
    pub fn is_decided(&self) -> bool {
        !matches!(self, ReviewStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub fn resulting_status(&self) -> ReviewStatus {
        match self {
            ReviewAction::Approve => ReviewStatus::Approved,
            ReviewAction::Reject => ReviewStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub submitted_at: NaiveDateTime,
    #[serde(default)]
    pub responses: HashMap<String, Answer>,
    #[serde(default)]
    pub status: ReviewStatus,
}

impl Submission {
    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.responses.get(question_id)
    }
}
