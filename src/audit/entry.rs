//! Activity entry data structures
//!
//! One entry per dashboard interaction: what was done, with which
//! parameters, and how many records the resulting view held.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of dashboard activity that are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Dataset loaded
    Load,
    /// Filter criteria changed
    Filter,
    /// Sort column or direction changed
    Sort,
    /// Table page changed
    Page,
    /// Table search run
    Search,
    /// View exported
    Export,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Load => write!(f, "LOAD"),
            Action::Filter => write!(f, "FILTER"),
            Action::Sort => write!(f, "SORT"),
            Action::Page => write!(f, "PAGE"),
            Action::Search => write!(f, "SEARCH"),
            Action::Export => write!(f, "EXPORT"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the action happened (UTC)
    pub timestamp: DateTime<Utc>,

    /// Groups the entries of one CLI invocation or dashboard session
    pub session_id: Uuid,

    pub action: Action,

    /// Action parameters (criteria, sort spec, page number, file path)
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub detail: serde_json::Value,

    /// Records in the view after the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_count: Option<usize>,
}

impl ActivityEntry {
    /// Create an entry stamped with the current time
    pub fn new<T: Serialize>(session_id: Uuid, action: Action, detail: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
            action,
            detail: serde_json::to_value(detail).unwrap_or(serde_json::Value::Null),
            result_count: None,
        }
    }

    /// Attach the resulting view size
    pub fn with_result_count(mut self, count: usize) -> Self {
        self.result_count = Some(count);
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let session = self.session_id.to_string();
        let mut output = format!(
            "[{}] {} {:<6} ",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            &session[..8],
            self.action,
        );

        if !self.detail.is_null() {
            output.push_str(&self.detail.to_string());
        }

        if let Some(count) = self.result_count {
            output.push_str(&format!(" -> {} records", count));
        }

        output
    }
}
