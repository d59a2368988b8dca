//! Activity logging for edubudget
//!
//! Records dashboard interactions (loads, filter and sort changes, paging,
//! searches and exports) in an append-only log.
//!
//! # Architecture
//!
//! - `ActivityEntry`: one interaction with timestamp, session id, action,
//!   parameters and resulting view size.
//! - `AuditLogger`: reads and writes the log file in line-delimited JSON
//!   (JSONL).
//! - `ActivityLog`: per-session recorder honoring the `activity_log_enabled`
//!   setting.
//!
//! # Example
//!
//! ```rust,ignore
//! use edubudget::audit::{Action, ActivityLog};
//!
//! let log = ActivityLog::new(paths.activity_log(), settings.activity_log_enabled);
//! log.record(Action::Filter, dashboard.criteria(), Some(dashboard.view().len()))?;
//! ```

mod entry;
mod logger;

pub use entry::{Action, ActivityEntry};
pub use logger::{ActivityLog, AuditLogger};
