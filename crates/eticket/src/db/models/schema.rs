//! Outcomes of schema maintenance statements.

use serde::{Deserialize, Serialize};

/// Result of one `DROP TABLE` statement.
///
/// Drops are independent of each other: a missing table is skipped and
/// the remaining statements still run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DropOutcome {
    /// The table was dropped
    Dropped { sql: String },

    /// The statement failed, usually because the table does not exist
    Skipped { sql: String, reason: String },
}

impl DropOutcome {
    /// The statement that was issued.
    pub fn sql(&self) -> &str {
        match self {
            DropOutcome::Dropped { sql } | DropOutcome::Skipped { sql, .. } => sql,
        }
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self, DropOutcome::Dropped { .. })
    }
}
