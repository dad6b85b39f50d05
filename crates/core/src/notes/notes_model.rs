//! Note domain models.

use crate::notes::notes_errors::NoteError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a free-text research note attached to a stock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub stock_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new note
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub id: Option<String>,
    pub stock_id: String,
    pub content: String,
}

impl NewNote {
    /// Validates the new note data
    pub fn validate(&self) -> std::result::Result<(), NoteError> {
        if self.stock_id.trim().is_empty() {
            return Err(NoteError::InvalidData(
                "Stock ID cannot be empty".to_string(),
            ));
        }
        if self.content.trim().is_empty() {
            return Err(NoteError::InvalidData(
                "Note content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating an existing note's content
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub id: String,
    pub content: String,
}

impl NoteUpdate {
    /// Validates the updated note data
    pub fn validate(&self) -> std::result::Result<(), NoteError> {
        if self.id.trim().is_empty() {
            return Err(NoteError::InvalidData(
                "Note ID cannot be empty".to_string(),
            ));
        }
        if self.content.trim().is_empty() {
            return Err(NoteError::InvalidData(
                "Note content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
