use super::notes_model::*;
use crate::Result;
use async_trait::async_trait;

/// Trait defining the contract for Note repository operations.
#[async_trait]
pub trait NoteRepositoryTrait: Send + Sync {
    fn get_note(&self, note_id: &str) -> Result<Note>;
    fn get_notes_by_stock_id(&self, stock_id: &str) -> Result<Vec<Note>>;
    async fn create_note(&self, new_note: NewNote) -> Result<Note>;
    async fn update_note(&self, note_update: NoteUpdate) -> Result<Note>;
    async fn delete_note(&self, note_id: String) -> Result<Note>;
}

/// Trait defining the contract for Note service operations.
#[async_trait]
pub trait NoteServiceTrait: Send + Sync {
    fn get_note(&self, note_id: &str) -> Result<Note>;
    fn get_notes_by_stock_id(&self, stock_id: &str) -> Result<Vec<Note>>;
    async fn create_note(&self, new_note: NewNote) -> Result<Note>;
    async fn update_note(&self, note_update: NoteUpdate) -> Result<Note>;
    async fn delete_note(&self, note_id: String) -> Result<Note>;
}
