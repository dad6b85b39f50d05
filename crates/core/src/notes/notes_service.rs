use std::sync::Arc;

use crate::notes::notes_model::*;
use crate::notes::{NoteRepositoryTrait, NoteServiceTrait};
use crate::stocks::StockRepositoryTrait;
use crate::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service for managing research notes
pub struct NoteService {
    note_repository: Arc<dyn NoteRepositoryTrait>,
    stock_repository: Arc<dyn StockRepositoryTrait>,
}

impl NoteService {
    /// Creates a new NoteService instance with injected dependencies
    pub fn new(
        note_repository: Arc<dyn NoteRepositoryTrait>,
        stock_repository: Arc<dyn StockRepositoryTrait>,
    ) -> Self {
        Self {
            note_repository,
            stock_repository,
        }
    }
}

#[async_trait]
impl NoteServiceTrait for NoteService {
    /// Retrieves a note by ID
    fn get_note(&self, note_id: &str) -> Result<Note> {
        self.note_repository.get_note(note_id)
    }

    /// Retrieves all notes attached to a stock
    fn get_notes_by_stock_id(&self, stock_id: &str) -> Result<Vec<Note>> {
        self.note_repository.get_notes_by_stock_id(stock_id)
    }

    /// Creates a new note after verifying the referenced stock exists
    async fn create_note(&self, mut new_note: NewNote) -> Result<Note> {
        new_note.validate()?;
        self.stock_repository.get_stock(&new_note.stock_id)?;

        if new_note.id.is_none() {
            new_note.id = Some(Uuid::new_v4().to_string());
        }

        self.note_repository.create_note(new_note).await
    }

    /// Updates an existing note's content
    async fn update_note(&self, note_update: NoteUpdate) -> Result<Note> {
        note_update.validate()?;
        self.note_repository.update_note(note_update).await
    }

    /// Deletes a note
    async fn delete_note(&self, note_id: String) -> Result<Note> {
        self.note_repository.delete_note(note_id).await
    }
}
