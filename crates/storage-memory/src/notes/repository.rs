use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use stockfolio_core::notes::{NewNote, Note, NoteError, NoteRepositoryTrait, NoteUpdate};
use stockfolio_core::Result;

use crate::store::MemoryStore;

/// Repository for note records backed by the shared [`MemoryStore`].
pub struct NoteRepository {
    store: Arc<MemoryStore>,
}

impl NoteRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        NoteRepository { store }
    }
}

#[async_trait]
impl NoteRepositoryTrait for NoteRepository {
    fn get_note(&self, note_id: &str) -> Result<Note> {
        let records = self.store.read()?;
        records
            .notes
            .get(note_id)
            .cloned()
            .ok_or_else(|| NoteError::NotFound(note_id.to_string()).into())
    }

    fn get_notes_by_stock_id(&self, stock_id: &str) -> Result<Vec<Note>> {
        let records = self.store.read()?;
        let mut notes: Vec<Note> = records
            .notes
            .values()
            .filter(|note| note.stock_id == stock_id)
            .cloned()
            .collect();
        notes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(notes)
    }

    async fn create_note(&self, new_note: NewNote) -> Result<Note> {
        let now = Utc::now();
        let note = Note {
            id: new_note.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            stock_id: new_note.stock_id,
            content: new_note.content,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.store.write()?;
        records.notes.insert(note.id.clone(), note.clone());
        Ok(note)
    }

    async fn update_note(&self, note_update: NoteUpdate) -> Result<Note> {
        let mut records = self.store.write()?;
        let note = records
            .notes
            .get_mut(&note_update.id)
            .ok_or_else(|| NoteError::NotFound(note_update.id.clone()))?;

        note.content = note_update.content;
        note.updated_at = Utc::now();

        Ok(note.clone())
    }

    async fn delete_note(&self, note_id: String) -> Result<Note> {
        let mut records = self.store.write()?;
        records
            .notes
            .remove(&note_id)
            .ok_or_else(|| NoteError::NotFound(note_id).into())
    }
}
