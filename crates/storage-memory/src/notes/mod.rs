//! In-memory storage implementation for notes.

mod repository;

pub use repository::NoteRepository;
