//! Notes module - domain models, services, and traits.

mod notes_errors;
mod notes_model;
mod notes_service;
mod notes_traits;


pub use notes_errors::NoteError;
pub use notes_model::{NewNote, Note, NoteUpdate};
pub use notes_service::NoteService;
pub use notes_traits::{NoteRepositoryTrait, NoteServiceTrait};
