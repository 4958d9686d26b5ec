mod error;
mod requests;
mod types;

pub use error::NoteError;
pub use requests::{NotePayload, ValidatedPayload};
pub use types::{Note, NoteChanges};
