use serde::Deserialize;

use super::NoteError;

/// Request payload for creating or updating a note.
///
/// Missing fields deserialize to empty strings and are rejected by
/// [`NotePayload::validated`], so absent and blank fields report the same
/// validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct NotePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub note: String,
}

impl NotePayload {
    /// Trims both fields and requires them to be non-empty.
    pub fn validated(self) -> Result<ValidatedPayload, NoteError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(NoteError::MissingField { field: "title" });
        }

        let note = self.note.trim();
        if note.is_empty() {
            return Err(NoteError::MissingField { field: "note" });
        }

        Ok(ValidatedPayload {
            title: title.to_string(),
            note: note.to_string(),
        })
    }
}

/// A payload whose fields are trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPayload {
    pub title: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_trims_fields() {
        let payload = NotePayload {
            title: "  Groceries  ".to_string(),
            note: "\tMilk\n".to_string(),
        };

        let validated = payload.validated().unwrap();

        assert_eq!(validated.title, "Groceries");
        assert_eq!(validated.note, "Milk");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let payload = NotePayload {
            title: "   ".to_string(),
            note: "body".to_string(),
        };

        assert_eq!(
            payload.validated(),
            Err(NoteError::MissingField { field: "title" })
        );
    }

    #[test]
    fn test_empty_note_is_rejected() {
        let payload = NotePayload {
            title: "Title".to_string(),
            note: String::new(),
        };

        assert_eq!(
            payload.validated(),
            Err(NoteError::MissingField { field: "note" })
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let payload: NotePayload = serde_json::from_str("{}").unwrap();

        assert_eq!(
            payload.validated(),
            Err(NoteError::MissingField { field: "title" })
        );
    }
}
