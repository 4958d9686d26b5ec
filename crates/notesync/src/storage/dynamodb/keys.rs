//! DynamoDB key generation functions.
//!
//! Pure functions for generating the composite key addressing a note. All
//! records share one fixed owner partition; the note id is the sort key.
//! All functions are sync and have no side effects.

/// Fixed logical owner of every note in this deployment.
///
/// Never supplied by the caller.
pub const OWNER: &str = "global";

pub const OWNER_PREFIX: &str = "OWNER#";
pub const NOTE_PREFIX: &str = "NOTE#";

/// Generate the partition key for the fixed owner.
///
/// Pattern: `OWNER#global`
pub fn owner_pk() -> String {
    format!("{OWNER_PREFIX}{OWNER}")
}

/// Generate the sort key for a note.
///
/// Pattern: `NOTE#<note_id>`
pub fn note_sk(note_id: &str) -> String {
    format!("{NOTE_PREFIX}{note_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_pk() {
        assert_eq!(owner_pk(), "OWNER#global");
    }

    #[test]
    fn test_note_sk() {
        assert_eq!(
            note_sk("550e8400-e29b-41d4-a716-446655440001"),
            "NOTE#550e8400-e29b-41d4-a716-446655440001"
        );
    }
}
