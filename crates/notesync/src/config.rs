use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the table holding the notes (`NOTES_TABLE_NAME`).
    ///
    /// `None` when the variable is unset or blank. Handlers refuse every
    /// operation with a 500 until it is configured; the store is never
    /// contacted in that case.
    pub table_name: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `NOTES_TABLE_NAME` - Name of the notes table (required for the
    ///   DynamoDB backend; whitespace is trimmed, blank counts as unset)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("NOTES_TABLE_NAME")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        }
    }
}
