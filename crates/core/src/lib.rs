//! Core domain types and storage contract for the notesync project.

pub mod notes;
pub mod storage;
