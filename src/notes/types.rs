//! Response shapes for notes.
//!
//! Neither type is persisted: a note on disk is only its file content, and the
//! title in [`NoteSummary`] is recomputed from that content on every read.

use serde::{Deserialize, Serialize};

/// A note's identifier and full Markdown content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier, e.g. `note-03`. Also the file stem on disk.
    pub id: String,
    /// The raw file content.
    pub content: String,
}

/// One row of the note listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub id: String,
    /// Derived from the first `# ` heading line.
    pub title: String,
}
