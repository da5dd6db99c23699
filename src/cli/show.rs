//! CLI `show` command: print one note's raw Markdown.

use anyhow::{bail, Result};

use key_notes::config::NotesConfig;
use key_notes::notes::{default_seeds, derive_title, NoteStore};

/// Print a note's title and content to stdout.
pub fn show(config: &NotesConfig, id: &str) -> Result<()> {
    let store = NoteStore::new(config.resolved_notes_dir(), default_seeds());

    let Some(note) = store.get(id)? else {
        bail!("note {id} not found in {}", store.dir().display());
    };

    println!("Note: {} ({})", note.id, derive_title(&note.content));
    println!("{}", "=".repeat(50));
    print!("{}", note.content);
    if !note.content.ends_with('\n') {
        println!();
    }

    Ok(())
}
