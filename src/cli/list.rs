use anyhow::Result;

use key_notes::config::NotesConfig;
use key_notes::notes::{default_seeds, NoteStore};

/// Print every seeded note with its derived title.
pub fn list(config: &NotesConfig) -> Result<()> {
    let store = NoteStore::new(config.resolved_notes_dir(), default_seeds());
    let notes = store.list()?;

    println!("Notes in {}", store.dir().display());
    println!("{}", "=".repeat(40));
    for note in &notes {
        let marker = if store.exists(&note.id) { " " } else { "!" };
        println!("{marker} {:<10} {}", note.id, note.title);
    }

    Ok(())
}
