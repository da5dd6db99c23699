//! Flat-file note storage.
//!
//! Every note is one `<id>.md` file in the store directory and nothing else:
//! no index, no metadata, no cache. Each call goes to disk. Writes land in a
//! uniquely named temp file that is renamed over the target, so a note is
//! always one writer's complete payload even when requests race.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::notes::seed::SeedNote;
use crate::notes::title::derive_title;
use crate::notes::types::{Note, NoteSummary};

#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
    seeds: Vec<SeedNote>,
}

impl NoteStore {
    pub fn new(dir: impl Into<PathBuf>, seeds: Vec<SeedNote>) -> Self {
        Self {
            dir: dir.into(),
            seeds,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn seeds(&self) -> &[SeedNote] {
        &self.seeds
    }

    /// `<dir>/<id>.md`. The id is not validated here.
    pub fn note_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.md"))
    }

    /// Create the store directory and any missing seed files.
    ///
    /// Existing files are never touched, so this is safe on every startup.
    /// Returns how many files were created.
    pub fn ensure_seeded(&self) -> Result<usize> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create notes directory {}", self.dir.display()))?;

        let mut created = 0;
        for seed in &self.seeds {
            let path = self.note_path(&seed.id);
            if path.exists() {
                continue;
            }
            std::fs::write(&path, &seed.content)
                .with_context(|| format!("failed to seed {}", path.display()))?;
            tracing::debug!(id = %seed.id, "seeded note");
            created += 1;
        }

        if created > 0 {
            tracing::info!(created, dir = %self.dir.display(), "seeded missing notes");
        }
        Ok(created)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.note_path(id).is_file()
    }

    /// Read a note's content. A missing file reads as an empty string.
    pub fn read(&self, id: &str) -> Result<String> {
        let path = self.note_path(id);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    /// Read a note, or `None` if its file does not exist.
    pub fn get(&self, id: &str) -> Result<Option<Note>> {
        let path = self.note_path(id);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(Note {
                id: id.to_string(),
                content,
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    /// Replace a note's content, creating the file if needed.
    pub fn write(&self, id: &str, content: &str) -> Result<()> {
        let path = self.note_path(id);
        let tmp_path = self
            .dir
            .join(format!(".{id}.md.{}.tmp", uuid::Uuid::now_v7().simple()));

        std::fs::write(&tmp_path, content)
            .with_context(|| format!("failed to write temp file {}", tmp_path.display()))?;

        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("failed to replace {}", path.display()));
        }

        tracing::debug!(id = %id, bytes = content.len(), "note written");
        Ok(())
    }

    /// One summary per seed id, in seed order.
    ///
    /// An empty (or missing) note is titled `Note {n}` after its 1-based
    /// position; anything else goes through [`derive_title`].
    pub fn list(&self) -> Result<Vec<NoteSummary>> {
        self.seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let content = self.read(&seed.id)?;
                let title = if content.is_empty() {
                    format!("Note {}", i + 1)
                } else {
                    derive_title(&content)
                };
                Ok(NoteSummary {
                    id: seed.id.clone(),
                    title,
                })
            })
            .collect()
    }
}
