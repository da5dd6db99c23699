//! CLI `doctor` command: check storage and port setup and print a report.

use anyhow::Result;
use std::path::Path;

use key_notes::config::{NotesConfig, LOOPBACK_HOST};
use key_notes::notes::{default_seeds, NoteStore};
use key_notes::server;

/// Print a health report for the configured directories and port.
pub fn doctor(config: &NotesConfig, config_path: &Path) -> Result<()> {
    let store = NoteStore::new(config.resolved_notes_dir(), default_seeds());
    let static_dir = config.resolved_static_dir();

    println!("key-notes Health Report");
    println!("=======================");
    println!();
    println!(
        "Config file:       {} ({})",
        config_path.display(),
        if config_path.exists() { "found" } else { "defaults" }
    );
    println!("Notes directory:   {}", store.dir().display());
    println!(
        "Static directory:  {} ({})",
        static_dir.display(),
        if static_dir.is_dir() { "found" } else { "missing" }
    );
    println!();

    if !store.dir().is_dir() {
        println!("Notes directory does not exist yet.");
        println!("Run `key-notes run` or `key-notes serve` to create and seed it.");
    } else {
        println!("Seed notes:");
        let mut missing = 0;
        for seed in store.seeds() {
            let path = store.note_path(&seed.id);
            match std::fs::metadata(&path) {
                Ok(meta) => println!("  {:<10} {}", seed.id, format_bytes(meta.len())),
                Err(_) => {
                    missing += 1;
                    println!("  {:<10} MISSING", seed.id);
                }
            }
        }
        if missing > 0 {
            println!();
            println!("{missing} seed note(s) missing; they are recreated on next start.");
        }
    }
    println!();

    let port = config.server.port;
    match server::bind_first_free(port, config.server.port_attempts) {
        Ok(listener) => {
            let chosen = listener.local_addr()?.port();
            if chosen == port {
                println!("Port:              {LOOPBACK_HOST}:{port} is free");
            } else {
                println!("Port:              {port} busy, would use {LOOPBACK_HOST}:{chosen}");
            }
        }
        Err(e) => println!("Port:              FAILED ({e})"),
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
