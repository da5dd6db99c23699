use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The server only ever binds loopback.
pub const LOOPBACK_HOST: &str = "127.0.0.1";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct NotesConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Preferred port. The first free port at or above it is used.
    pub port: u16,
    /// How many consecutive ports to try before giving up.
    pub port_attempts: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub notes_dir: String,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// `#rrggbb` hex colour painted behind the webview.
    pub background: String,
    pub devtools: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8765,
            port_attempts: 100,
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let base = default_app_dir();
        Self {
            notes_dir: base.join("notes").to_string_lossy().into_owned(),
            static_dir: base.join("static").to_string_lossy().into_owned(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "key-notes".into(),
            width: 980.0,
            height: 700.0,
            min_width: 700.0,
            min_height: 520.0,
            background: "#0a0a0a".into(),
            devtools: true,
        }
    }
}

impl WindowConfig {
    /// Parse `background` into RGBA. Malformed values fall back to opaque black.
    pub fn background_rgba(&self) -> (u8, u8, u8, u8) {
        let hex = self.background.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
        };
        match (hex.len(), channel(0), channel(2), channel(4)) {
            (6, Some(r), Some(g), Some(b)) => (r, g, b, 255),
            _ => (0, 0, 0, 255),
        }
    }
}

/// Returns `~/.key-notes/`
pub fn default_app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".key-notes")
}

/// Returns the default config file path: `~/.key-notes/config.toml`
pub fn default_config_path() -> PathBuf {
    default_app_dir().join("config.toml")
}

impl NotesConfig {
    /// Load from a TOML file if it exists (defaults otherwise), then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(path.as_ref())?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(NotesConfig::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents).context("failed to parse config TOML")
    }

    /// Apply environment variable overrides
    /// (KEYNOTES_NOTES_DIR, KEYNOTES_STATIC_DIR, KEYNOTES_PORT, KEYNOTES_LOG_LEVEL).
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("KEYNOTES_NOTES_DIR") {
            self.storage.notes_dir = val;
        }
        if let Ok(val) = std::env::var("KEYNOTES_STATIC_DIR") {
            self.storage.static_dir = val;
        }
        if let Ok(val) = std::env::var("KEYNOTES_PORT") {
            self.server.port = val
                .parse()
                .map_err(|_| anyhow!("KEYNOTES_PORT is not a valid port: {val:?}"))?;
        }
        if let Ok(val) = std::env::var("KEYNOTES_LOG_LEVEL") {
            self.server.log_level = val;
        }
        Ok(())
    }

    /// Resolve the notes directory, expanding `~` if needed.
    pub fn resolved_notes_dir(&self) -> PathBuf {
        expand_tilde(&self.storage.notes_dir)
    }

    /// Resolve the static assets directory, expanding `~` if needed.
    pub fn resolved_static_dir(&self) -> PathBuf {
        expand_tilde(&self.storage.static_dir)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NotesConfig::default();
        assert_eq!(config.server.port, 8765);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.window.title, "key-notes");
        assert!(config.storage.notes_dir.ends_with("notes"));
        assert!(config.storage.static_dir.ends_with("static"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[server]
port = 9000
log_level = "debug"

[storage]
notes_dir = "/tmp/my-notes"

[window]
width = 1200.0
"#;
        let config: NotesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.log_level, "debug");
        assert_eq!(config.storage.notes_dir, "/tmp/my-notes");
        assert_eq!(config.window.width, 1200.0);
        // defaults still apply for unset fields
        assert_eq!(config.server.port_attempts, 100);
        assert_eq!(config.window.min_height, 520.0);
        assert!(config.storage.static_dir.ends_with("static"));
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = NotesConfig::default();
        std::env::set_var("KEYNOTES_NOTES_DIR", "/tmp/override-notes");
        std::env::set_var("KEYNOTES_PORT", "9911");
        std::env::set_var("KEYNOTES_LOG_LEVEL", "trace");

        config.apply_env_overrides().unwrap();

        assert_eq!(config.storage.notes_dir, "/tmp/override-notes");
        assert_eq!(config.server.port, 9911);
        assert_eq!(config.server.log_level, "trace");

        std::env::set_var("KEYNOTES_PORT", "not-a-port");
        let err = config.apply_env_overrides().unwrap_err();
        assert!(err.to_string().contains("KEYNOTES_PORT"));

        std::env::remove_var("KEYNOTES_NOTES_DIR");
        std::env::remove_var("KEYNOTES_PORT");
        std::env::remove_var("KEYNOTES_LOG_LEVEL");
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("absent.toml");

        let config = NotesConfig::from_file(&path).unwrap();
        assert_eq!(config.window.title, "key-notes");
        assert_eq!(config.server.port_attempts, 100);
        assert!(!path.exists());
    }

    #[test]
    fn config_file_is_read_from_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[window]\ntitle = \"my notes\"\n").unwrap();

        let config = NotesConfig::from_file(&path).unwrap();
        assert_eq!(config.window.title, "my notes");
    }

    #[test]
    fn background_hex_parses() {
        let mut window = WindowConfig::default();
        assert_eq!(window.background_rgba(), (10, 10, 10, 255));

        window.background = "#ff8000".into();
        assert_eq!(window.background_rgba(), (255, 128, 0, 255));

        window.background = "nope".into();
        assert_eq!(window.background_rgba(), (0, 0, 0, 255));
    }

    #[test]
    fn tilde_expands_to_home() {
        let expanded = expand_tilde("~/notes");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("notes"));
        }
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    }
}
