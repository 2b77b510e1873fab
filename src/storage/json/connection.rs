use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection manages the base data directory and maps storage keys to
/// file paths. Each user's trip collection lives in its own JSON file;
/// the staged trip has a single fixed slot.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection with a base directory, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the platform data directory
    /// (e.g. `~/.local/share/Travella` on Linux).
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine platform data directory"))?;
        Self::new(data_dir.join("Travella"))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the trip collection file for a user.
    pub fn trips_file(&self, user_id: &str) -> PathBuf {
        self.base_directory
            .join(format!("trips_{}.json", Self::safe_user_key(user_id)))
    }

    /// Path of the single staged-trip slot.
    pub fn staged_trip_file(&self) -> PathBuf {
        self.base_directory.join("current_trip.json")
    }

    /// Turn a user ID into a safe file-name component.
    /// Converts "Guest User" -> "guest_user", "auth0|12ab" -> "auth0_12ab".
    pub fn safe_user_key(user_id: &str) -> String {
        let mapped: String = user_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();

        // Collapse consecutive underscores so adjacent separators in the
        // source ID cannot produce colliding names like "a__b" vs "a_b".
        let mut collapsed = String::new();
        let mut last_was_underscore = false;
        for c in mapped.chars() {
            if c == '_' {
                if !last_was_underscore {
                    collapsed.push('_');
                }
                last_was_underscore = true;
            } else {
                collapsed.push(c);
                last_was_underscore = false;
            }
        }

        collapsed.trim_matches('_').to_string()
    }
}
