//! File-based storage implementation for native platforms.

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::document::DesignDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each event's design as a pretty-printed JSON file in a directory.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage under the platform data directory,
    /// e.g. `~/.local/share/dafinvite/designs/` on Linux.
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("dafinvite").join("designs"))
    }

    /// Get the file path for an event id.
    fn design_path(&self, event_id: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", encode_event_id(event_id)))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Whether `byte` can appear unescaped in a file name.
fn is_safe_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

/// Encode an event id as a file stem. Every byte outside `[A-Za-z0-9_-]`
/// becomes `%XX`, so distinct ids always map to distinct files.
fn encode_event_id(event_id: &str) -> String {
    let mut encoded = String::with_capacity(event_id.len());
    for byte in event_id.bytes() {
        if is_safe_byte(byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

/// Reverse [`encode_event_id`]. Returns `None` for stems it could not have
/// produced.
fn decode_event_id(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = stem.get(i + 1..i + 3)?;
                if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return None;
                }
                decoded.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            }
            byte if is_safe_byte(byte) => {
                decoded.push(byte);
                i += 1;
            }
            _ => return None,
        }
    }
    String::from_utf8(decoded).ok()
}

impl Storage for FileStorage {
    fn save(&self, event_id: &str, document: &DesignDocument) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.design_path(event_id);
        let json = match document.to_json_pretty() {
            Ok(json) => json,
            Err(e) => return Box::pin(async move { Err(StorageError::Serialization(e.to_string())) }),
        };

        Box::pin(async move {
            fs::write(&path, json)
                .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
            log::info!("Saved design to {}", path.display());
            Ok(())
        })
    }

    fn load(&self, event_id: &str) -> BoxFuture<'_, StorageResult<DesignDocument>> {
        let path = self.design_path(event_id);
        let event_id = event_id.to_string();

        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(event_id));
            }

            let json = fs::read_to_string(&path)
                .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

            let document = DesignDocument::from_json(&json).map_err(|e| {
                StorageError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
            })?;
            log::info!("Loaded design from {}", path.display());
            Ok(document)
        })
    }

    fn delete(&self, event_id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.design_path(event_id);

        Box::pin(async move {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    StorageError::Io(format!("Failed to delete {}: {}", path.display(), e))
                })?;
            }
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        let base = self.base_path.clone();

        Box::pin(async move {
            if !base.exists() {
                return Ok(vec![]);
            }

            let entries = fs::read_dir(&base)
                .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;

            let ids = entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
                .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).and_then(decode_event_id))
                .collect();
            Ok(ids)
        })
    }

    fn exists(&self, event_id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let path = self.design_path(event_id);
        Box::pin(async move { Ok(path.exists()) })
    }
}
