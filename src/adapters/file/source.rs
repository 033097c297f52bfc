//! JSON file source
//!
//! Layout inside the data directory:
//!
//! ```text
//! .agent-hub/
//! ├── messages.json     # JSON array of message records
//! └── acks.jsonl        # one acknowledgment per line, append-only
//! ```
//!
//! Missing files read as empty collections.

use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::core::error::StorageError;
use crate::core::models::{Acknowledgment, Message};
use crate::core::ports::HubSource;

/// Message feed filename
pub const MESSAGES_FILE: &str = "messages.json";

/// Acknowledgment ledger filename
pub const ACKS_FILE: &str = "acks.jsonl";

/// Hub data stored as JSON files in one directory
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    /// Use `dir` as the data directory (created lazily on write)
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the message feed
    #[must_use]
    pub fn messages_path(&self) -> PathBuf {
        self.dir.join(MESSAGES_FILE)
    }

    /// Path of the acknowledgment ledger
    #[must_use]
    pub fn acks_path(&self) -> PathBuf {
        self.dir.join(ACKS_FILE)
    }

    /// Whether a message feed exists on disk
    #[must_use]
    pub fn exists(&self) -> bool {
        self.messages_path().exists()
    }

    /// Overwrite the message feed
    pub fn write_messages(&self, messages: &[Message]) -> Result<(), StorageError> {
        let path = self.messages_path();
        self.ensure_dir()?;
        let mut content = serde_json::to_string_pretty(messages).map_err(StorageError::Encode)?;
        content.push('\n');
        fs::write(&path, content).map_err(|source| StorageError::Io { path, source })
    }

    /// Overwrite the ledger with `acks`
    ///
    /// Only meant for seeding; normal operation goes through
    /// [`HubSource::append_ack`].
    pub fn write_acks(&self, acks: &[Acknowledgment]) -> Result<(), StorageError> {
        let path = self.acks_path();
        self.ensure_dir()?;
        let mut content = String::new();
        for ack in acks {
            content.push_str(&serde_json::to_string(ack).map_err(StorageError::Encode)?);
            content.push('\n');
        }
        fs::write(&path, content).map_err(|source| StorageError::Io { path, source })
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })
    }
}

/// Read a file, treating "not found" as `None`
fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Whether a non-empty file is missing its final newline
fn lacks_trailing_newline(file: &mut fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl HubSource for JsonFileSource {
    fn load_messages(&self) -> Result<Vec<Message>, StorageError> {
        let path = self.messages_path();
        let Some(content) = read_optional(&path)? else {
            log::debug!("No message feed at {}", path.display());
            return Ok(Vec::new());
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let messages: Vec<Message> = serde_json::from_str(&content)
            .map_err(|source| StorageError::Parse { path: path.clone(), line: 0, source })?;
        log::debug!("Read {} message(s) from {}", messages.len(), path.display());
        Ok(messages)
    }

    fn load_acks(&self) -> Result<Vec<Acknowledgment>, StorageError> {
        let path = self.acks_path();
        let Some(content) = read_optional(&path)? else {
            return Ok(Vec::new());
        };
        let mut acks = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let ack = serde_json::from_str(line).map_err(|source| StorageError::Parse {
                path: path.clone(),
                line: index + 1,
                source,
            })?;
            acks.push(ack);
        }
        log::debug!("Read {} ack(s) from {}", acks.len(), path.display());
        Ok(acks)
    }

    fn append_ack(&self, ack: &Acknowledgment) -> Result<(), StorageError> {
        let path = self.acks_path();
        self.ensure_dir()?;

        let mut line = serde_json::to_string(ack).map_err(StorageError::Encode)?;
        line.push('\n');

        let io_err = |source| StorageError::Io {
            path: path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)
            .map_err(io_err)?;
        if lacks_trailing_newline(&mut file).map_err(io_err)? {
            line.insert(0, '\n');
        }
        // One write per record keeps every line whole.
        file.write_all(line.as_bytes()).map_err(io_err)?;
        log::info!("Recorded {} for '{}' in {}", ack.status, ack.msg_id, path.display());
        Ok(())
    }
}
