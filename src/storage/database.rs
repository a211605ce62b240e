//! JSON document storage
//!
//! The whole [`Store`] lives in one pretty-printed JSON file that is
//! rewritten in full on every commit. There is no locking; a single
//! writer is assumed.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::Store;
use crate::error::{Result, TrackerError};

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "productivity_data.json";

/// A [`Store`] bound to its backing file
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    store: Store,
}

impl Database {
    /// Opens the database at `path`, loading it if the file exists
    ///
    /// A missing file is an empty store; nothing is written until the first
    /// commit.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut db = Self {
            path: path.into(),
            store: Store::new(),
        };
        if db.path.exists() {
            db.load()?;
        }
        Ok(db)
    }

    /// Returns the path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Replaces in-memory state with the contents of the data file
    pub fn load(&mut self) -> Result<()> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| TrackerError::io(&self.path, e))?;

        self.store = serde_json::from_str(&content).map_err(|source| TrackerError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }

    /// Writes the whole document to disk (temp file + rename)
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TrackerError::io(parent, e))?;
        }

        let temp_path = temp_path_for(&self.path);

        {
            let file = File::create(&temp_path).map_err(|e| TrackerError::io(&temp_path, e))?;
            let mut writer = BufWriter::new(file);

            let mut ser =
                serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
            self.store.serialize(&mut ser)?;

            writeln!(writer).map_err(|e| TrackerError::io(&temp_path, e))?;
            writer.flush().map_err(|e| TrackerError::io(&temp_path, e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| TrackerError::io(&self.path, e))?;

        Ok(())
    }

    /// Persists the current state; called once at the end of each operation
    pub fn commit(&self) -> Result<()> {
        self.save()
    }

    /// Clears all users and tasks and persists the empty document
    pub fn reset(&mut self) -> Result<()> {
        self.store = Store::new();
        self.save()
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
