//! Data-directory management for the flat-file stores.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection owns the data directory and hands out the file paths the
/// repositories read and write.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection over a base directory, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("failed to create data directory {}", base_path.display())
            })?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory,
    /// ~/Documents/Palm Black Booking.
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Palm Black Booking");
        info!("Using data directory: {}", data_dir.display());

        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the appointment ledger file.
    pub fn appointments_file_path(&self) -> PathBuf {
        self.base_directory.join("appointments.json")
    }

    /// Path of the weekly availability file.
    pub fn availability_file_path(&self) -> PathBuf {
        self.base_directory.join("availability.yaml")
    }

    /// Path of the admin session file.
    pub fn session_file_path(&self) -> PathBuf {
        self.base_directory.join("session.yaml")
    }

    /// Write file contents atomically: a temp file in the same directory is
    /// written first and then renamed over the target, so readers never see
    /// a partial write.
    pub fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }
}
