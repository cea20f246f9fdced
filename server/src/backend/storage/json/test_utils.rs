//! Test utilities for storage-backed tests.
//!
//! RAII-based cleanup: the temporary data directory lives as long as the
//! helper and is removed when it drops, even if a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::appointment_repository::AppointmentRepository;
use super::connection::JsonConnection;
use super::schedule_repository::ScheduleRepository;
use super::session_repository::SessionRepository;

/// A temporary data directory plus a connection over it.
pub struct TestEnvironment {
    pub connection: JsonConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Repository instances over a fresh test environment.
pub struct TestHelper {
    pub env: TestEnvironment,
    pub appointment_repo: AppointmentRepository,
    pub schedule_repo: ScheduleRepository,
    pub session_repo: SessionRepository,
}

impl TestHelper {
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let appointment_repo = AppointmentRepository::new(env.connection.clone());
        let schedule_repo = ScheduleRepository::new(env.connection.clone());
        let session_repo = SessionRepository::new(env.connection.clone());

        Ok(Self {
            env,
            appointment_repo,
            schedule_repo,
            session_repo,
        })
    }
}
