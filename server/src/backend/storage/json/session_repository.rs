//! # Session Repository
//!
//! Single YAML file `session.yaml` with the admin's logged-in flag and
//! display name. Logout deletes the file.

use anyhow::{Context, Result};
use log::info;
use std::fs;

use super::connection::JsonConnection;
use crate::backend::domain::models::session::AdminSession;
use crate::backend::storage::traits::SessionStorage;

#[derive(Clone)]
pub struct SessionRepository {
    connection: JsonConnection,
}

impl SessionRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl SessionStorage for SessionRepository {
    fn get_session(&self) -> Result<Option<AdminSession>> {
        let path = self.connection.session_file_path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let session = serde_yaml::from_str(&contents)
            .with_context(|| format!("corrupted session file at {}", path.display()))?;
        Ok(Some(session))
    }

    fn save_session(&self, session: &AdminSession) -> Result<()> {
        let path = self.connection.session_file_path();
        let contents = serde_yaml::to_string(session).context("failed to serialize session")?;
        self.connection.write_atomic(&path, &contents)
    }

    fn clear_session(&self) -> Result<()> {
        let path = self.connection.session_file_path();
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
            info!("Cleared admin session");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::test_utils::TestHelper;

    #[test]
    fn session_round_trips_and_clears() {
        let helper = TestHelper::new().unwrap();
        let session = AdminSession {
            logged_in: true,
            display_name: "Jhojan Mosquera".to_string(),
        };

        helper.session_repo.save_session(&session).unwrap();
        assert_eq!(helper.session_repo.get_session().unwrap(), Some(session));

        helper.session_repo.clear_session().unwrap();
        assert_eq!(helper.session_repo.get_session().unwrap(), None);
    }

    #[test]
    fn clearing_a_missing_session_is_a_no_op() {
        let helper = TestHelper::new().unwrap();
        helper.session_repo.clear_session().unwrap();
    }
}
