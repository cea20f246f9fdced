//! Admin session domain logic.
//!
//! A capability gate in front of the admin views, not an authentication
//! system: one credential pair, a persisted logged-in flag, no token and no
//! expiry. The credentials live in a replaceable value so the hardcoded
//! behavior stays isolated from the rest of the service.

use anyhow::Result;
use log::{info, warn};

use crate::backend::domain::commands::auth::LoginCommand;
use crate::backend::domain::models::session::AdminSession;
use crate::backend::storage::json::{JsonConnection, SessionRepository};
use crate::backend::storage::traits::SessionStorage;

/// The credential pair and display name the gate accepts.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
    pub display_name: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "stiven".to_string(),
            password: "palmblack123".to_string(),
            display_name: "Jhojan Mosquera".to_string(),
        }
    }
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: String,
    pub display_name: Option<String>,
}

#[derive(Clone)]
pub struct AuthService {
    session_repository: SessionRepository,
    credentials: AdminCredentials,
}

impl AuthService {
    pub fn new(connection: JsonConnection) -> Self {
        Self::with_credentials(connection, AdminCredentials::default())
    }

    /// Create an AuthService with custom credentials (for testing).
    pub fn with_credentials(connection: JsonConnection, credentials: AdminCredentials) -> Self {
        Self {
            session_repository: SessionRepository::new(connection),
            credentials,
        }
    }

    /// Check the pair and persist the session on success. A failed attempt
    /// is an Ok outcome with success false; only storage trouble is an Err.
    pub fn login(&self, command: LoginCommand) -> Result<LoginOutcome> {
        let is_match = command.username == self.credentials.username
            && command.password == self.credentials.password;

        if !is_match {
            warn!("Rejected login attempt for user '{}'", command.username);
            return Ok(LoginOutcome {
                success: false,
                message: "Incorrect username or password".to_string(),
                display_name: None,
            });
        }

        let session = AdminSession {
            logged_in: true,
            display_name: self.credentials.display_name.clone(),
        };
        self.session_repository.save_session(&session)?;
        info!("Admin '{}' logged in", command.username);

        Ok(LoginOutcome {
            success: true,
            message: format!("Welcome back, {}", session.display_name),
            display_name: Some(session.display_name),
        })
    }

    /// Clear the persisted session.
    pub fn logout(&self) -> Result<()> {
        self.session_repository.clear_session()?;
        info!("Admin logged out");
        Ok(())
    }

    /// The persisted session, if an admin is logged in.
    pub fn current_session(&self) -> Result<Option<AdminSession>> {
        Ok(self
            .session_repository
            .get_session()?
            .filter(|session| session.logged_in))
    }
}
