//! Domain model for the persisted admin session.
use serde::{Deserialize, Serialize};

/// The admin "session": a logged-in flag plus a display name. There is no
/// token and no expiry; this is a UI gate, not an authentication system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub logged_in: bool,
    pub display_name: String,
}
