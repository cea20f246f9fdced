//! # REST API for the Admin Gate
//!
//! Login, logout and session read. The gate is a UI capability check over a
//! persisted flag; it is not a security boundary.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::backend::domain::commands::auth::LoginCommand;
use crate::backend::AppState;
use shared::{LoginRequest, LoginResponse, SessionResponse};

/// Validate the credential pair and persist the session.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/login - user: {}", request.username);

    let command = LoginCommand {
        username: request.username,
        password: request.password,
    };

    match state.auth_service.login(command) {
        Ok(outcome) => {
            let status = if outcome.success {
                StatusCode::OK
            } else {
                StatusCode::UNAUTHORIZED
            };
            (
                status,
                Json(LoginResponse {
                    success: outcome.success,
                    message: outcome.message,
                    display_name: outcome.display_name,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to process login: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not save the session").into_response()
        }
    }
}

/// Clear the persisted session.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/auth/logout");

    match state.auth_service.logout() {
        Ok(()) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => {
            error!("Failed to process logout: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not clear the session").into_response()
        }
    }
}

/// The current session state.
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/auth/session");

    match state.auth_service.current_session() {
        Ok(session) => (
            StatusCode::OK,
            Json(match session {
                Some(session) => SessionResponse {
                    logged_in: true,
                    display_name: Some(session.display_name),
                },
                None => SessionResponse {
                    logged_in: false,
                    display_name: None,
                },
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to read session: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reading session").into_response()
        }
    }
}
