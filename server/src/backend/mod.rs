//! # Backend Module
//!
//! Contains all non-UI logic for the booking app and brings the layers
//! together:
//! - **Domain**: booking rules, slot generation, the admin gate
//! - **Storage**: flat-file persistence under one data directory
//! - **IO**: the REST interface the UI talks to
//!
//! The backend is UI-agnostic; any frontend that speaks the `shared` types
//! over HTTP can drive it.

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::domain::{AppointmentService, AuthService, AvailabilityService};
use crate::backend::storage::json::JsonConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub appointment_service: AppointmentService,
    pub availability_service: AvailabilityService,
    pub auth_service: AuthService,
}

/// Initialize the backend over the default data directory.
pub fn initialize_backend() -> Result<AppState> {
    info!("Setting up data directory");
    let connection = JsonConnection::new_default()?;
    Ok(initialize_backend_with(connection))
}

/// Initialize the backend over an explicit connection (tests use this with
/// a temporary directory).
pub fn initialize_backend_with(connection: JsonConnection) -> AppState {
    info!("Setting up domain services");
    AppState {
        appointment_service: AppointmentService::new(connection.clone()),
        availability_service: AvailabilityService::new(connection.clone()),
        auth_service: AuthService::new(connection),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the frontend dev server to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/slots", get(io::rest::schedule_apis::get_day_slots))
        .route(
            "/appointments",
            get(io::rest::appointment_apis::list_appointments)
                .post(io::rest::appointment_apis::create_appointment),
        )
        .route("/appointments/stats", get(io::rest::appointment_apis::get_stats))
        .route(
            "/appointments/:appointment_id/cancel",
            post(io::rest::appointment_apis::cancel_appointment),
        )
        .route(
            "/availability",
            get(io::rest::schedule_apis::get_schedule)
                .put(io::rest::schedule_apis::update_schedule),
        )
        .route(
            "/availability/summary",
            get(io::rest::schedule_apis::get_weekly_summary),
        )
        .route("/auth/login", post(io::rest::auth_apis::login))
        .route("/auth/logout", post(io::rest::auth_apis::logout))
        .route("/auth/session", get(io::rest::auth_apis::get_session));

    Router::new().nest("/api", api_routes).with_state(app_state).layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_router() -> (Router, TempDir) {
        let temp_dir = TempDir::new().expect("temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("connection");
        (create_router(initialize_backend_with(connection)), temp_dir)
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn booking_flow_creates_an_appointment() {
        let (router, _guard) = test_router();

        // 2025-06-10 is an open Tuesday under the default schedule.
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/slots?date=2025-06-10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let booking = serde_json::json!({
            "date": "2025-06-10",
            "time": "09:00",
            "first_name": "Ana",
            "last_name": "Rojas",
            "email": "ana@example.com",
            "phone": "+57 300 123 4567"
        });
        let response = router
            .clone()
            .oneshot(json_request("POST", "/api/appointments", booking))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn booking_with_missing_details_is_rejected() {
        let (router, _guard) = test_router();

        let booking = serde_json::json!({
            "date": "2025-06-10",
            "time": "09:00",
            "first_name": "",
            "last_name": "",
            "email": "",
            "phone": ""
        });
        let response = router
            .oneshot(json_request("POST", "/api/appointments", booking))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn cancelling_an_unknown_appointment_is_not_found() {
        let (router, _guard) = test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/appointments/apt-0-none/cancel")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn login_with_wrong_credentials_is_unauthorized() {
        let (router, _guard) = test_router();

        let credentials = serde_json::json!({
            "username": "stiven",
            "password": "wrong"
        });
        let response = router
            .oneshot(json_request("POST", "/api/auth/login", credentials))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn availability_endpoints_serve_the_default_week() {
        let (router, _guard) = test_router();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/availability")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/availability/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
