//! # REST API for Appointments
//!
//! Endpoints for listing, creating and cancelling appointments, plus the
//! admin dashboard counters.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};
use serde::Deserialize;

use crate::backend::domain::commands::appointments::{
    AppointmentListQuery, CancelAppointmentCommand,
};
use crate::backend::domain::error::BookingError;
use crate::backend::io::rest::mappers::appointment_mapper::AppointmentMapper;
use crate::backend::AppState;
use shared::{
    AppointmentListResponse, CancelAppointmentResponse, CreateAppointmentRequest,
    ValidationErrorResponse,
};

/// Query parameters for appointment listing.
#[derive(Debug, Deserialize)]
pub struct AppointmentListParams {
    pub filter: Option<shared::AppointmentFilter>,
}

/// List confirmed appointments, optionally filtered. Defaults to upcoming.
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(params): Query<AppointmentListParams>,
) -> impl IntoResponse {
    info!("GET /api/appointments - filter: {:?}", params.filter);

    let query = AppointmentListQuery {
        filter: AppointmentMapper::filter_to_domain(params.filter.unwrap_or_default()),
    };

    match state.appointment_service.list_appointments(query) {
        Ok(appointments) => (
            StatusCode::OK,
            Json(AppointmentListResponse {
                appointments: appointments
                    .into_iter()
                    .map(AppointmentMapper::to_dto)
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to list appointments: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing appointments").into_response()
        }
    }
}

/// Create a new appointment (the client booking submission).
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> impl IntoResponse {
    info!("POST /api/appointments - request: {:?}", request);

    let command = match AppointmentMapper::to_create_command(request) {
        Ok(command) => command,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match state.appointment_service.create_appointment(command) {
        Ok(appointment) => {
            (StatusCode::CREATED, Json(AppointmentMapper::to_dto(appointment))).into_response()
        }
        Err(e @ BookingError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse {
                errors: e.messages(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create appointment: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not save the appointment").into_response()
        }
    }
}

/// Cancel an appointment by id.
pub async fn cancel_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/appointments/{}/cancel", appointment_id);

    let command = CancelAppointmentCommand { id: appointment_id };
    match state.appointment_service.cancel_appointment(command) {
        Ok(appointment) => (
            StatusCode::OK,
            Json(CancelAppointmentResponse {
                appointment: AppointmentMapper::to_dto(appointment),
                message: "The appointment has been cancelled".to_string(),
            }),
        )
            .into_response(),
        Err(BookingError::NotFound(id)) => {
            (StatusCode::NOT_FOUND, format!("No appointment with id {}", id)).into_response()
        }
        Err(e) => {
            error!("Failed to cancel appointment: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not save the cancellation").into_response()
        }
    }
}

/// Booking counters for the admin dashboard.
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/appointments/stats");

    match state.appointment_service.stats() {
        Ok(stats) => (StatusCode::OK, Json(AppointmentMapper::stats_to_dto(stats))).into_response(),
        Err(e) => {
            error!("Failed to compute stats: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing stats").into_response()
        }
    }
}
