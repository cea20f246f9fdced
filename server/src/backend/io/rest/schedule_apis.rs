//! # REST API for Availability
//!
//! Endpoints for the client-facing slot listing and the admin's weekly
//! schedule configuration.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::NaiveDate;
use log::{error, info};
use serde::Deserialize;

use crate::backend::domain::commands::availability::UpdateScheduleCommand;
use crate::backend::domain::error::BookingError;
use crate::backend::io::rest::mappers::schedule_mapper::ScheduleMapper;
use crate::backend::AppState;
use shared::ValidationErrorResponse;

/// Query parameters for the slot listing API.
#[derive(Debug, Deserialize)]
pub struct DaySlotsParams {
    pub date: String,
}

/// Free and booked slots for a calendar date.
pub async fn get_day_slots(
    State(state): State<AppState>,
    Query(params): Query<DaySlotsParams>,
) -> impl IntoResponse {
    info!("GET /api/slots - date: {}", params.date);

    let date = match NaiveDate::parse_from_str(&params.date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, format!("invalid date '{}'", params.date))
                .into_response()
        }
    };

    match state
        .availability_service
        .day_slots(date, &state.appointment_service)
    {
        Ok(day_slots) => {
            (StatusCode::OK, Json(ScheduleMapper::day_slots_to_dto(day_slots))).into_response()
        }
        Err(e) => {
            error!("Failed to compute slots: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing slots").into_response()
        }
    }
}

/// The current weekly schedule (saved, or the defaults).
pub async fn get_schedule(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/availability");

    match state.availability_service.schedule() {
        Ok(schedule) => (StatusCode::OK, Json(ScheduleMapper::to_dto(schedule))).into_response(),
        Err(e) => {
            error!("Failed to read schedule: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error reading availability").into_response()
        }
    }
}

/// Save the full weekly schedule.
pub async fn update_schedule(
    State(state): State<AppState>,
    Json(request): Json<shared::WeekSchedule>,
) -> impl IntoResponse {
    info!("PUT /api/availability");

    let schedule = match ScheduleMapper::to_domain(request) {
        Ok(schedule) => schedule,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match state
        .availability_service
        .update_schedule(UpdateScheduleCommand { schedule })
    {
        Ok(schedule) => (StatusCode::OK, Json(ScheduleMapper::to_dto(schedule))).into_response(),
        Err(e @ BookingError::InvalidSchedule(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse {
                errors: e.messages(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to save schedule: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not save the schedule").into_response()
        }
    }
}

/// Weekly summary counters for the admin page.
pub async fn get_weekly_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/availability/summary");

    match state.availability_service.weekly_summary() {
        Ok(summary) => {
            (StatusCode::OK, Json(ScheduleMapper::summary_to_dto(summary))).into_response()
        }
        Err(e) => {
            error!("Failed to compute weekly summary: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing summary").into_response()
        }
    }
}
