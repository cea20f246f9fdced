//! # REST API Interface Layer
//!
//! HTTP endpoints for the booking app. This layer handles request/response
//! serialization, translation of domain errors to status codes, and request
//! logging. Business logic stays in the domain layer; nothing here touches
//! storage directly.

pub mod appointment_apis;
pub mod auth_apis;
pub mod mappers;
pub mod schedule_apis;
