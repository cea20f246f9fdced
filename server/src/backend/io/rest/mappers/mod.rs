//! DTO mappers between the domain models and the shared wire types.

pub mod appointment_mapper;
pub mod schedule_mapper;
