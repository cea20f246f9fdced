//! Booking backend for the Palm Black barbershop.
//!
//! Two user-facing flows share one appointment ledger: clients pick a date,
//! see the free 30-minute slots and book one; the administrator logs in to
//! review or cancel bookings and to configure the weekly working hours.
//! All state lives in flat files under a single data directory.

pub mod backend;
