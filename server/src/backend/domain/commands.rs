//! Command and query types the io layer hands to the domain services.

pub mod appointments {
    use chrono::{NaiveDate, NaiveTime};

    /// Input for creating an appointment. Date and time are already parsed;
    /// the contact fields are validated by the service.
    #[derive(Debug, Clone)]
    pub struct CreateAppointmentCommand {
        pub date: NaiveDate,
        pub time: NaiveTime,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
        pub phone: String,
    }

    #[derive(Debug, Clone)]
    pub struct CancelAppointmentCommand {
        pub id: String,
    }

    /// Which slice of the ledger to list.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum AppointmentFilter {
        All,
        Today,
        #[default]
        Upcoming,
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct AppointmentListQuery {
        pub filter: AppointmentFilter,
    }
}

pub mod availability {
    use crate::backend::domain::models::schedule::WeekSchedule;

    /// Full replacement of the weekly rule set.
    #[derive(Debug, Clone)]
    pub struct UpdateScheduleCommand {
        pub schedule: WeekSchedule,
    }
}

pub mod auth {
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub username: String,
        pub password: String,
    }
}
