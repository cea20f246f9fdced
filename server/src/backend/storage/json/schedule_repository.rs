//! # Schedule Repository
//!
//! Single YAML file `availability.yaml` holding the weekly rule set. The
//! file only exists once the administrator has saved a schedule; until then
//! the domain layer falls back to the built-in defaults.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;

use super::connection::JsonConnection;
use crate::backend::domain::models::schedule::WeekSchedule;
use crate::backend::storage::traits::ScheduleStorage;

#[derive(Clone)]
pub struct ScheduleRepository {
    connection: JsonConnection,
}

impl ScheduleRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl ScheduleStorage for ScheduleRepository {
    fn get_schedule(&self) -> Result<Option<WeekSchedule>> {
        let path = self.connection.availability_file_path();
        if !path.exists() {
            debug!("No saved schedule at {}", path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let schedule = serde_yaml::from_str(&contents)
            .with_context(|| format!("corrupted availability schedule at {}", path.display()))?;
        Ok(Some(schedule))
    }

    fn save_schedule(&self, schedule: &WeekSchedule) -> Result<()> {
        let path = self.connection.availability_file_path();
        let contents =
            serde_yaml::to_string(schedule).context("failed to serialize availability schedule")?;
        self.connection.write_atomic(&path, &contents)?;
        info!("Saved availability schedule to {}", path.display());
        Ok(())
    }
}
