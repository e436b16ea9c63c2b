//! Typed accessors for the planner's stored records.
//!
//! Every record is a JSON blob. A blob that no longer parses is logged and
//! read as the record's empty state instead of failing the caller.

use serde::{de::DeserializeOwned, Serialize};

use super::keys;
use crate::{
    error::Result,
    models::{Schedule, StatusBook, StudyPlan},
};

impl super::Database {
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get_value(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("Ignoring corrupt '{key}' record: {e}");
                Ok(None)
            }
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_value(key, &raw)
    }

    pub fn load_schedule(&self) -> Result<Schedule> {
        Ok(self.load_json(keys::SCHEDULE)?.unwrap_or_default())
    }

    pub fn save_schedule(&self, schedule: &Schedule) -> Result<()> {
        self.save_json(keys::SCHEDULE, schedule)
    }

    pub fn load_statuses(&self) -> Result<StatusBook> {
        Ok(self.load_json(keys::TASK_STATUSES)?.unwrap_or_default())
    }

    pub fn save_statuses(&self, statuses: &StatusBook) -> Result<()> {
        self.save_json(keys::TASK_STATUSES, statuses)
    }

    /// The saved study plan. A stored `null` reads as no plan.
    pub fn load_study_plan(&self) -> Result<Option<StudyPlan>> {
        Ok(self.load_json::<Option<StudyPlan>>(keys::STUDY_PLAN)?.flatten())
    }

    pub fn save_study_plan(&self, plan: &StudyPlan) -> Result<()> {
        self.save_json(keys::STUDY_PLAN, plan)
    }

    /// Removes the study plan. Returns whether one was stored.
    pub fn clear_study_plan(&self) -> Result<bool> {
        self.remove_value(keys::STUDY_PLAN)
    }

    pub fn load_api_key(&self) -> Result<Option<String>> {
        self.load_json(keys::API_KEY)
    }

    pub fn save_api_key(&self, api_key: &str) -> Result<()> {
        self.save_json(keys::API_KEY, &api_key)
    }

    pub fn load_week_key(&self) -> Result<Option<String>> {
        self.load_json(keys::WEEK_KEY)
    }

    pub fn save_week_key(&self, week_key: &str) -> Result<()> {
        self.save_json(keys::WEEK_KEY, &week_key)
    }
}
