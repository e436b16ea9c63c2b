//! Study plan, API key and week rollover.

use super::Planner;
use crate::{
    display::UpdateResult,
    engine::calendar::week_key,
    error::{CadenceError, Result},
    generator::{CompletionClient, StudyPlanGenerator},
    models::{PlanDay, Session, StudyPlan, Weekday},
    params::{SessionRef, UpdateSession},
};

/// Prefix every valid OpenAI secret key starts with.
pub const API_KEY_PREFIX: &str = "sk-";

fn plan_day(plan: &mut StudyPlan, day: Weekday) -> Result<&mut PlanDay> {
    plan.days
        .get_mut(day.index())
        .ok_or_else(|| CadenceError::SessionNotFound {
            day: day.to_string(),
            number: 1,
        })
}

/// Mutable access to a session by its 1-based number.
fn session_mut<'a>(plan: &'a mut StudyPlan, session: &SessionRef) -> Result<&'a mut Session> {
    let not_found = || CadenceError::SessionNotFound {
        day: session.day.to_string(),
        number: session.number,
    };
    let index = session.number.checked_sub(1).ok_or_else(not_found)?;
    plan_day(plan, session.day)?
        .sessions
        .get_mut(index)
        .ok_or_else(not_found)
}

impl Planner {
    /// The saved study plan, if any.
    pub async fn study_plan(&self) -> Result<Option<StudyPlan>> {
        self.with_db(|db| db.load_study_plan()).await
    }

    /// Replaces the saved study plan.
    pub async fn save_study_plan(&self, plan: &StudyPlan) -> Result<()> {
        plan.validate_shape()
            .map_err(|reason| CadenceError::invalid_input("plan").with_reason(reason))?;
        let plan = plan.clone();
        self.with_db(move |db| db.save_study_plan(&plan)).await
    }

    /// Deletes the saved study plan. Returns whether there was one.
    pub async fn clear_study_plan(&self) -> Result<bool> {
        self.with_db(|db| db.clear_study_plan()).await
    }

    /// Loads the plan, applies `edit` and saves the result.
    async fn edit_study_plan<T, F>(&self, edit: F) -> Result<T>
    where
        F: FnOnce(&mut StudyPlan) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        self.with_db(move |db| {
            let mut plan = db.load_study_plan()?.ok_or(CadenceError::NoStudyPlan)?;
            let outcome = edit(&mut plan)?;
            db.save_study_plan(&plan)?;
            Ok(outcome)
        })
        .await
    }

    /// Appends a placeholder session to a day and returns the day.
    pub async fn add_session(&self, day: Weekday) -> Result<PlanDay> {
        self.edit_study_plan(move |plan| {
            let plan_day = plan_day(plan, day)?;
            plan_day.sessions.push(Session::default());
            Ok(plan_day.clone())
        })
        .await
    }

    /// Edits the given fields of a session.
    pub async fn update_session(&self, params: UpdateSession) -> Result<UpdateResult<Session>> {
        let (session_ref, patch) = params.into_parts()?;
        self.edit_study_plan(move |plan| {
            let session = session_mut(plan, &session_ref)?;
            let changes = patch.apply(session);
            Ok(UpdateResult::with_changes(session.clone(), changes))
        })
        .await
    }

    /// Removes a session and returns it.
    pub async fn delete_session(&self, params: &SessionRef) -> Result<Session> {
        let session_ref = params.clone();
        self.edit_study_plan(move |plan| {
            session_mut(plan, &session_ref)?;
            let plan_day = plan_day(plan, session_ref.day)?;
            Ok(plan_day.sessions.remove(session_ref.number - 1))
        })
        .await
    }

    /// Stores the OpenAI API key after checking its format.
    pub async fn set_api_key(&self, api_key: &str) -> Result<()> {
        let api_key = api_key.trim().to_string();
        if !api_key.starts_with(API_KEY_PREFIX) {
            return Err(CadenceError::invalid_input("api_key")
                .with_reason(format!("API key must start with '{API_KEY_PREFIX}'")));
        }
        self.with_db(move |db| db.save_api_key(&api_key)).await
    }

    /// The stored API key, if any.
    pub async fn api_key(&self) -> Result<Option<String>> {
        self.with_db(|db| db.load_api_key()).await
    }

    /// Detects that the real-world week has changed since the last run.
    ///
    /// On a new week the study plan is cleared; the schedule and statuses are
    /// kept. The first run only records the current week. Returns whether a
    /// plan was cleared.
    pub async fn check_week_rollover(&self) -> Result<bool> {
        let current = week_key(self.today());
        self.with_db(move |db| {
            let stored = db.load_week_key()?;
            if stored.as_deref() == Some(current.as_str()) {
                return Ok(false);
            }
            let cleared = match stored {
                Some(previous) => {
                    log::info!("Week changed from {previous} to {current}");
                    db.clear_study_plan()?
                }
                None => false,
            };
            db.save_week_key(&current)?;
            Ok(cleared)
        })
        .await
    }

    /// Generates a study plan from a free-text description and saves it,
    /// replacing any previous plan. Nothing is saved when generation fails.
    pub async fn generate_study_plan<C: CompletionClient>(
        &self,
        generator: &StudyPlanGenerator<C>,
        input: &str,
        api_key: &str,
    ) -> Result<StudyPlan> {
        let plan = generator.generate(input, api_key, self.today()).await?;
        let saved = plan.clone();
        self.with_db(move |db| db.save_study_plan(&saved)).await?;
        log::info!("Saved generated study plan with {} days", plan.days.len());
        Ok(plan)
    }
}
