use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smartrecipe_recipe::RecipeRepository;
use smartrecipe_shared::{Result, bail, not_found};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

use crate::CookingSessionRepository;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    InProgress,
    Completed,
    Abandoned,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionAction {
    Next,
    Previous,
    Complete,
    Abandon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingSession {
    pub id: i64,
    pub user_id: String,
    pub recipe_id: i64,
    pub status: SessionStatus,
    pub current_step: u32,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}

impl CookingSession {
    /// Moves the session along a recipe of `total_steps` instructions.
    ///
    /// Acknowledging the last instruction completes the session.
    pub fn apply(&mut self, action: SessionAction, total_steps: usize, now: i64) -> Result<()> {
        if self.status != SessionStatus::InProgress {
            bail!("Cooking session {} is already {}", self.id, self.status);
        }

        match action {
            SessionAction::Next if self.current_step as usize + 1 >= total_steps => {
                self.finish(now)
            }
            SessionAction::Next => self.current_step += 1,
            SessionAction::Previous => self.current_step = self.current_step.saturating_sub(1),
            SessionAction::Complete => self.finish(now),
            SessionAction::Abandon => self.status = SessionStatus::Abandoned,
        }

        Ok(())
    }

    fn finish(&mut self, now: i64) {
        self.status = SessionStatus::Completed;
        self.completed_at = Some(now);
    }
}

#[derive(Clone)]
pub struct CookingCommand {
    pub sessions: Arc<dyn CookingSessionRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
}

impl CookingCommand {
    pub async fn list(&self, user_id: &str) -> Result<Vec<CookingSession>> {
        self.sessions.list(user_id).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn start(&self, user_id: &str, recipe_id: i64) -> Result<CookingSession> {
        if user_id.trim().is_empty() {
            bail!("User id is required");
        }

        if self.recipes.find(recipe_id).await?.is_none() {
            return Err(not_found!("recipe {recipe_id}"));
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let session = self.sessions.insert(user_id, recipe_id, now).await?;
        tracing::info!(session_id = session.id, "Cooking session started");

        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    pub async fn apply(&self, id: i64, action: SessionAction) -> Result<CookingSession> {
        let mut session = self
            .sessions
            .find(id)
            .await?
            .ok_or_else(|| not_found!("cooking session {id}"))?;

        let total_steps = self
            .recipes
            .find(session.recipe_id)
            .await?
            .map(|recipe| recipe.instructions.len())
            .unwrap_or_default();

        session.apply(action, total_steps, OffsetDateTime::now_utc().unix_timestamp())?;
        self.sessions.update(&session).await?;

        tracing::info!(
            status = %session.status,
            current_step = session.current_step,
            "Cooking session updated"
        );

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_session() -> CookingSession {
        CookingSession {
            id: 1,
            user_id: "john".to_owned(),
            recipe_id: 1,
            status: SessionStatus::InProgress,
            current_step: 0,
            started_at: 0,
            completed_at: None,
        }
    }

    #[test]
    fn test_next_until_completed() {
        let mut session = create_session();

        session.apply(SessionAction::Next, 3, 10).unwrap();
        session.apply(SessionAction::Next, 3, 20).unwrap();
        assert_eq!(session.current_step, 2);
        assert_eq!(session.status, SessionStatus::InProgress);

        session.apply(SessionAction::Next, 3, 30).unwrap();
        assert_eq!(session.current_step, 2);
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.completed_at, Some(30));

        assert!(session.apply(SessionAction::Next, 3, 40).is_err());
    }

    #[test]
    fn test_previous_stops_at_first_step() {
        let mut session = create_session();

        session.apply(SessionAction::Previous, 3, 10).unwrap();
        assert_eq!(session.current_step, 0);

        session.apply(SessionAction::Next, 3, 10).unwrap();
        session.apply(SessionAction::Previous, 3, 10).unwrap();
        assert_eq!(session.current_step, 0);
    }

    #[test]
    fn test_no_instructions_completes_on_next() {
        let mut session = create_session();

        session.apply(SessionAction::Next, 0, 5).unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
    }

    #[test]
    fn test_abandon_is_final() {
        let mut session = create_session();

        session.apply(SessionAction::Abandon, 3, 5).unwrap();
        assert_eq!(session.status, SessionStatus::Abandoned);
        assert!(session.completed_at.is_none());
        assert!(session.apply(SessionAction::Complete, 3, 6).is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SessionStatus::InProgress.to_string(), "in_progress");
        assert_eq!(
            "abandoned".parse::<SessionStatus>().unwrap(),
            SessionStatus::Abandoned
        );
    }
}
