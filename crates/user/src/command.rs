use std::sync::Arc;

use smartrecipe_shared::{Result, not_found};
use time::OffsetDateTime;
use validator::Validate;

use crate::{Profile, ProfileInput, ProfilePatch, ProfileRepository};

#[derive(Clone)]
pub struct Command(pub Arc<dyn ProfileRepository>);

impl Command {
    pub async fn find(&self, user_id: &str) -> Result<Option<Profile>> {
        self.0.find(user_id).await
    }

    /// Creates the profile on first save, then overwrites it in place.
    #[tracing::instrument(skip_all, fields(user_id = %input.user_id))]
    pub async fn save(&self, input: ProfileInput) -> Result<Profile> {
        input.validate()?;

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let existing = self.0.find(&input.user_id).await?;
        let profile = Profile {
            created_at: existing.as_ref().map(|p| p.created_at).unwrap_or(now),
            updated_at: now,
            user_id: input.user_id,
            name: input.name,
            dietary_restrictions: input.dietary_restrictions,
            cooking_level: input.cooking_level,
            family_size: input.family_size,
            preferences: input.preferences,
            allergies: input.allergies,
        };

        if existing.is_some() {
            self.0.update(&profile).await?;
            tracing::info!("Profile updated");
        } else {
            self.0.insert(&profile).await?;
            tracing::info!("Profile created");
        }

        Ok(profile)
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn update(&self, user_id: &str, patch: ProfilePatch) -> Result<Profile> {
        patch.validate()?;

        let mut profile = self
            .0
            .find(user_id)
            .await?
            .ok_or_else(|| not_found!("profile {user_id}"))?;

        patch.apply(&mut profile);
        profile.updated_at = OffsetDateTime::now_utc().unix_timestamp();
        self.0.update(&profile).await?;

        tracing::info!("Profile updated");

        Ok(profile)
    }
}
