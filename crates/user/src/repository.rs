use smartrecipe_shared::Result;

use crate::Profile;

#[async_trait::async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find(&self, user_id: &str) -> Result<Option<Profile>>;
    async fn insert(&self, profile: &Profile) -> Result<()>;
    async fn update(&self, profile: &Profile) -> Result<()>;
}
