use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde_json::{Map, Value};
use smartrecipe_db::table::UserProfile;
use smartrecipe_shared::{CookingLevel, Result};
use sqlx::{SqlitePool, prelude::FromRow, types::Json};

use crate::{Profile, ProfileRepository};

#[derive(Clone)]
pub struct SqliteProfileRepository(pub SqlitePool);

#[derive(FromRow)]
struct ProfileRow {
    user_id: String,
    name: Option<String>,
    dietary_restrictions: Json<Vec<String>>,
    cooking_level: String,
    family_size: i64,
    preferences: Json<Map<String, Value>>,
    allergies: Json<Vec<String>>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = smartrecipe_shared::Error;

    fn try_from(row: ProfileRow) -> Result<Self> {
        Ok(Profile {
            user_id: row.user_id,
            name: row.name,
            dietary_restrictions: row.dietary_restrictions.0,
            cooking_level: row
                .cooking_level
                .parse::<CookingLevel>()
                .map_err(anyhow::Error::from)?,
            family_size: row.family_size as u32,
            preferences: row.preferences.0,
            allergies: row.allergies.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait::async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn find(&self, user_id: &str) -> Result<Option<Profile>> {
        let statement = Query::select()
            .columns([
                UserProfile::UserId,
                UserProfile::Name,
                UserProfile::DietaryRestrictions,
                UserProfile::CookingLevel,
                UserProfile::FamilySize,
                UserProfile::Preferences,
                UserProfile::Allergies,
                UserProfile::CreatedAt,
                UserProfile::UpdatedAt,
            ])
            .from(UserProfile::Table)
            .and_where(Expr::col(UserProfile::UserId).eq(user_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, ProfileRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        row.map(Profile::try_from).transpose()
    }

    async fn insert(&self, profile: &Profile) -> Result<()> {
        let statement = Query::insert()
            .into_table(UserProfile::Table)
            .columns([
                UserProfile::UserId,
                UserProfile::Name,
                UserProfile::DietaryRestrictions,
                UserProfile::CookingLevel,
                UserProfile::FamilySize,
                UserProfile::Preferences,
                UserProfile::Allergies,
                UserProfile::CreatedAt,
                UserProfile::UpdatedAt,
            ])
            .values_panic([
                profile.user_id.to_owned().into(),
                profile.name.to_owned().into(),
                serde_json::to_string(&profile.dietary_restrictions)?.into(),
                profile.cooking_level.to_string().into(),
                (profile.family_size as i64).into(),
                serde_json::to_string(&profile.preferences)?.into(),
                serde_json::to_string(&profile.allergies)?.into(),
                profile.created_at.into(),
                profile.updated_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<()> {
        let statement = Query::update()
            .table(UserProfile::Table)
            .values([
                (UserProfile::Name, profile.name.to_owned().into()),
                (
                    UserProfile::DietaryRestrictions,
                    serde_json::to_string(&profile.dietary_restrictions)?.into(),
                ),
                (
                    UserProfile::CookingLevel,
                    profile.cooking_level.to_string().into(),
                ),
                (UserProfile::FamilySize, (profile.family_size as i64).into()),
                (
                    UserProfile::Preferences,
                    serde_json::to_string(&profile.preferences)?.into(),
                ),
                (
                    UserProfile::Allergies,
                    serde_json::to_string(&profile.allergies)?.into(),
                ),
                (UserProfile::UpdatedAt, profile.updated_at.into()),
            ])
            .and_where(Expr::col(UserProfile::UserId).eq(profile.user_id.to_owned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
