use sea_query::{Expr, ExprTrait, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use smartrecipe_db::table::{CookingSession as CookingSessionTable, MealPlan as MealPlanTable};
use smartrecipe_shared::Result;
use sqlx::{SqlitePool, prelude::FromRow, types::Json};

use crate::{
    CookingSession, CookingSessionRepository, MealPlan, MealPlanRepository, SessionStatus,
    WeekMeals,
};

#[derive(Clone)]
pub struct SqliteMealPlanRepository(pub SqlitePool);

#[derive(FromRow)]
struct MealPlanRow {
    user_id: String,
    week_start: String,
    meals: Json<WeekMeals>,
    created_at: i64,
}

#[async_trait::async_trait]
impl MealPlanRepository for SqliteMealPlanRepository {
    async fn find(&self, user_id: &str, week_start: &str) -> Result<Option<MealPlan>> {
        let statement = Query::select()
            .columns([
                MealPlanTable::UserId,
                MealPlanTable::WeekStart,
                MealPlanTable::Meals,
                MealPlanTable::CreatedAt,
            ])
            .from(MealPlanTable::Table)
            .and_where(Expr::col(MealPlanTable::UserId).eq(user_id))
            .and_where(Expr::col(MealPlanTable::WeekStart).eq(week_start))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(|row| MealPlan {
            user_id: row.user_id,
            week_start: row.week_start,
            meals: row.meals.0,
            created_at: row.created_at,
        }))
    }

    async fn upsert(&self, plan: &MealPlan) -> Result<()> {
        let statement = Query::insert()
            .into_table(MealPlanTable::Table)
            .columns([
                MealPlanTable::UserId,
                MealPlanTable::WeekStart,
                MealPlanTable::Meals,
                MealPlanTable::CreatedAt,
            ])
            .values_panic([
                plan.user_id.to_owned().into(),
                plan.week_start.to_owned().into(),
                serde_json::to_string(&plan.meals)?.into(),
                plan.created_at.into(),
            ])
            .on_conflict(
                OnConflict::columns([MealPlanTable::UserId, MealPlanTable::WeekStart])
                    .update_columns([MealPlanTable::Meals, MealPlanTable::CreatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}

#[derive(Clone)]
pub struct SqliteCookingSessionRepository(pub SqlitePool);

#[derive(FromRow)]
struct CookingSessionRow {
    id: i64,
    user_id: String,
    recipe_id: i64,
    status: String,
    current_step: i64,
    started_at: i64,
    completed_at: Option<i64>,
}

impl TryFrom<CookingSessionRow> for CookingSession {
    type Error = smartrecipe_shared::Error;

    fn try_from(row: CookingSessionRow) -> Result<Self> {
        let status = row
            .status
            .parse::<SessionStatus>()
            .map_err(anyhow::Error::from)?;

        Ok(CookingSession {
            id: row.id,
            user_id: row.user_id,
            recipe_id: row.recipe_id,
            status,
            current_step: row.current_step as u32,
            started_at: row.started_at,
            completed_at: row.completed_at,
        })
    }
}

const SESSION_COLUMNS: [CookingSessionTable; 7] = [
    CookingSessionTable::Id,
    CookingSessionTable::UserId,
    CookingSessionTable::RecipeId,
    CookingSessionTable::Status,
    CookingSessionTable::CurrentStep,
    CookingSessionTable::StartedAt,
    CookingSessionTable::CompletedAt,
];

#[async_trait::async_trait]
impl CookingSessionRepository for SqliteCookingSessionRepository {
    async fn find(&self, id: i64) -> Result<Option<CookingSession>> {
        let statement = Query::select()
            .columns(SESSION_COLUMNS)
            .from(CookingSessionTable::Table)
            .and_where(Expr::col(CookingSessionTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, CookingSessionRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        row.map(CookingSession::try_from).transpose()
    }

    async fn list(&self, user_id: &str) -> Result<Vec<CookingSession>> {
        let statement = Query::select()
            .columns(SESSION_COLUMNS)
            .from(CookingSessionTable::Table)
            .and_where(Expr::col(CookingSessionTable::UserId).eq(user_id))
            .order_by(CookingSessionTable::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, CookingSessionRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        rows.into_iter().map(CookingSession::try_from).collect()
    }

    async fn insert(
        &self,
        user_id: &str,
        recipe_id: i64,
        started_at: i64,
    ) -> Result<CookingSession> {
        let status = SessionStatus::InProgress;
        let statement = Query::insert()
            .into_table(CookingSessionTable::Table)
            .columns([
                CookingSessionTable::UserId,
                CookingSessionTable::RecipeId,
                CookingSessionTable::Status,
                CookingSessionTable::CurrentStep,
                CookingSessionTable::StartedAt,
            ])
            .values_panic([
                user_id.into(),
                recipe_id.into(),
                status.to_string().into(),
                0i64.into(),
                started_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.0)
            .await?
            .last_insert_rowid();

        Ok(CookingSession {
            id,
            user_id: user_id.to_owned(),
            recipe_id,
            status,
            current_step: 0,
            started_at,
            completed_at: None,
        })
    }

    async fn update(&self, session: &CookingSession) -> Result<()> {
        let statement = Query::update()
            .table(CookingSessionTable::Table)
            .values([
                (CookingSessionTable::Status, session.status.to_string().into()),
                (
                    CookingSessionTable::CurrentStep,
                    (session.current_step as i64).into(),
                ),
                (CookingSessionTable::CompletedAt, session.completed_at.into()),
            ])
            .and_where(Expr::col(CookingSessionTable::Id).eq(session.id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
