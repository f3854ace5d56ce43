use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use smartrecipe_db::table::PantryIngredient;
use smartrecipe_shared::Result;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use crate::{IngredientCategory, PantryEntry, PantryRepository};

#[derive(Clone)]
pub struct SqlitePantryRepository(pub SqlitePool);

#[derive(FromRow)]
struct PantryRow {
    id: i64,
    user_id: String,
    ingredient: String,
    category: String,
    added_at: i64,
}

impl TryFrom<PantryRow> for PantryEntry {
    type Error = smartrecipe_shared::Error;

    fn try_from(row: PantryRow) -> Result<Self> {
        Ok(PantryEntry {
            id: row.id,
            user_id: row.user_id,
            ingredient: row.ingredient,
            category: row
                .category
                .parse::<IngredientCategory>()
                .map_err(anyhow::Error::from)?,
            added_at: row.added_at,
        })
    }
}

#[async_trait::async_trait]
impl PantryRepository for SqlitePantryRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<PantryEntry>> {
        let statement = Query::select()
            .columns([
                PantryIngredient::Id,
                PantryIngredient::UserId,
                PantryIngredient::Ingredient,
                PantryIngredient::Category,
                PantryIngredient::AddedAt,
            ])
            .from(PantryIngredient::Table)
            .and_where(Expr::col(PantryIngredient::UserId).eq(user_id))
            .order_by(PantryIngredient::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, PantryRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        rows.into_iter().map(PantryEntry::try_from).collect()
    }

    async fn insert(
        &self,
        user_id: &str,
        ingredient: &str,
        category: IngredientCategory,
    ) -> Result<PantryEntry> {
        let added_at = OffsetDateTime::now_utc().unix_timestamp();
        let statement = Query::insert()
            .into_table(PantryIngredient::Table)
            .columns([
                PantryIngredient::UserId,
                PantryIngredient::Ingredient,
                PantryIngredient::Category,
                PantryIngredient::AddedAt,
            ])
            .values_panic([
                user_id.into(),
                ingredient.into(),
                category.to_string().into(),
                added_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.0)
            .await?
            .last_insert_rowid();

        Ok(PantryEntry {
            id,
            user_id: user_id.to_owned(),
            ingredient: ingredient.to_owned(),
            category,
            added_at,
        })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let statement = Query::delete()
            .from_table(PantryIngredient::Table)
            .and_where(Expr::col(PantryIngredient::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected() > 0)
    }
}
