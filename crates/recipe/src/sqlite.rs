use sea_query::{Expr, ExprTrait, Func, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use smartrecipe_db::table::{Recipe as RecipeTable, UserFavorite};
use smartrecipe_shared::{Difficulty, Nutrition, Recipe, Result};
use sqlx::{SqlitePool, prelude::FromRow, types::Json};
use time::OffsetDateTime;

use crate::{CreateInput, FavoriteLink, FavoriteRepository, RecipeRepository};

#[derive(Clone)]
pub struct SqliteRecipeRepository(pub SqlitePool);

#[derive(FromRow)]
struct RecipeRow {
    id: i64,
    name: String,
    cuisine: String,
    time: i64,
    difficulty: String,
    servings: i64,
    ingredients: Json<Vec<String>>,
    instructions: Json<Vec<String>>,
    nutrition: Json<Nutrition>,
    rating: i64,
    tags: Json<Vec<String>>,
    tips: Json<Vec<String>>,
    image_url: Option<String>,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = smartrecipe_shared::Error;

    fn try_from(row: RecipeRow) -> Result<Self> {
        let difficulty = row
            .difficulty
            .parse::<Difficulty>()
            .map_err(anyhow::Error::from)?;

        Ok(Recipe {
            id: row.id,
            name: row.name,
            cuisine: row.cuisine,
            time: row.time as u32,
            difficulty,
            servings: row.servings as u32,
            ingredients: row.ingredients.0,
            instructions: row.instructions.0,
            nutrition: row.nutrition.0,
            rating: row.rating as u8,
            tags: row.tags.0,
            tips: row.tips.0,
            image_url: row.image_url,
        })
    }
}

const RECIPE_COLUMNS: [RecipeTable; 13] = [
    RecipeTable::Id,
    RecipeTable::Name,
    RecipeTable::Cuisine,
    RecipeTable::Time,
    RecipeTable::Difficulty,
    RecipeTable::Servings,
    RecipeTable::Ingredients,
    RecipeTable::Instructions,
    RecipeTable::Nutrition,
    RecipeTable::Rating,
    RecipeTable::Tags,
    RecipeTable::Tips,
    RecipeTable::ImageUrl,
];

#[async_trait::async_trait]
impl RecipeRepository for SqliteRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>> {
        let statement = Query::select()
            .columns(RECIPE_COLUMNS)
            .from(RecipeTable::Table)
            .order_by(RecipeTable::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        rows.into_iter().map(Recipe::try_from).collect()
    }

    async fn find(&self, id: i64) -> Result<Option<Recipe>> {
        let statement = Query::select()
            .columns(RECIPE_COLUMNS)
            .from(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        row.map(Recipe::try_from).transpose()
    }

    async fn insert(&self, input: CreateInput) -> Result<Recipe> {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let statement = Query::insert()
            .into_table(RecipeTable::Table)
            .columns([
                RecipeTable::Name,
                RecipeTable::Cuisine,
                RecipeTable::Time,
                RecipeTable::Difficulty,
                RecipeTable::Servings,
                RecipeTable::Ingredients,
                RecipeTable::Instructions,
                RecipeTable::Nutrition,
                RecipeTable::Rating,
                RecipeTable::Tags,
                RecipeTable::Tips,
                RecipeTable::ImageUrl,
                RecipeTable::CreatedAt,
            ])
            .values_panic([
                input.name.to_owned().into(),
                input.cuisine.to_owned().into(),
                (input.time as i64).into(),
                input.difficulty.to_string().into(),
                (input.servings as i64).into(),
                serde_json::to_string(&input.ingredients)?.into(),
                serde_json::to_string(&input.instructions)?.into(),
                serde_json::to_string(&input.nutrition)?.into(),
                (input.rating as i64).into(),
                serde_json::to_string(&input.tags)?.into(),
                serde_json::to_string(&input.tips)?.into(),
                input.image_url.to_owned().into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.0)
            .await?
            .last_insert_rowid();

        Ok(Recipe {
            id,
            name: input.name,
            cuisine: input.cuisine,
            time: input.time,
            difficulty: input.difficulty,
            servings: input.servings,
            ingredients: input.ingredients,
            instructions: input.instructions,
            nutrition: input.nutrition,
            rating: input.rating,
            tags: input.tags,
            tips: input.tips,
            image_url: input.image_url,
        })
    }

    async fn count(&self) -> Result<i64> {
        let statement = Query::select()
            .expr(Func::count(Expr::col(RecipeTable::Id)))
            .from(RecipeTable::Table)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.0)
            .await?;

        Ok(total)
    }
}

#[derive(Clone)]
pub struct SqliteFavoriteRepository(pub SqlitePool);

#[derive(FromRow)]
struct FavoriteRow {
    id: i64,
    user_id: String,
    recipe_id: i64,
    created_at: i64,
}

impl From<FavoriteRow> for FavoriteLink {
    fn from(row: FavoriteRow) -> Self {
        FavoriteLink {
            id: row.id,
            user_id: row.user_id,
            recipe_id: row.recipe_id,
            created_at: row.created_at,
        }
    }
}

const FAVORITE_COLUMNS: [UserFavorite; 4] = [
    UserFavorite::Id,
    UserFavorite::UserId,
    UserFavorite::RecipeId,
    UserFavorite::CreatedAt,
];

#[async_trait::async_trait]
impl FavoriteRepository for SqliteFavoriteRepository {
    async fn list(&self, user_id: &str) -> Result<Vec<FavoriteLink>> {
        let statement = Query::select()
            .columns(FAVORITE_COLUMNS)
            .from(UserFavorite::Table)
            .and_where(Expr::col(UserFavorite::UserId).eq(user_id))
            .order_by(UserFavorite::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, FavoriteRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(FavoriteLink::from).collect())
    }

    async fn find(&self, user_id: &str, recipe_id: i64) -> Result<Option<FavoriteLink>> {
        let statement = Query::select()
            .columns(FAVORITE_COLUMNS)
            .from(UserFavorite::Table)
            .and_where(Expr::col(UserFavorite::UserId).eq(user_id))
            .and_where(Expr::col(UserFavorite::RecipeId).eq(recipe_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, FavoriteRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(FavoriteLink::from))
    }

    async fn insert(&self, user_id: &str, recipe_id: i64) -> Result<FavoriteLink> {
        let statement = Query::insert()
            .into_table(UserFavorite::Table)
            .columns([
                UserFavorite::UserId,
                UserFavorite::RecipeId,
                UserFavorite::CreatedAt,
            ])
            .values_panic([
                user_id.into(),
                recipe_id.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::columns([UserFavorite::UserId, UserFavorite::RecipeId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        self.find(user_id, recipe_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("favorite {user_id}/{recipe_id} was not stored").into())
    }

    async fn delete(&self, user_id: &str, recipe_id: i64) -> Result<bool> {
        let statement = Query::delete()
            .from_table(UserFavorite::Table)
            .and_where(Expr::col(UserFavorite::UserId).eq(user_id))
            .and_where(Expr::col(UserFavorite::RecipeId).eq(recipe_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(result.rows_affected() > 0)
    }
}
