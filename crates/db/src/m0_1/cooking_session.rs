use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::CookingSession;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(CookingSession::Table)
        .col(
            ColumnDef::new(CookingSession::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(CookingSession::UserId)
                .string()
                .not_null()
                .string_len(64),
        )
        .col(
            ColumnDef::new(CookingSession::RecipeId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingSession::Status)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(
            ColumnDef::new(CookingSession::CurrentStep)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(CookingSession::StartedAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingSession::CompletedAt)
                .big_integer()
                .null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(CookingSession::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_cooking_session_user_id")
        .table(CookingSession::Table)
        .col(CookingSession::UserId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_cooking_session_user_id")
        .table(CookingSession::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
