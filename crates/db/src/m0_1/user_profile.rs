use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::UserProfile;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(UserProfile::Table)
        .col(
            ColumnDef::new(UserProfile::UserId)
                .string()
                .not_null()
                .string_len(64)
                .primary_key(),
        )
        .col(ColumnDef::new(UserProfile::Name).string().null())
        .col(
            ColumnDef::new(UserProfile::DietaryRestrictions)
                .json_binary()
                .not_null(),
        )
        .col(
            ColumnDef::new(UserProfile::CookingLevel)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(
            ColumnDef::new(UserProfile::FamilySize)
                .integer()
                .not_null()
                .default(2),
        )
        .col(
            ColumnDef::new(UserProfile::Preferences)
                .json_binary()
                .not_null(),
        )
        .col(ColumnDef::new(UserProfile::Allergies).json_binary().not_null())
        .col(
            ColumnDef::new(UserProfile::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(UserProfile::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(UserProfile::Table).to_owned()
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
