use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Recipe;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Recipe::Table)
        .col(
            ColumnDef::new(Recipe::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Recipe::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Recipe::Cuisine)
                .string()
                .not_null()
                .string_len(50),
        )
        .col(ColumnDef::new(Recipe::Time).integer().not_null())
        .col(
            ColumnDef::new(Recipe::Difficulty)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(ColumnDef::new(Recipe::Servings).integer().not_null())
        .col(ColumnDef::new(Recipe::Ingredients).json_binary().not_null())
        .col(ColumnDef::new(Recipe::Instructions).json_binary().not_null())
        .col(ColumnDef::new(Recipe::Nutrition).json_binary().not_null())
        .col(
            ColumnDef::new(Recipe::Rating)
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Recipe::Tags).json_binary().not_null())
        .col(ColumnDef::new(Recipe::Tips).json_binary().not_null())
        .col(ColumnDef::new(Recipe::ImageUrl).string().null())
        .col(ColumnDef::new(Recipe::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Recipe::Table).to_owned()
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
