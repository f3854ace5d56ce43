use std::sync::Arc;

use smartrecipe_recipe::{
    Command, FavoriteCommand, SqliteFavoriteRepository, SqliteRecipeRepository,
};
use temp_dir::TempDir;

mod helpers;

async fn setup(dir: &TempDir) -> anyhow::Result<(Command, FavoriteCommand)> {
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let recipes = Arc::new(SqliteRecipeRepository(pool.clone()));
    let command = Command(recipes.clone());
    command.seed_catalog().await?;

    Ok((
        command,
        FavoriteCommand {
            favorites: Arc::new(SqliteFavoriteRepository(pool)),
            recipes,
        },
    ))
}

#[tokio::test]
async fn test_add_is_idempotent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, favorites) = setup(&dir).await?;

    let first = favorites.add("john", 3).await?;
    let second = favorites.add("john", 3).await?;

    assert_eq!(first, second);
    assert_eq!(favorites.list("john").await?.len(), 1);
    assert!(favorites.list("albert").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_add_unknown_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, favorites) = setup(&dir).await?;

    let err = favorites.add("john", 999).await.unwrap_err();
    assert!(matches!(err, smartrecipe_shared::Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn test_remove_reports_absence() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (_, favorites) = setup(&dir).await?;

    favorites.add("john", 1).await?;

    assert!(favorites.remove("john", 1).await?);
    assert!(!favorites.remove("john", 1).await?);
    assert!(favorites.list("john").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_toggle_and_recipes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (command, favorites) = setup(&dir).await?;

    assert!(favorites.toggle("john", 5).await?);
    assert!(favorites.toggle("john", 2).await?);
    assert!(!favorites.toggle("john", 5).await?);
    assert!(favorites.toggle("john", 5).await?);

    let recipes = favorites.recipes("john").await?;
    let expected = vec![
        command.find(2).await?.unwrap().name,
        command.find(5).await?.unwrap().name,
    ];
    assert_eq!(
        recipes.into_iter().map(|r| r.name).collect::<Vec<_>>(),
        expected
    );

    Ok(())
}
