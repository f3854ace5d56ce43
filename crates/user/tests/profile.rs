use std::sync::Arc;

use serde_json::json;
use smartrecipe_shared::CookingLevel;
use smartrecipe_user::{Command, ProfileInput, ProfilePatch, SqliteProfileRepository};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_save_creates_then_updates() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(Arc::new(SqliteProfileRepository(pool)));

    assert!(command.find("john").await?.is_none());

    let created = command
        .save(ProfileInput {
            name: Some("John".to_owned()),
            dietary_restrictions: vec!["vegan".to_owned()],
            ..ProfileInput::new("john")
        })
        .await?;
    assert_eq!(created.cooking_level, CookingLevel::Beginner);
    assert_eq!(created.family_size, 2);

    let updated = command
        .save(ProfileInput {
            cooking_level: CookingLevel::Intermediate,
            family_size: 4,
            ..ProfileInput::new("john")
        })
        .await?;
    assert_eq!(updated.created_at, created.created_at);

    let found = command.find("john").await?.unwrap();
    assert_eq!(found, updated);
    assert!(found.dietary_restrictions.is_empty());
    assert_eq!(found.family_size, 4);

    Ok(())
}

#[tokio::test]
async fn test_update_merges_patch() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(Arc::new(SqliteProfileRepository(pool)));

    command
        .save(ProfileInput {
            name: Some("John".to_owned()),
            allergies: vec!["peanuts".to_owned()],
            preferences: json!({"units": "metric"}).as_object().cloned().unwrap(),
            ..ProfileInput::new("john")
        })
        .await?;

    let patch: ProfilePatch = serde_json::from_value(json!({
        "cookingLevel": "advanced",
        "preferences": {"spicy": true}
    }))?;
    let profile = command.update("john", patch).await?;

    assert_eq!(profile.cooking_level, CookingLevel::Advanced);
    assert_eq!(profile.name.as_deref(), Some("John"));
    assert_eq!(profile.allergies, vec!["peanuts"]);
    assert_eq!(profile.preferences["units"], json!("metric"));
    assert_eq!(profile.preferences["spicy"], json!(true));
    assert_eq!(command.find("john").await?.unwrap(), profile);

    Ok(())
}

#[tokio::test]
async fn test_update_missing_profile() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = Command(Arc::new(SqliteProfileRepository(pool)));

    let err = command
        .update("albert", ProfilePatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, smartrecipe_shared::Error::NotFound(_)));

    Ok(())
}
