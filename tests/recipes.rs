use axum::http::StatusCode;
use serde_json::{Value, json};
use temp_dir::TempDir;

mod helpers;

fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .map(|recipes| recipes.iter().filter_map(|r| r["id"].as_i64()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_health_and_ready() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir).await?;

    let (status, body) = helpers::get(&app, "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = helpers::get(&app, "/ready").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    Ok(())
}

#[tokio::test]
async fn test_list_catalog() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir).await?;

    let (status, body) = helpers::get(&app, "/api/recipes").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=25).collect::<Vec<_>>());
    assert_eq!(body[0]["name"], "Mediterranean Quinoa Bowl");
    assert_eq!(body[0]["difficulty"], "easy");

    let (_, body) = helpers::get(&app, "/api/recipes?dietary_restrictions=keto").await?;
    assert_eq!(ids(&body), vec![17]);

    let (_, body) = helpers::get(
        &app,
        "/api/recipes?ingredients=quinoa,tomatoes,cucumber,feta%20cheese&dietary_restrictions=keto",
    )
    .await?;
    assert_eq!(ids(&body), vec![1]);

    Ok(())
}

#[tokio::test]
async fn test_find_and_create() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir).await?;

    let (status, body) = helpers::get(&app, "/api/recipes/3").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Hummus Power Bowl");

    let (status, body) = helpers::get(&app, "/api/recipes/999").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "recipe 999 not found");

    let recipe = json!({
        "name": "Garlic Rice",
        "cuisine": "Asian",
        "time": 20,
        "difficulty": "easy",
        "servings": 2,
        "ingredients": ["rice", "garlic"],
        "instructions": ["Fry garlic", "Add rice"],
        "rating": 42,
        "tags": ["vegan"]
    });
    let (status, body) = helpers::post(&app, "/api/recipes", recipe.clone()).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 26);

    let (status, _) = helpers::get(&app, "/api/recipes/26").await?;
    assert_eq!(status, StatusCode::OK);

    let mut invalid = recipe;
    invalid["name"] = json!("");
    let (status, body) = helpers::post(&app, "/api/recipes", invalid).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_generate_with_explicit_inputs() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir).await?;

    let (status, body) = helpers::post(
        &app,
        "/api/recipes/generate",
        json!({
            "userId": "john",
            "ingredients": ["quinoa", "tomatoes", "cucumber", "feta cheese"],
            "dietaryRestrictions": ["vegetarian"],
            "cookingLevel": "beginner"
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1]);

    let (_, body) = helpers::post(
        &app,
        "/api/recipes/generate",
        json!({
            "userId": "john",
            "ingredients": [],
            "dietaryRestrictions": [],
            "cookingLevel": "advanced"
        }),
    )
    .await?;
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6]);

    Ok(())
}

#[tokio::test]
async fn test_generate_falls_back_to_stored_data() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir).await?;

    helpers::post(
        &app,
        "/api/profile",
        json!({
            "userId": "john",
            "dietaryRestrictions": ["vegetarian"],
            "cookingLevel": "beginner"
        }),
    )
    .await?;
    for ingredient in ["quinoa", "tomatoes", "cucumber", "feta cheese"] {
        helpers::post(
            &app,
            "/api/ingredients",
            json!({"userId": "john", "ingredient": ingredient}),
        )
        .await?;
    }

    let (status, body) =
        helpers::post(&app, "/api/recipes/generate", json!({"userId": "john"})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1]);

    let (status, _) = helpers::post(&app, "/api/recipes/generate", json!({"userId": ""})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_favorites() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir).await?;

    let favorite = json!({"userId": "john", "recipeId": 3});
    let (status, body) = helpers::post(&app, "/api/favorites", favorite.clone()).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipeId"], 3);

    helpers::post(&app, "/api/favorites", favorite.clone()).await?;
    let (_, body) = helpers::get(&app, "/api/favorites/john").await?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (_, body) = helpers::post(&app, "/api/favorites/toggle", favorite.clone()).await?;
    assert_eq!(body, json!({"favorited": false}));
    let (_, body) = helpers::post(&app, "/api/favorites/toggle", favorite).await?;
    assert_eq!(body, json!({"favorited": true}));

    let (_, body) = helpers::get(&app, "/api/favorites/john/recipes").await?;
    assert_eq!(ids(&body), vec![3]);

    let (status, body) = helpers::delete(&app, "/api/favorites/john/3").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = helpers::delete(&app, "/api/favorites/john/3").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = helpers::post(
        &app,
        "/api/favorites",
        json!({"userId": "john", "recipeId": 999}),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_create_with_fractional_nutrition() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir).await?;

    let recipe = json!({
        "name": "Granola Bar",
        "cuisine": "American",
        "time": 10,
        "difficulty": "easy",
        "servings": 1,
        "ingredients": ["oats", "honey"],
        "nutrition": {"calories": 120, "protein": 4.5, "carbs": 18.25, "fat": 7.5}
    });
    let (status, body) = helpers::post(&app, "/api/recipes", recipe).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (_, found) = helpers::get(&app, &format!("/api/recipes/{}", body["id"])).await?;
    assert_eq!(
        found["nutrition"],
        json!({"calories": 120.0, "protein": 4.5, "carbs": 18.25, "fat": 7.5})
    );

    Ok(())
}

#[tokio::test]
async fn test_readiness_against_stored_pantry() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir).await?;

    for ingredient in ["quinoa", "tomato", "cucumber", "feta"] {
        helpers::post(
            &app,
            "/api/ingredients",
            json!({"userId": "john", "ingredient": ingredient}),
        )
        .await?;
    }

    let (status, body) = helpers::get(&app, "/api/recipes/1/readiness/john").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"matched": 4, "total": 7, "missing": 3, "canMake": true})
    );

    helpers::delete(&app, "/api/ingredients/john/feta").await?;
    let (_, body) = helpers::get(&app, "/api/recipes/1/readiness/john").await?;
    assert_eq!(body["matched"], 3);
    assert_eq!(body["canMake"], false);

    let (_, body) = helpers::get(&app, "/api/recipes/1/readiness/albert").await?;
    assert_eq!(body["missing"], 7);

    let (status, _) = helpers::get(&app, "/api/recipes/999/readiness/john").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_answers_json_error() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir).await?;

    let (status, body) = helpers::send_bytes(
        &app,
        axum::http::Method::POST,
        "/api/recipes/generate",
        Some(b"{\"userId\": ".to_vec()),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) =
        helpers::post(&app, "/api/favorites", json!({"userId": "john", "recipeId": "one"})).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    Ok(())
}
