use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Name,
    Cuisine,
    Time,
    Difficulty,
    Servings,
    Ingredients,
    Instructions,
    Nutrition,
    Rating,
    Tags,
    Tips,
    ImageUrl,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PantryIngredient {
    Table,
    Id,
    UserId,
    Ingredient,
    Category,
    AddedAt,
}

#[derive(Iden, Clone)]
pub enum UserProfile {
    Table,
    UserId,
    Name,
    DietaryRestrictions,
    CookingLevel,
    FamilySize,
    Preferences,
    Allergies,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum UserFavorite {
    Table,
    Id,
    UserId,
    RecipeId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    UserId,
    WeekStart,
    Meals,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum CookingSession {
    Table,
    Id,
    UserId,
    RecipeId,
    Status,
    CurrentStep,
    StartedAt,
    CompletedAt,
}
