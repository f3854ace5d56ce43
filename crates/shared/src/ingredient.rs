/// Returns true when either text contains the other, ignoring case.
///
/// Recipe ingredients are often full quantity phrases ("2 chicken breasts")
/// while pantry entries are bare names ("chicken"), or the other way around.
pub fn ingredient_matches(ingredient: &str, owned: &str) -> bool {
    let ingredient = ingredient.to_lowercase();
    let owned = owned.to_lowercase();

    ingredient.contains(&owned) || owned.contains(&ingredient)
}

/// Returns true when any pantry entry matches the ingredient.
pub fn is_owned<S: AsRef<str>>(ingredient: &str, pantry: &[S]) -> bool {
    pantry
        .iter()
        .any(|owned| ingredient_matches(ingredient, owned.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_both_directions() {
        assert!(ingredient_matches("2 chicken breasts", "chicken"));
        assert!(ingredient_matches("Rice", "basmati rice"));
        assert!(ingredient_matches("EGG", "egg"));
        assert!(!ingredient_matches("milk", "rice"));
    }

    #[test]
    fn test_is_owned() {
        let pantry = vec!["Tomato".to_owned(), "olive oil".to_owned()];

        assert!(is_owned("cherry tomatoes", &pantry));
        assert!(is_owned("oil", &pantry));
        assert!(!is_owned("feta cheese", &pantry));
        assert!(!is_owned("feta cheese", &Vec::<String>::new()));
    }
}
