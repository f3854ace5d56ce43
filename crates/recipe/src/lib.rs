mod catalog;
mod command;
mod favorite;
pub mod matching;
mod repository;

pub use catalog::*;
pub use command::*;
pub use favorite::*;
pub use matching::{MAX_SUGGESTIONS, MatchCriteria, RecipeReadiness, match_recipes, readiness};
pub use repository::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod sqlite;

        pub use sqlite::*;
    }
}
