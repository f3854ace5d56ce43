mod categorization;
mod command;
mod repository;

pub use categorization::*;
pub use command::*;
pub use repository::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod sqlite;

        pub use sqlite::*;
    }
}
