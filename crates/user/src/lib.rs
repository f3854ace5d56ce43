mod command;
mod profile;
mod repository;

pub use command::*;
pub use profile::*;
pub use repository::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod sqlite;

        pub use sqlite::*;
    }
}
