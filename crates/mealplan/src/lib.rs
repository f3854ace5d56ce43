mod command;
mod cooking;
mod generator;
mod plan;
mod repository;
mod shopping;
mod week;

pub use command::*;
pub use cooking::*;
pub use generator::*;
pub use plan::*;
pub use repository::*;
pub use shopping::*;
pub use week::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod sqlite;

        pub use sqlite::*;
    }
}
