mod command;
mod ingredient;
mod recipe;

pub use command::*;
pub use ingredient::*;
pub use recipe::*;
