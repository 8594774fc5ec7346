#[macro_use]
pub mod macros;

pub mod construction;
pub mod models;
