//! Serde backed models and helpers for the tabular input/output boundary. There is no
//! network protocol here: the engine is a batch transformation from a problem definition
//! to a trip table.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
