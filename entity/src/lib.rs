//! SeaORM entities for the sample schema used by the demo binary and the test suite.

pub mod prelude;

pub mod item;
pub mod user;
