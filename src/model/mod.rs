//! Create and update inputs for the sample entities.
//!
//! Each module pairs an entity with a create input (every required field present) and an
//! update input (every field optional), plus an accessor alias fixing the three type
//! parameters of `Cruder`. Update inputs convert unset fields into `ActiveValue::NotSet`,
//! which is what makes partial updates and partial filters work.

pub mod item;
pub mod user;
