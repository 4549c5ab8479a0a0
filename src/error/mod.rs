//! Error types for the record accessor and the demo application.
//!
//! `CruderError` is returned by every accessor operation. Persistence failures are kept as the
//! original `DbErr` so callers can still inspect the underlying SQL error. `AppError` is the
//! top-level error of the demo binary and aggregates configuration and accessor failures.

#[cfg(feature = "demo")]
pub mod config;

use thiserror::Error;

#[cfg(feature = "demo")]
use crate::error::config::ConfigError;

/// Errors produced by a record accessor.
#[derive(Error, Debug)]
pub enum CruderError {
    /// The entity does not satisfy the mapped-entity contract.
    ///
    /// Raised by `Cruder::new` when the entity has no table name or declares no primary
    /// key column, since every keyed operation depends on both.
    ///
    /// # Fields
    /// - `entity` - Rust type name of the rejected entity
    /// - `reason` - Which part of the contract failed
    #[error("Entity `{entity}` cannot back a record accessor: {reason}")]
    Construction { entity: String, reason: String },

    /// The record targeted by an update or remove does not exist.
    ///
    /// # Fields
    /// - Message naming the table and the missing primary key
    #[error("{0}")]
    NotFound(String),

    /// Database operation error from SeaORM.
    ///
    /// Propagated unchanged. Inside a transactional operation the unit of work has already
    /// been rolled back when this is returned.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Top-level error type of the demo binary.
#[cfg(feature = "demo")]
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Record accessor error.
    #[error(transparent)]
    CruderErr(#[from] CruderError),

    /// Database error raised outside of an accessor, such as connecting or migrating.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
