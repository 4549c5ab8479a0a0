//! Generic create, read, update and delete accessors over SeaORM entities.
//!
//! A [`Cruder`](cruder::Cruder) binds one SeaORM entity and its create/update input shapes
//! to a database connection and exposes the usual record operations on top of it. Inputs are
//! any types convertible into the entity's active model, so partial updates come for free:
//! fields left as `ActiveValue::NotSet` are never written.
//!
//! # Layout
//!
//! - **Accessor** (`cruder`) - Lookups, pagination, filtering, writes, batches and raw SQL
//! - **Error** (`error`) - Accessor error type and the demo binary's application errors
//! - **Page** (`page`) - Offset/limit pagination input
//! - **Model** (`model`) - Create/update inputs for the sample `item` and `user` entities
//!
//! # Feature Gates
//!
//! The `demo` feature (enabled by default) adds the sample model layer, configuration loading,
//! database startup and the `cruder` binary.
//!
//! # Example
//!
//! ```rust,ignore
//! use cruder::model::item::{CreateItem, ItemCruder, UpdateItem};
//!
//! let items = ItemCruder::new(&db)?;
//! let created = items
//!     .create(CreateItem {
//!         title: "Widget".to_string(),
//!         description: None,
//!         quantity: 3,
//!     })
//!     .await?;
//!
//! let renamed = items
//!     .update(&created, UpdateItem {
//!         title: Some("Gadget".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

pub mod cruder;
pub mod error;
pub mod page;

#[cfg(any(test, feature = "demo"))]
pub mod model;

#[cfg(feature = "demo")]
pub mod config;
#[cfg(feature = "demo")]
pub mod startup;

pub use cruder::{Cruder, PrimaryKeyOf};
pub use error::CruderError;
pub use page::Page;
