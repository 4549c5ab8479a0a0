//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting sample rows with sensible defaults,
//! reducing boilerplate in tests. Rows are written directly through SeaORM active models so
//! that tests of the accessor never depend on the accessor to seed their data.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let item = factory::item::create_item(&db).await?;
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create several rows in insertion order
//!     let items = factory::helpers::create_items(&db, 5).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let item = factory::item::ItemFactory::new(&db)
//!     .title("Widget")
//!     .description(None)
//!     .quantity(12)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `item` - Create item entities
//! - `user` - Create user entities
//! - `helpers` - Unique id generation and bulk creation

pub mod helpers;
pub mod item;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use item::create_item;
pub use user::create_user;
