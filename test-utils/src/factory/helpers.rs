//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` items with default values, one after another.
///
/// Rows are inserted sequentially so their auto-increment ids follow the order of the
/// returned vector.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of items to create
///
/// # Returns
/// - `Ok(Vec<entity::item::Model>)` - Created items in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_items(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::item::Model>, DbErr> {
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(crate::factory::item::create_item(db).await?);
    }

    Ok(items)
}
