//! Generic record accessor over SeaORM entities.
//!
//! `Cruder<'a, E, C, U>` binds an entity `E` together with its create input `C` and update
//! input `U` to a borrowed `DatabaseConnection`. The connection is SeaORM's pool, so every
//! call checks out a connection for its own duration and hands it back on return, whether the
//! call succeeded or not. Operations that touch several rows run inside one
//! `DatabaseTransaction` which is committed on success and rolled back on failure.
//!
//! Inputs are anything implementing `IntoActiveModel<E::ActiveModel>`. Fields converted to
//! `ActiveValue::NotSet` are treated as absent: they are skipped on insert (so database
//! defaults apply), left untouched on update, and ignored by `find_by_condition`.
//!
//! Operations are split by concern:
//! - `read` - Lookups, listing, filtered queries and counting
//! - `write` - Single-record create, update and remove
//! - `batch` - Transactional multi-record operations
//! - `raw` - Raw SQL statements

mod batch;
mod raw;
mod read;
mod write;

#[cfg(test)]
mod test;

use std::marker::PhantomData;

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, Iterable, ModelTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
    Select, TransactionTrait, Value,
};

use crate::error::CruderError;

/// Primary key value type of entity `E` (`i32` for an auto-increment integer key).
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Record accessor for one SeaORM entity.
///
/// Holds nothing but the connection; records are never cached, so every read observes the
/// current database state.
///
/// # Type Parameters
/// - `E` - SeaORM entity describing the table
/// - `C` - Create input, converted into a full active model on insert
/// - `U` - Update input, converted into a partial active model on update
pub struct Cruder<'a, E, C, U> {
    db: &'a DatabaseConnection,
    _marker: PhantomData<fn() -> (E, C, U)>,
}

impl<'a, E, C, U> Cruder<'a, E, C, U>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
    C: IntoActiveModel<E::ActiveModel>,
    U: IntoActiveModel<E::ActiveModel>,
{
    /// Creates a new accessor for entity `E`.
    ///
    /// Checks that the entity maps to a named table and declares at least one primary key
    /// column. Every keyed operation (`get`, `update`, `remove` and insertion-ordered
    /// listing) depends on the primary key, so an entity without one is rejected up front.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection pool
    ///
    /// # Returns
    /// - `Ok(Cruder)` - New accessor bound to `db`
    /// - `Err(CruderError::Construction)` - Entity does not conform to the mapped-entity contract
    pub fn new(db: &'a DatabaseConnection) -> Result<Self, CruderError> {
        let table = E::default().table_name().to_owned();

        if table.is_empty() {
            return Err(construction_error::<E>("entity maps to an empty table name"));
        }

        if E::PrimaryKey::iter().next().is_none() {
            return Err(construction_error::<E>("entity declares no primary key column"));
        }

        tracing::debug!("Created record accessor for table `{}`", table);

        Ok(Self {
            db,
            _marker: PhantomData,
        })
    }

    /// Returns the name of the table backing this accessor.
    pub fn table_name(&self) -> String {
        E::default().table_name().to_owned()
    }

    /// Opens a unit of work on a fresh transaction.
    async fn begin(&self) -> Result<DatabaseTransaction, CruderError> {
        Ok(self.db.begin().await?)
    }

    /// Ends a unit of work opened by `begin`.
    ///
    /// Commits when `result` is `Ok`. Otherwise rolls the transaction back and returns the
    /// original error; a failed rollback is logged and never replaces that error.
    ///
    /// # Arguments
    /// - `txn` - Transaction the work ran on
    /// - `operation` - Operation name for log messages
    /// - `result` - Outcome of the work
    ///
    /// # Returns
    /// - `Ok(T)` - Work succeeded and the transaction committed
    /// - `Err(CruderError)` - Work failed (rolled back) or the commit itself failed
    async fn finish<T>(
        &self,
        txn: DatabaseTransaction,
        operation: &str,
        result: Result<T, CruderError>,
    ) -> Result<T, CruderError> {
        match result {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(
                    "Rolling back {} on `{}`: {}",
                    operation,
                    self.table_name(),
                    err
                );

                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(
                        "Failed to roll back {} on `{}`: {}",
                        operation,
                        self.table_name(),
                        rollback_err
                    );
                }

                Err(err)
            }
        }
    }
}

fn construction_error<E: EntityTrait>(reason: &str) -> CruderError {
    CruderError::Construction {
        entity: std::any::type_name::<E>().to_string(),
        reason: reason.to_string(),
    }
}

/// Condition matching the row that has the same primary key as `model`.
fn primary_key_condition<E: EntityTrait>(model: &E::Model) -> Condition {
    E::PrimaryKey::iter().fold(Condition::all(), |condition, key| {
        let column = key.into_column();
        condition.add(column.eq(model.get(column)))
    })
}

/// Orders `select` by primary key, which is insertion order for auto-increment keys.
fn in_insertion_order<E: EntityTrait>(select: Select<E>) -> Select<E> {
    E::PrimaryKey::iter().fold(select, |select, key| select.order_by_asc(key.into_column()))
}

fn primary_key_values<E: EntityTrait>(model: &E::Model) -> Vec<Value> {
    E::PrimaryKey::iter()
        .map(|key| model.get(key.into_column()))
        .collect()
}

fn record_not_found<E: EntityTrait>(model: &E::Model) -> CruderError {
    CruderError::NotFound(format!(
        "{} with primary key {:?} not found",
        E::default().table_name(),
        primary_key_values::<E>(model)
    ))
}

fn id_not_found<E: EntityTrait>(id: &PrimaryKeyOf<E>) -> CruderError {
    CruderError::NotFound(format!(
        "{} with id {:?} not found",
        E::default().table_name(),
        id
    ))
}
