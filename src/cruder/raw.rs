use sea_orm::{ConnectionTrait, EntityTrait, IntoActiveModel, Statement};

use crate::{cruder::Cruder, error::CruderError};

impl<'a, E, C, U> Cruder<'a, E, C, U>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
    C: IntoActiveModel<E::ActiveModel>,
    U: IntoActiveModel<E::ActiveModel>,
{
    /// Runs a raw SELECT and decodes every row as a record of this entity.
    ///
    /// The statement must select every column of the entity's model under its column name.
    ///
    /// # Arguments
    /// - `statement` - Raw SQL statement with bound values
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Decoded rows in the order the statement returns them
    /// - `Err(CruderError::DbErr)` - Query failed or a row could not be decoded
    pub async fn execute_query(&self, statement: Statement) -> Result<Vec<E::Model>, CruderError> {
        Ok(E::find().from_raw_sql(statement).all(self.db).await?)
    }

    /// Runs a raw write statement (UPDATE, DELETE, INSERT, ...).
    ///
    /// # Arguments
    /// - `statement` - Raw SQL statement with bound values
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected
    /// - `Err(CruderError::DbErr)` - Database error during execution
    pub async fn execute_statement(&self, statement: Statement) -> Result<u64, CruderError> {
        let result = self.db.execute_raw(statement).await?;

        Ok(result.rows_affected())
    }
}
