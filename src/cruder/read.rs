use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, Iterable,
    PaginatorTrait, QueryFilter, QuerySelect, Value,
};

use crate::{
    cruder::{in_insertion_order, Cruder, PrimaryKeyOf},
    error::CruderError,
    page::Page,
};

impl<'a, E, C, U> Cruder<'a, E, C, U>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
    C: IntoActiveModel<E::ActiveModel>,
    U: IntoActiveModel<E::ActiveModel>,
{
    /// Gets a record by primary key.
    ///
    /// # Arguments
    /// - `id` - Primary key of the record
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Record found
    /// - `Ok(None)` - No record with that primary key
    /// - `Err(CruderError::DbErr)` - Database error during query
    pub async fn get(
        &self,
        id: impl Into<PrimaryKeyOf<E>>,
    ) -> Result<Option<E::Model>, CruderError> {
        let id: PrimaryKeyOf<E> = id.into();

        Ok(E::find_by_id(id).one(self.db).await?)
    }

    /// Lists records in insertion order with offset/limit pagination.
    ///
    /// Records are ordered by primary key ascending, then `page.skip` records are skipped
    /// and at most `page.limit` are returned.
    ///
    /// # Arguments
    /// - `page` - Offset/limit window, `Page::default()` for the first 100 records
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Records in the window (empty past the last record)
    /// - `Err(CruderError::DbErr)` - Database error during query
    pub async fn list(&self, page: Page) -> Result<Vec<E::Model>, CruderError> {
        let records = in_insertion_order(E::find())
            .offset(page.skip)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(records)
    }

    /// Finds every record equal to `filter` on each field the filter sets.
    ///
    /// The filter is converted into an active model. Every column holding a value (`Set`
    /// or `Unchanged`) becomes an equality condition and the conditions are combined with
    /// AND. Columns left `NotSet` are ignored, so an empty filter matches every record.
    ///
    /// # Arguments
    /// - `filter` - Any input convertible into the entity's active model, typically the
    ///   update input with only the fields to match on
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching records in insertion order
    /// - `Err(CruderError::DbErr)` - Database error during query
    pub async fn find_by_condition<F>(&self, filter: F) -> Result<Vec<E::Model>, CruderError>
    where
        F: IntoActiveModel<E::ActiveModel>,
    {
        let probe = filter.into_active_model();

        let condition = E::Column::iter().fold(Condition::all(), |condition, column| {
            match probe.get(column).into_value() {
                Some(value) => condition.add(column.eq(value)),
                None => condition,
            }
        });

        let records = in_insertion_order(E::find())
            .filter(condition)
            .all(self.db)
            .await?;

        Ok(records)
    }

    /// Finds records whose `column` contains `substring` (`LIKE '%substring%'`).
    ///
    /// # Arguments
    /// - `column` - Text column to search
    /// - `substring` - Text the column must contain
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching records in insertion order
    /// - `Err(CruderError::DbErr)` - Database error during query
    pub async fn find_by_like(
        &self,
        column: E::Column,
        substring: &str,
    ) -> Result<Vec<E::Model>, CruderError> {
        let records = in_insertion_order(E::find())
            .filter(column.contains(substring))
            .all(self.db)
            .await?;

        Ok(records)
    }

    /// Finds records whose `column` lies between `start` and `end`, both inclusive.
    ///
    /// # Arguments
    /// - `column` - Column to compare
    /// - `start` - Lower bound
    /// - `end` - Upper bound
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching records in insertion order (empty when `start > end`)
    /// - `Err(CruderError::DbErr)` - Database error during query
    pub async fn find_by_range<V>(
        &self,
        column: E::Column,
        start: V,
        end: V,
    ) -> Result<Vec<E::Model>, CruderError>
    where
        V: Into<Value>,
    {
        let records = in_insertion_order(E::find())
            .filter(column.between(start, end))
            .all(self.db)
            .await?;

        Ok(records)
    }

    /// Counts every record of the entity.
    pub async fn count(&self) -> Result<u64, CruderError>
    where
        E::Model: Sync,
    {
        Ok(E::find().count(self.db).await?)
    }
}
