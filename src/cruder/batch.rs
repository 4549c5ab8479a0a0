use sea_orm::{EntityTrait, IntoActiveModel};

use crate::{
    cruder::{Cruder, PrimaryKeyOf},
    error::CruderError,
};

impl<'a, E, C, U> Cruder<'a, E, C, U>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
    C: IntoActiveModel<E::ActiveModel>,
    U: IntoActiveModel<E::ActiveModel>,
{
    /// Creates several records in one transaction.
    ///
    /// Records are inserted in input order. If any insert fails, none of the records are
    /// persisted.
    ///
    /// # Arguments
    /// - `inputs` - Create inputs, one per record
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The persisted records in input order
    /// - `Err(CruderError::DbErr)` - An insert failed and the batch was rolled back
    pub async fn create_multi(&self, inputs: Vec<C>) -> Result<Vec<E::Model>, CruderError> {
        tracing::debug!("Creating {} records in `{}`", inputs.len(), self.table_name());

        let txn = self.begin().await?;

        let result = async {
            let mut created = Vec::with_capacity(inputs.len());
            for input in inputs {
                created.push(Self::insert_on(&txn, input).await?);
            }

            Ok::<_, CruderError>(created)
        }
        .await;

        self.finish(txn, "create_multi", result).await
    }

    /// Applies the same partial update to several records in one transaction.
    ///
    /// # Arguments
    /// - `records` - Records to update, identified by primary key
    /// - `input` - Partial update input applied to every record
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The refreshed records in input order
    /// - `Err(CruderError::NotFound)` - A record does not exist; the batch was rolled back
    /// - `Err(CruderError::DbErr)` - An update failed and the batch was rolled back
    pub async fn update_multi(
        &self,
        records: &[E::Model],
        input: U,
    ) -> Result<Vec<E::Model>, CruderError> {
        tracing::debug!("Updating {} records in `{}`", records.len(), self.table_name());

        let patch = input.into_active_model();
        let txn = self.begin().await?;

        let result = async {
            let mut updated = Vec::with_capacity(records.len());
            for record in records {
                updated.push(Self::update_on(&txn, record, patch.clone()).await?);
            }

            Ok::<_, CruderError>(updated)
        }
        .await;

        self.finish(txn, "update_multi", result).await
    }

    /// Removes several records by primary key in one transaction.
    ///
    /// # Arguments
    /// - `ids` - Primary keys of the records to remove
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The removed records in input order
    /// - `Err(CruderError::NotFound)` - An id does not exist; the batch was rolled back
    /// - `Err(CruderError::DbErr)` - A delete failed and the batch was rolled back
    pub async fn remove_multi(
        &self,
        ids: Vec<PrimaryKeyOf<E>>,
    ) -> Result<Vec<E::Model>, CruderError> {
        tracing::debug!("Removing {} records from `{}`", ids.len(), self.table_name());

        let txn = self.begin().await?;

        let result = async {
            let mut removed = Vec::with_capacity(ids.len());
            for id in ids {
                removed.push(Self::delete_on(&txn, id).await?);
            }

            Ok::<_, CruderError>(removed)
        }
        .await;

        self.finish(txn, "remove_multi", result).await
    }

    /// Creates one record and updates another in one transaction.
    ///
    /// # Arguments
    /// - `create_input` - Field values of the new record
    /// - `record` - Record to update
    /// - `update_input` - Partial update input for `record`
    ///
    /// # Returns
    /// - `Ok((created, updated))` - The persisted new record and the refreshed updated record
    /// - `Err(CruderError::NotFound)` - `record` does not exist; the create was rolled back
    /// - `Err(CruderError::DbErr)` - Either write failed and both were rolled back
    pub async fn combined_operation(
        &self,
        create_input: C,
        record: &E::Model,
        update_input: U,
    ) -> Result<(E::Model, E::Model), CruderError> {
        let txn = self.begin().await?;

        let result = async {
            let created = Self::insert_on(&txn, create_input).await?;
            let updated =
                Self::update_on(&txn, record, update_input.into_active_model()).await?;

            Ok::<_, CruderError>((created, updated))
        }
        .await;

        self.finish(txn, "combined_operation", result).await
    }
}
