use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, Iterable, QueryFilter,
};

use crate::{
    cruder::{id_not_found, primary_key_condition, record_not_found, Cruder, PrimaryKeyOf},
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
    /// Creates a new record from a create input.
    ///
    /// # Arguments
    /// - `input` - Field values of the new record
    ///
    /// # Returns
    /// - `Ok(Model)` - The persisted record with its generated primary key
    /// - `Err(CruderError::DbErr)` - Database error during insert (constraint violation, etc.)
    pub async fn create(&self, input: C) -> Result<E::Model, CruderError> {
        Self::insert_on(self.db, input).await
    }

    /// Applies the fields set in `input` to the stored copy of `record`.
    ///
    /// `record` only identifies the row through its primary key; the returned model is
    /// re-read from the database after the update. Fields left unset in `input` keep their
    /// stored values. An input with no fields set performs no write.
    ///
    /// # Arguments
    /// - `record` - Record to update
    /// - `input` - Partial update input
    ///
    /// # Returns
    /// - `Ok(Model)` - The refreshed record
    /// - `Err(CruderError::NotFound)` - No row has `record`'s primary key
    /// - `Err(CruderError::DbErr)` - Database error during update
    pub async fn update(&self, record: &E::Model, input: U) -> Result<E::Model, CruderError> {
        Self::update_on(self.db, record, input.into_active_model()).await
    }

    /// Removes a record by primary key.
    ///
    /// # Arguments
    /// - `id` - Primary key of the record to remove
    ///
    /// # Returns
    /// - `Ok(Model)` - The removed record as it was stored
    /// - `Err(CruderError::NotFound)` - No record with that primary key
    /// - `Err(CruderError::DbErr)` - Database error during lookup or delete
    pub async fn remove(&self, id: impl Into<PrimaryKeyOf<E>>) -> Result<E::Model, CruderError> {
        Self::delete_on(self.db, id.into()).await
    }

    pub(super) async fn insert_on<Db>(db: &Db, input: C) -> Result<E::Model, CruderError>
    where
        Db: ConnectionTrait,
    {
        Ok(input.into_active_model().insert(db).await?)
    }

    pub(super) async fn update_on<Db>(
        db: &Db,
        record: &E::Model,
        patch: E::ActiveModel,
    ) -> Result<E::Model, CruderError>
    where
        Db: ConnectionTrait,
    {
        let condition = primary_key_condition::<E>(record);

        let has_changes = E::Column::iter().any(|column| patch.get(column).is_set());
        if has_changes {
            E::update_many()
                .set(patch)
                .filter(condition.clone())
                .exec(db)
                .await?;
        }

        E::find()
            .filter(condition)
            .one(db)
            .await?
            .ok_or_else(|| record_not_found::<E>(record))
    }

    pub(super) async fn delete_on<Db>(db: &Db, id: PrimaryKeyOf<E>) -> Result<E::Model, CruderError>
    where
        Db: ConnectionTrait,
    {
        let not_found = id_not_found::<E>(&id);

        let record = E::find_by_id(id).one(db).await?.ok_or(not_found)?;

        E::delete_many()
            .filter(primary_key_condition::<E>(&record))
            .exec(db)
            .await?;

        Ok(record)
    }
}

