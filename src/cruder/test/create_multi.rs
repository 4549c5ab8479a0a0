use super::*;

/// Tests creating several records in one call.
///
/// Verifies that every record is persisted with a generated id, in input order.
///
/// Expected: Ok with three items created
#[tokio::test]
async fn creates_every_record() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let items = ItemCruder::new(db)?;
    let created = items
        .create_multi(vec![
            create_item("First", 1),
            create_item("Second", 2),
            create_item("Third", 3),
        ])
        .await?;

    assert_eq!(created.len(), 3);
    assert_eq!(
        created.iter().map(|item| item.title.as_str()).collect::<Vec<_>>(),
        vec!["First", "Second", "Third"]
    );
    assert!(created.windows(2).all(|pair| pair[0].id < pair[1].id));

    assert_eq!(items.list(Page::default()).await?, created);

    Ok(())
}

/// Tests creating an empty batch.
///
/// Expected: Ok with empty vector and nothing persisted
#[tokio::test]
async fn accepts_empty_batch() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let items = ItemCruder::new(db)?;
    let created = items.create_multi(Vec::new()).await?;

    assert!(created.is_empty());
    assert_eq!(items.count().await?, 0);

    Ok(())
}

/// Tests that a batch with one failing record persists nothing.
///
/// Verifies that when the last input violates the unique constraint on user names,
/// the records inserted before it are rolled back as well.
///
/// Expected: Err(CruderError::DbErr) with no users persisted
#[tokio::test]
async fn rolls_back_whole_batch_on_failure() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserCruder::new(db)?;
    let result = users
        .create_multi(vec![
            create_user("alice"),
            create_user("bob"),
            create_user("alice"),
        ])
        .await;

    assert!(matches!(result, Err(CruderError::DbErr(_))));
    assert_eq!(users.count().await?, 0);

    Ok(())
}

/// Tests that a failed batch does not disturb existing records.
///
/// Expected: Err(CruderError::DbErr) with only the pre-existing user left
#[tokio::test]
async fn keeps_existing_records_after_rollback() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db).name("carol").build().await?;

    let users = UserCruder::new(db)?;
    let result = users
        .create_multi(vec![create_user("dave"), create_user("carol")])
        .await;

    assert!(result.is_err());
    assert_eq!(users.list(Page::default()).await?, vec![existing]);

    Ok(())
}

/// Tests that the accessor stays usable after a rolled back batch.
///
/// Expected: Ok with the retried batch persisted
#[tokio::test]
async fn accepts_new_batch_after_rollback() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserCruder::new(db)?;
    let failed = users
        .create_multi(vec![create_user("erin"), create_user("erin")])
        .await;
    assert!(failed.is_err());

    let created = users
        .create_multi(vec![create_user("erin"), create_user("frank")])
        .await?;

    assert_eq!(created.len(), 2);
    assert_eq!(users.count().await?, 2);

    Ok(())
}
