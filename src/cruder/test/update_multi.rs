use super::*;
use test_utils::factory::item::ItemFactory;

/// Tests applying one update to several records.
///
/// Verifies that every record receives the set fields and keeps the rest.
///
/// Expected: Ok with both items at quantity 0 and titles unchanged
#[tokio::test]
async fn updates_every_record() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = ItemFactory::new(db).title("First").quantity(4).build().await?;
    let second = ItemFactory::new(db).title("Second").quantity(8).build().await?;
    let untouched = ItemFactory::new(db).title("Third").quantity(2).build().await?;

    let items = ItemCruder::new(db)?;
    let updated = items
        .update_multi(
            &[first.clone(), second.clone()],
            UpdateItem {
                quantity: Some(0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.len(), 2);
    assert_eq!(updated[0].title, "First");
    assert_eq!(updated[1].title, "Second");
    assert!(updated.iter().all(|item| item.quantity == 0));

    assert_eq!(items.get(untouched.id).await?, Some(untouched));

    Ok(())
}

/// Tests that a missing record rolls back the whole batch.
///
/// Expected: Err(CruderError::NotFound) with the existing item unchanged
#[tokio::test]
async fn rolls_back_when_a_record_is_missing() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = ItemFactory::new(db).quantity(4).build().await?;
    let missing = entity::item::Model {
        id: 999,
        title: "Ghost".to_string(),
        description: None,
        quantity: 0,
    };

    let items = ItemCruder::new(db)?;
    let result = items
        .update_multi(
            &[existing.clone(), missing],
            UpdateItem {
                quantity: Some(0),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(CruderError::NotFound(_))));
    assert_eq!(items.get(existing.id).await?, Some(existing));

    Ok(())
}

/// Tests that a constraint violation rolls back the whole batch.
///
/// Verifies that renaming two users to the same name fails on the second rename and
/// undoes the first.
///
/// Expected: Err(CruderError::DbErr) with both names unchanged
#[tokio::test]
async fn rolls_back_on_constraint_violation() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserCruder::new(db)?;
    let alice = users.create(create_user("alice")).await?;
    let bob = users.create(create_user("bob")).await?;

    let result = users
        .update_multi(
            &[alice.clone(), bob.clone()],
            UpdateUser {
                name: Some("carol".to_string()),
            },
        )
        .await;

    assert!(matches!(result, Err(CruderError::DbErr(_))));
    assert_eq!(users.list(Page::default()).await?, vec![alice, bob]);

    Ok(())
}
