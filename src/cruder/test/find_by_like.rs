use super::*;
use test_utils::factory::item::ItemFactory;

/// Tests substring matching on a text column.
///
/// Verifies that records containing the substring anywhere in the column are returned
/// and records without it are not.
///
/// Expected: Ok with the items whose title contains "alpha"
#[tokio::test]
async fn returns_records_containing_substring() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let prefix = ItemFactory::new(db).title("alpha").build().await?;
    ItemFactory::new(db).title("beta").build().await?;
    let middle = ItemFactory::new(db).title("the alphabet").build().await?;

    let items = ItemCruder::new(db)?;
    let result = items
        .find_by_like(entity::item::Column::Title, "alpha")
        .await?;

    assert_eq!(result, vec![prefix, middle]);

    Ok(())
}

/// Tests substring matching when no record contains the substring.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_match() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ItemFactory::new(db).title("alpha").build().await?;

    let items = ItemCruder::new(db)?;
    let result = items
        .find_by_like(entity::item::Column::Title, "omega")
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests substring matching on a nullable column.
///
/// Verifies that rows with a NULL description never match.
///
/// Expected: Ok with only the item whose description contains the text
#[tokio::test]
async fn skips_null_values() -> Result<(), CruderError> {
    let test = TestBuilder::new().with_cruder_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ItemFactory::new(db).description(None).build().await?;
    let described = ItemFactory::new(db)
        .description(Some("fragile glass"))
        .build()
        .await?;

    let items = ItemCruder::new(db)?;
    let result = items
        .find_by_like(entity::item::Column::Description, "glass")
        .await?;

    assert_eq!(result, vec![described]);

    Ok(())
}
