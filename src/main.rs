use cruder::{
    config::Config,
    error::AppError,
    model::item::{CreateItem, ItemCruder, UpdateItem},
    startup, Page,
};
use sea_orm::{Statement, Value};

/// Walks through every accessor operation on the `item` table.
///
/// Requires `DATABASE_URL`, e.g. `sqlite::memory:` or `sqlite://cruder.db?mode=rwc`.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let items = ItemCruder::new(&db)?;
    tracing::info!("Connected, using table `{}`", items.table_name());

    let created = items
        .create(CreateItem {
            title: "sss".to_string(),
            description: Some("ttt".to_string()),
            quantity: 1,
        })
        .await?;
    tracing::info!("Created {:?}", created);

    let fetched = items.get(created.id).await?;
    tracing::info!("Fetched {:?}", fetched);

    let updated = items
        .update(
            &created,
            UpdateItem {
                title: Some("sss11".to_string()),
                description: Some("ttt11".to_string()),
                ..Default::default()
            },
        )
        .await?;
    tracing::info!("Updated {:?}", updated);

    let batch = items
        .create_multi(vec![
            CreateItem {
                title: "alpha".to_string(),
                description: None,
                quantity: 5,
            },
            CreateItem {
                title: "alphabet".to_string(),
                description: None,
                quantity: 26,
            },
        ])
        .await?;
    tracing::info!("Created batch of {}", batch.len());

    let listed = items.list(Page::default()).await?;
    tracing::info!("Listed {} items: {:?}", listed.len(), listed);

    let like = items
        .find_by_like(entity::item::Column::Title, "alpha")
        .await?;
    tracing::info!("Titles containing `alpha`: {:?}", like);

    let in_range = items
        .find_by_range(entity::item::Column::Quantity, 1, 10)
        .await?;
    tracing::info!("Quantity between 1 and 10: {:?}", in_range);

    let statement = Statement::from_sql_and_values(
        db.get_database_backend(),
        "UPDATE item SET title = ? WHERE id = ?",
        [Value::from("new_name"), Value::from(created.id)],
    );
    let affected = items.execute_statement(statement).await?;
    tracing::info!("Raw update affected {} rows", affected);

    let removed = items.remove(created.id).await?;
    tracing::info!("Removed {:?}", removed);
    tracing::info!("{} items remain", items.count().await?);

    Ok(())
}
