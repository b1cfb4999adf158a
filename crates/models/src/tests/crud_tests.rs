use crate::db::connect;
use crate::product;
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};
use uuid::Uuid;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Test product CRUD at the entity level
#[tokio::test]
async fn test_product_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip model crud tests");
        return Ok(());
    }

    let db = setup_test_db().await?;

    // Create
    let category = format!("cat_{}", Uuid::new_v4());
    let name = format!("item_{}", Uuid::new_v4());
    let am = product::ActiveModel {
        id: NotSet,
        category: Set(category.clone()),
        name: Set(name.clone()),
    };
    let created = am.insert(&db).await?;
    assert!(created.id > 0);
    assert_eq!(created.category, category);
    assert_eq!(created.name, name);

    // Read
    let found = product::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    // Update through the single mutation point
    let renamed = format!("renamed_{}", Uuid::new_v4());
    let updated = created
        .clone()
        .apply_update(&category, &renamed)
        .update(&db)
        .await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, renamed);

    // Filter by category
    let by_category = product::Entity::find()
        .filter(product::Column::Category.eq(category.clone()))
        .all(&db)
        .await?;
    assert!(by_category.iter().any(|p| p.id == created.id));

    // Delete
    let res = product::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    let after = product::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());

    Ok(())
}

/// Duplicate (category, name) pairs are rejected by the unique index
#[tokio::test]
async fn test_product_unique_category_name() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    if std::env::var("DATABASE_URL").is_err() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let category = format!("cat_{}", Uuid::new_v4());
    let name = format!("item_{}", Uuid::new_v4());
    let first = product::ActiveModel {
        id: NotSet,
        category: Set(category.clone()),
        name: Set(name.clone()),
    }
    .insert(&db)
    .await?;

    let dup = product::ActiveModel {
        id: NotSet,
        category: Set(category.clone()),
        name: Set(name.clone()),
    }
    .insert(&db)
    .await;
    assert!(dup.is_err());

    product::Entity::delete_by_id(first.id).exec(&db).await?;
    Ok(())
}
