use common::pagination::Pagination;
use models::product::{self, Entity as ProductEntity};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::errors::ServiceError;

/// One page of products plus total-count metadata.
#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<product::Model>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub page: u64,
}

/// Create a product after validation. The id is assigned by the database.
pub async fn create_product(
    db: &DatabaseConnection,
    category: &str,
    name: &str,
) -> Result<product::Model, ServiceError> {
    product::validate_category(category)?;
    product::validate_name(name)?;
    let am = product::ActiveModel {
        id: NotSet,
        category: Set(category.to_string()),
        name: Set(name.to_string()),
    };
    am.insert(db).await.map_err(ServiceError::from_db)
}

/// Get a product by id. Absence is not an error at this layer.
pub async fn get_product(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<product::Model>, ServiceError> {
    ProductEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Overwrite both payload fields of an existing product inside a scoped
/// transaction. A dropped transaction rolls back.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i64,
    category: &str,
    name: &str,
) -> Result<product::Model, ServiceError> {
    product::validate_category(category)?;
    product::validate_name(name)?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let existing = ProductEntity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = existing else {
        return Err(ServiceError::not_found("product"));
    };
    let updated = existing
        .apply_update(category, name)
        .update(&txn)
        .await
        .map_err(ServiceError::from_db)?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a product directly by id; returns whether a row was removed.
/// Deleting an absent id is a no-op, not an error.
pub async fn delete_product(db: &DatabaseConnection, id: i64) -> Result<bool, ServiceError> {
    let res = ProductEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// Page of products with an exact category match, ordered ascending by
/// category, with total-count metadata.
pub async fn list_products_by_category(
    db: &DatabaseConnection,
    category: &str,
    opts: Pagination,
) -> Result<ProductPage, ServiceError> {
    let (page, size) = opts.normalize();
    let paginator = ProductEntity::find()
        .filter(product::Column::Category.eq(category))
        .order_by_asc(product::Column::Category)
        .paginate(db, size);
    let totals = paginator
        .num_items_and_pages()
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let items = paginator
        .fetch_page(page)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(ProductPage {
        items,
        total_elements: totals.number_of_items,
        total_pages: totals.number_of_pages,
        page,
    })
}

/// Distinct category strings across all rows, ascending.
pub async fn list_distinct_categories(
    db: &DatabaseConnection,
) -> Result<Vec<String>, ServiceError> {
    ProductEntity::find()
        .select_only()
        .column(product::Column::Category)
        .distinct()
        .order_by_asc(product::Column::Category)
        .into_tuple::<String>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
