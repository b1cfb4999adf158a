use async_trait::async_trait;
use common::pagination::Pagination;
use sea_orm::DatabaseConnection;

use crate::db::product_service::ProductPage;
use crate::errors::ServiceError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, category: &str, name: &str) -> Result<models::product::Model, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<models::product::Model>, ServiceError>;
    async fn update(&self, id: i64, category: &str, name: &str) -> Result<models::product::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn list_by_category(&self, category: &str, opts: Pagination) -> Result<ProductPage, ServiceError>;
    async fn distinct_categories(&self) -> Result<Vec<String>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn create(&self, category: &str, name: &str) -> Result<models::product::Model, ServiceError> {
        crate::db::product_service::create_product(&self.db, category, name).await
    }

    async fn get(&self, id: i64) -> Result<Option<models::product::Model>, ServiceError> {
        crate::db::product_service::get_product(&self.db, id).await
    }

    async fn update(&self, id: i64, category: &str, name: &str) -> Result<models::product::Model, ServiceError> {
        crate::db::product_service::update_product(&self.db, id, category, name).await
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        crate::db::product_service::delete_product(&self.db, id).await
    }

    async fn list_by_category(&self, category: &str, opts: Pagination) -> Result<ProductPage, ServiceError> {
        crate::db::product_service::list_products_by_category(&self.db, category, opts).await
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, ServiceError> {
        crate::db::product_service::list_distinct_categories(&self.db).await
    }
}
