use std::sync::Arc;

use common::pagination::Pagination;
use tracing::{info, instrument};

use crate::db::product_service::ProductPage;
use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

/// Application service encapsulating product business rules. The single
/// seam between the HTTP surface and storage: raises `NotFound` for
/// absent ids and applies pagination defaults.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, category: &str, name: &str) -> Result<models::product::Model, ServiceError> {
        let created = self.repo.create(category, name).await?;
        info!(id = created.id, category = %created.category, "created product");
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> Result<models::product::Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, category: &str, name: &str) -> Result<models::product::Model, ServiceError> {
        let updated = self.repo.update(id, category, name).await?;
        info!(id = updated.id, "updated product");
        Ok(updated)
    }

    /// Idempotent: deleting an id that is already gone succeeds. The bool
    /// reports whether a row was actually removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let removed = self.repo.delete(id).await?;
        info!(id, removed, "deleted product");
        Ok(removed)
    }

    /// Unset pagination falls back to page 0 with the default size.
    pub async fn list_by_category(
        &self,
        category: &str,
        opts: Option<Pagination>,
    ) -> Result<ProductPage, ServiceError> {
        self.repo
            .list_by_category(category, opts.unwrap_or_default())
            .await
    }

    pub async fn distinct_categories(&self) -> Result<Vec<String>, ServiceError> {
        self.repo.distinct_categories().await
    }
}
