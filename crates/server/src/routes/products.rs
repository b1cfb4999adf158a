use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use common::pagination::Pagination;

use crate::{errors::JsonApiError, routes::ServerState};

const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateProductRequest {
    pub category: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpdateProductRequest {
    pub category: String,
    pub name: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    pub category: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Response-only product shape; the stored entity never crosses this
/// boundary.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub category: String,
    pub name: String,
}

impl From<models::product::Model> for ProductResponse {
    fn from(m: models::product::Model) -> Self {
        Self { id: m.id, category: m.category, name: m.name }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub total_pages: u64,
    pub total_elements: u64,
    pub page: u64,
}

/// Boundary validation with one message per offending field.
fn validate_fields(category: &str, name: &str) -> Result<(), JsonApiError> {
    let mut problems = Vec::new();
    if category.trim().is_empty() {
        problems.push("category must not be blank");
    }
    if name.trim().is_empty() {
        problems.push("name must not be blank");
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(JsonApiError::validation(problems.join("; ")))
    }
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = ProductResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, JsonApiError> {
    let found = state.products.get(id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Created", body = ProductResponse),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Duplicate category/name")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), JsonApiError> {
    validate_fields(&input.category, &input.name)?;
    let created = state.products.create(&input.category, &input.name).await?;
    info!(id = created.id, category = %created.category, name = %created.name, "created product");
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated", body = ProductResponse),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Duplicate category/name")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, JsonApiError> {
    validate_fields(&input.category, &input.name)?;
    let updated = state.products.update(id, &input.category, &input.name).await?;
    info!(id = updated.id, "updated product");
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted (or already absent)"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    // Idempotent: absent rows are already in the desired state.
    let removed = state.products.delete(id).await?;
    info!(id, removed, "deleted product");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = ProductListResponse),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<ProductListResponse>, JsonApiError> {
    let category = match q.category {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Err(JsonApiError::validation("category query parameter must not be blank")),
    };
    if let Some(size) = q.size {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(JsonApiError::validation("size must be between 1 and 100"));
        }
    }
    // Only build explicit pagination when the caller supplied something;
    // the service owns the defaults.
    let opts = (q.page.is_some() || q.size.is_some()).then(|| Pagination {
        page: q.page.unwrap_or(0),
        size: q.size.unwrap_or(20),
    });

    let page = state.products.list_by_category(&category, opts).await?;
    info!(category = %category, count = page.items.len(), "list products");
    Ok(Json(ProductListResponse {
        products: page.items.into_iter().map(Into::into).collect(),
        total_pages: page.total_pages,
        total_elements: page.total_elements,
        page: page.page,
    }))
}

#[utoipa::path(
    get, path = "/products/categories", tag = "products",
    responses((status = 200, description = "Distinct categories"))
)]
pub async fn categories(
    State(state): State<ServerState>,
) -> Result<Json<Vec<String>>, JsonApiError> {
    let cats = state.products.distinct_categories().await?;
    Ok(Json(cats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_serializes_with_camel_case_keys() {
        let resp = ProductListResponse {
            products: vec![ProductResponse { id: 1, category: "tools".into(), name: "hammer".into() }],
            total_pages: 1,
            total_elements: 1,
            page: 0,
        };
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["page"], 0);
        assert_eq!(json["products"][0]["id"], 1);
        assert_eq!(json["products"][0]["category"], "tools");
        assert_eq!(json["products"][0]["name"], "hammer");
    }

    #[test]
    fn validate_fields_reports_each_blank_field() {
        let err = validate_fields(" ", "").unwrap_err();
        assert!(err.message.contains("category"));
        assert!(err.message.contains("name"));

        assert!(validate_fields("tools", "hammer").is_ok());
    }

    #[test]
    fn response_mapping_copies_all_fields() {
        let m = models::product::Model { id: 9, category: "garden".into(), name: "rake".into() };
        let r = ProductResponse::from(m);
        assert_eq!((r.id, r.category.as_str(), r.name.as_str()), (9, "garden", "rake"));
    }
}
