use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::products::categories,
    ),
    components(
        schemas(
            crate::routes::products::CreateProductRequest,
            crate::routes::products::UpdateProductRequest,
            crate::routes::products::ProductResponse,
            crate::routes::products::ProductListResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;
