use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::views::{OrderView, ProductView};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339, UTC
    pub timestamp: String,
}

#[derive(ToSchema)]
pub struct CreateProductDoc {
    pub name: String,
    /// number or numeric string
    pub price: f64,
    pub description: Option<String>,
    /// defaults to 0
    pub stock: Option<i32>,
}

#[derive(ToSchema)]
pub struct CreateOrderDoc {
    pub customer_email: String,
    pub customer_name: String,
    pub total_amount: f64,
    /// defaults to `pending`
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateStatusDoc {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::orders::list,
        crate::routes::orders::create,
        crate::routes::orders::update_status,
    ),
    components(
        schemas(
            HealthResponse,
            CreateProductDoc,
            CreateOrderDoc,
            UpdateStatusDoc,
            ProductView,
            OrderView,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "orders")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
