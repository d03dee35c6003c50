use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use service::{input, pagination::Pagination, product_service};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState, views::ProductView};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page; omit both parameters to list everything
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    params(ListQuery),
    responses(
        (status = 200, description = "Products in insertion order", body = [ProductView]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<ProductView>>, JsonApiError> {
    let rows = product_service::list_products(&state.db, Pagination::from_query(q.page, q.per_page)).await?;
    info!(count = rows.len(), "list products");
    Ok(Json(rows.into_iter().map(ProductView::from).collect()))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = ProductView),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, id: Result<Path<i32>, PathRejection>) -> Result<Json<ProductView>, JsonApiError> {
    // A non-numeric id cannot name a product.
    let Ok(Path(id)) = id else {
        return Err(JsonApiError::not_found("product not found"));
    };
    let found = product_service::get_product(&state.db, id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 201, description = "Created", body = ProductView),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductView>), JsonApiError> {
    let Json(body) = body?;
    let input = input::parse_new_product(&body)?;
    let created = product_service::create_product(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
