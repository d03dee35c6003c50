use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::{input, order_service, pagination::Pagination};
use tracing::info;

use crate::{errors::JsonApiError, routes::products::ListQuery, state::ServerState, views::OrderView};

#[utoipa::path(
    get, path = "/orders", tag = "orders",
    params(ListQuery),
    responses(
        (status = 200, description = "Orders in insertion order", body = [OrderView]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<OrderView>>, JsonApiError> {
    let rows = order_service::list_orders(&state.db, Pagination::from_query(q.page, q.per_page)).await?;
    info!(count = rows.len(), "list orders");
    Ok(Json(rows.into_iter().map(OrderView::from).collect()))
}

#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body = crate::openapi::CreateOrderDoc,
    responses(
        (status = 201, description = "Created", body = OrderView),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderView>), JsonApiError> {
    let Json(body) = body?;
    let input = input::parse_new_order(&body)?;
    let created = order_service::create_order(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put, path = "/orders/{id}/status", tag = "orders",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = crate::openapi::UpdateStatusDoc,
    responses(
        (status = 200, description = "Updated", body = OrderView),
        (status = 400, description = "Status is required"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_status(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<OrderView>, JsonApiError> {
    let Ok(Path(id)) = id else {
        return Err(JsonApiError::not_found("order not found"));
    };
    // An unreadable body is reported only after the order lookup.
    let body = body.ok().map(|Json(v)| v);
    let updated = order_service::update_order_status(&state.db, id, body.as_ref()).await?;
    Ok(Json(updated.into()))
}
