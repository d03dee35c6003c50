use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use serde_json::Value;
use tracing::info;

use models::order::{self, NewOrder};
use crate::{errors::ServiceError, input::{self, STATUS_REQUIRED}, pagination::Pagination};

/// List orders in insertion order; `None` returns every row.
pub async fn list_orders(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<order::Model>, ServiceError> {
    let select = order::Entity::find().order_by_asc(order::Column::Id);
    let rows = match page {
        Some(p) => {
            let (page_idx, per_page) = p.normalize();
            select.paginate(db, per_page).fetch_page(page_idx).await?
        }
        None => select.all(db).await?,
    };
    Ok(rows)
}

/// Get order by id.
pub async fn get_order(db: &DatabaseConnection, id: i32) -> Result<order::Model, ServiceError> {
    order::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("order", id))
}

/// Create an order; status defaults to `pending`.
pub async fn create_order(db: &DatabaseConnection, input: NewOrder) -> Result<order::Model, ServiceError> {
    let created = order::create(db, input).await?;
    info!(id = created.id, status = %created.status, "created order");
    Ok(created)
}

/// Update order status from a raw request body.
///
/// `body` is `None` when the request carried no parseable JSON. The order must
/// exist before the body is looked at, so an unknown id reports `NotFound`
/// even when the status is also missing or ill-typed.
pub async fn update_order_status(db: &DatabaseConnection, id: i32, body: Option<&Value>) -> Result<order::Model, ServiceError> {
    let existing = get_order(db, id).await?;
    let status = input::status_field(body)?;
    apply_status(db, existing, status.as_deref()).await
}

async fn apply_status(db: &DatabaseConnection, existing: order::Model, status: Option<&str>) -> Result<order::Model, ServiceError> {
    let status = status
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ServiceError::Validation(STATUS_REQUIRED.into()))?;
    let id = existing.id;
    let previous = existing.status.clone();
    let updated = order::set_status(db, existing, status).await?;
    info!(id, from = %previous, to = %updated.status, "updated order status");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_new_order;
    use crate::test_support::get_db;
    use serde_json::json;

    fn sample() -> NewOrder {
        NewOrder {
            customer_email: "grace@example.com".into(),
            customer_name: "Grace".into(),
            total_amount: 42.0,
            status: None,
        }
    }

    #[tokio::test]
    async fn order_create_defaults_pending() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let input = parse_new_order(&json!({
            "customer_email": "grace@example.com", "customer_name": "Grace", "total_amount": 42
        }))?;
        let o = create_order(&t.db, input).await?;
        assert_eq!(o.status, "pending");
        assert_eq!(o.total_amount, 42.0);
        assert_eq!(list_orders(&t.db, None).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_status_persists() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let o = create_order(&t.db, sample()).await?;

        let updated = update_order_status(&t.db, o.id, Some(&json!({"status": "shipped"}))).await?;
        assert_eq!(updated.status, "shipped");
        assert_eq!(updated.created_at, o.created_at);

        let reread = get_order(&t.db, o.id).await?;
        assert_eq!(reread.status, "shipped");
        Ok(())
    }

    #[tokio::test]
    async fn update_status_accepts_long_free_text() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let o = create_order(&t.db, sample()).await?;

        let status = "awaiting_customer_confirmation";
        update_order_status(&t.db, o.id, Some(&json!({"status": status}))).await?;
        assert_eq!(get_order(&t.db, o.id).await?.status, status);

        let essay = "on hold ".repeat(40);
        let updated = update_order_status(&t.db, o.id, Some(&json!({"status": essay}))).await?;
        assert_eq!(updated.status, essay);
        assert_eq!(get_order(&t.db, o.id).await?.status, essay);
        Ok(())
    }

    #[tokio::test]
    async fn update_status_missing_order_wins_over_missing_status() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let err = update_order_status(&t.db, 999, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let bad = json!({"status": 7});
        let err = update_order_status(&t.db, 12345, Some(&bad)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn update_status_requires_status() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let o = create_order(&t.db, sample()).await?;

        for body in [None, Some(json!({})), Some(json!({"status": ""})), Some(json!({"status": "   "})), Some(json!("shipped"))] {
            let err = update_order_status(&t.db, o.id, body.as_ref()).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(ref m) if m == STATUS_REQUIRED));
        }
        assert_eq!(get_order(&t.db, o.id).await?.status, "pending");
        Ok(())
    }

    #[tokio::test]
    async fn list_orders_paged() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        for _ in 0..3 {
            create_order(&t.db, sample()).await?;
        }
        let page = list_orders(&t.db, Some(Pagination { page: 1, per_page: 2 })).await?;
        assert_eq!(page.len(), 2);
        assert!(page[0].id < page[1].id);
        Ok(())
    }
}
