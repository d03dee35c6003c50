use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use tracing::info;

use models::product::{self, NewProduct};
use crate::{errors::ServiceError, pagination::Pagination};

/// List products in insertion order; `None` returns every row.
pub async fn list_products(db: &DatabaseConnection, page: Option<Pagination>) -> Result<Vec<product::Model>, ServiceError> {
    let select = product::Entity::find().order_by_asc(product::Column::Id);
    let rows = match page {
        Some(p) => {
            let (page_idx, per_page) = p.normalize();
            select.paginate(db, per_page).fetch_page(page_idx).await?
        }
        None => select.all(db).await?,
    };
    Ok(rows)
}

/// Get product by id.
pub async fn get_product(db: &DatabaseConnection, id: i32) -> Result<product::Model, ServiceError> {
    product::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("product", id))
}

/// Create a product.
pub async fn create_product<C: ConnectionTrait>(db: &C, input: NewProduct) -> Result<product::Model, ServiceError> {
    let created = product::create(db, input).await?;
    info!(id = created.id, name = %created.name, "created product");
    Ok(created)
}

pub async fn count_products<C: ConnectionTrait>(db: &C) -> Result<u64, ServiceError> {
    Ok(product::Entity::find().count(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_new_product;
    use crate::test_support::get_db;
    use serde_json::json;

    #[tokio::test]
    async fn product_crud_service() -> Result<(), anyhow::Error> {
        let t = get_db().await?;

        let input = parse_new_product(&json!({"name": "Poster", "price": "7.25"}))?;
        let p = create_product(&t.db, input).await?;
        assert_eq!(p.name, "Poster");
        assert_eq!(p.price, 7.25);
        assert_eq!(p.stock, 0);
        assert_eq!(p.description, "");

        let found = get_product(&t.db, p.id).await?;
        assert_eq!(found, p);

        let all = list_products(&t.db, None).await?;
        assert_eq!(all.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn long_names_are_stored_verbatim() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let name = "x".repeat(101);
        let p = create_product(&t.db, NewProduct::new(name.clone(), 3.0)).await?;
        assert_eq!(get_product(&t.db, p.id).await?.name, name);

        let name = "Limited edition ".repeat(64);
        let p = create_product(&t.db, NewProduct::new(name.clone(), 3.0)).await?;
        assert_eq!(get_product(&t.db, p.id).await?.name, name);
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_product_is_not_found() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let err = get_product(&t.db, 4242).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "product 4242 not found"));
        Ok(())
    }

    #[tokio::test]
    async fn list_is_ordered_and_pageable() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        for i in 0..5 {
            create_product(&t.db, NewProduct::new(format!("p{i}"), i as f64)).await?;
        }

        let names: Vec<_> = list_products(&t.db, None).await?.into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["p0", "p1", "p2", "p3", "p4"]);

        let page2 = list_products(&t.db, Some(Pagination { page: 2, per_page: 2 })).await?;
        let names: Vec<_> = page2.into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["p2", "p3"]);

        assert_eq!(count_products(&t.db).await?, 5);
        Ok(())
    }
}
