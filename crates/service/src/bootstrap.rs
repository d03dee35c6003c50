//! First-run catalog seeding.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use models::product::NewProduct;
use crate::{errors::ServiceError, product_service};

/// The fixed demo catalog inserted into an empty `products` table.
pub fn seed_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "T-Shirt".into(),
            description: "Comfortable cotton t-shirt".into(),
            price: 19.99,
            stock: 50,
        },
        NewProduct {
            name: "Mug".into(),
            description: "Ceramic coffee mug".into(),
            price: 9.99,
            stock: 25,
        },
        NewProduct {
            name: "Sticker Pack".into(),
            description: "Pack of 10 vinyl stickers".into(),
            price: 4.99,
            stock: 100,
        },
    ]
}

/// Insert the seed catalog when no product exists yet.
///
/// The emptiness check and the inserts share one transaction. Returns the
/// number of rows inserted (0 or 3).
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<usize, ServiceError> {
    let txn = db.begin().await?;
    let existing = product_service::count_products(&txn).await?;
    if existing > 0 {
        txn.commit().await?;
        info!(existing, "catalog already populated; skipping seed");
        return Ok(0);
    }

    let seeds = seed_products();
    let n = seeds.len();
    for p in seeds {
        product_service::create_product(&txn, p).await?;
    }
    txn.commit().await?;
    info!(inserted = n, "seeded catalog");
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_service::{count_products, create_product, list_products};
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seeds_three_products_once() -> Result<(), anyhow::Error> {
        let t = get_db().await?;

        assert_eq!(seed_if_empty(&t.db).await?, 3);
        assert_eq!(seed_if_empty(&t.db).await?, 0);
        assert_eq!(count_products(&t.db).await?, 3);

        let rows = list_products(&t.db, None).await?;
        let got: Vec<_> = rows.iter().map(|p| (p.name.as_str(), p.price, p.stock)).collect();
        assert_eq!(got, [("T-Shirt", 19.99, 50), ("Mug", 9.99, 25), ("Sticker Pack", 4.99, 100)]);
        Ok(())
    }

    #[tokio::test]
    async fn non_empty_catalog_is_left_alone() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        create_product(&t.db, NewProduct::new("Existing", 1.0)).await?;

        assert_eq!(seed_if_empty(&t.db).await?, 0);
        assert_eq!(count_products(&t.db).await?, 1);
        Ok(())
    }
}
