use crate::errors::ModelError;
use crate::{order, product};
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, ColumnTrait};
use anyhow::Result;

use super::setup_test_db;

/// Test product create/read with defaults
#[tokio::test]
async fn test_product_create_and_read() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let created = product::create(&db, product::NewProduct::new("Hoodie", 39.5)).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Hoodie");
    assert_eq!(created.description, "");
    assert_eq!(created.stock, 0);
    assert_eq!(created.price, 39.5);

    let found = product::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(created.clone()));

    let by_name = product::Entity::find()
        .filter(product::Column::Name.eq("Hoodie"))
        .one(&db)
        .await?;
    assert_eq!(by_name.map(|p| p.id), Some(created.id));
    Ok(())
}

/// Ids are allocated by the database and increase with insertion
#[tokio::test]
async fn test_product_ids_are_generated() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let a = product::create(&db, product::NewProduct::new("A", 1.0)).await?;
    let b = product::create(&db, product::NewProduct::new("B", 2.0)).await?;
    assert!(b.id > a.id);
    assert_eq!(product::Entity::find().count(&db).await?, 2);
    Ok(())
}

/// Blank names are rejected before touching the database
#[tokio::test]
async fn test_product_validation() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let err = product::create(&db, product::NewProduct::new("   ", 1.0)).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    let err = product::create(&db, product::NewProduct::new("NaN", f64::NAN)).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    assert_eq!(product::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// Text columns carry no length cap
#[tokio::test]
async fn test_long_text_round_trips() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let name = "n".repeat(300);
    let p = product::create(&db, product::NewProduct::new(name.clone(), 1.0)).await?;
    assert_eq!(product::Entity::find_by_id(p.id).one(&db).await?.map(|p| p.name), Some(name));

    let o = order::create(
        &db,
        order::NewOrder {
            customer_email: format!("{}@example.com", "a".repeat(200)),
            customer_name: "B".repeat(150),
            total_amount: 1.0,
            status: Some("awaiting_customer_confirmation".into()),
        },
    )
    .await?;
    let o = order::set_status(&db, o, "returned_to_sender_after_failed_delivery").await?;
    let found = order::Entity::find_by_id(o.id).one(&db).await?;
    assert_eq!(found.map(|o| o.status).as_deref(), Some("returned_to_sender_after_failed_delivery"));
    Ok(())
}

/// Test order create with default status and status update
#[tokio::test]
async fn test_order_create_and_set_status() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let created = order::create(
        &db,
        order::NewOrder {
            customer_email: "ada@example.com".into(),
            customer_name: "Ada".into(),
            total_amount: 29.98,
            status: None,
        },
    )
    .await?;
    assert_eq!(created.status, order::DEFAULT_STATUS);

    let created_at = created.created_at;
    let updated = order::set_status(&db, created.clone(), "shipped").await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.status, "shipped");
    assert_eq!(updated.created_at, created_at);

    let found = order::Entity::find_by_id(created.id).one(&db).await?.expect("order");
    assert_eq!(found.status, "shipped");
    assert_eq!(found.customer_email, "ada@example.com");
    Ok(())
}

/// Explicit status is stored as given
#[tokio::test]
async fn test_order_explicit_status() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let created = order::create(
        &db,
        order::NewOrder {
            customer_email: "bob@example.com".into(),
            customer_name: "Bob".into(),
            total_amount: 5.0,
            status: Some("paid".into()),
        },
    )
    .await?;
    assert_eq!(created.status, "paid");
    Ok(())
}

/// Blank required fields and blank status are rejected
#[tokio::test]
async fn test_order_validation() -> Result<()> {
    let (_dir, db) = setup_test_db().await?;

    let base = order::NewOrder {
        customer_email: "c@example.com".into(),
        customer_name: "C".into(),
        total_amount: 1.0,
        status: None,
    };

    let no_email = order::NewOrder { customer_email: "".into(), ..base.clone() };
    assert!(matches!(order::create(&db, no_email).await, Err(ModelError::Validation(_))));

    let blank_status = order::NewOrder { status: Some(" ".into()), ..base.clone() };
    assert!(matches!(order::create(&db, blank_status).await, Err(ModelError::Validation(_))));

    let created = order::create(&db, base).await?;
    assert!(matches!(order::set_status(&db, created, "").await, Err(ModelError::Validation(_))));

    assert_eq!(order::Entity::find().count(&db).await?, 1);
    Ok(())
}
