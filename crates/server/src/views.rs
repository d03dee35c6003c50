//! Response shapes (v1). These structs are the wire contract; entity models
//! are converted explicitly and never serialized by handlers directly.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use models::{order, product};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<FixedOffset>,
}

impl From<product::Model> for ProductView {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            stock: m.stock,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderView {
    pub id: i32,
    pub customer_email: String,
    pub customer_name: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<order::Model> for OrderView {
    fn from(m: order::Model) -> Self {
        Self {
            id: m.id,
            customer_email: m.customer_email,
            customer_name: m.customer_name,
            total_amount: m.total_amount,
            status: m.status,
            created_at: m.created_at,
        }
    }
}
