use sea_orm::{entity::prelude::*, ActiveValue::NotSet, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

pub const DEFAULT_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_email: String,
    pub customer_name: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct NewOrder {
    pub customer_email: String,
    pub customer_name: String,
    pub total_amount: f64,
    /// `None` stores [`DEFAULT_STATUS`].
    pub status: Option<String>,
}

fn required(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

/// Any non-blank text is a valid status.
pub fn validate_status(status: &str) -> Result<(), errors::ModelError> {
    required("status", status)
}

pub fn validate(input: &NewOrder) -> Result<(), errors::ModelError> {
    required("customer_email", &input.customer_email)?;
    required("customer_name", &input.customer_name)?;
    if !input.total_amount.is_finite() {
        return Err(errors::ModelError::Validation("total_amount must be a finite number".into()));
    }
    if let Some(s) = &input.status {
        validate_status(s)?;
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewOrder) -> Result<Model, errors::ModelError> {
    validate(&input)?;
    let am = ActiveModel {
        id: NotSet,
        customer_email: Set(input.customer_email),
        customer_name: Set(input.customer_name),
        total_amount: Set(input.total_amount),
        status: Set(input.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite `status` on an existing row; every other column is untouched.
pub async fn set_status<C: ConnectionTrait>(db: &C, existing: Model, status: &str) -> Result<Model, errors::ModelError> {
    validate_status(status)?;
    let mut am: ActiveModel = existing.into();
    am.status = Set(status.to_string());
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
