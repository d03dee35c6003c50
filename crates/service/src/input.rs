//! Payload coercion for create/update requests.
//!
//! Bodies arrive as untyped JSON. Required fields are checked for presence
//! first (a `null` counts as missing), then values are coerced: numbers may be
//! sent as JSON numbers or numeric strings.

use serde_json::{Map, Value};

use models::order::NewOrder;
use models::product::NewProduct;

use crate::errors::ServiceError;

pub const PRODUCT_REQUIRED: &str = "Name and price are required";
pub const ORDER_REQUIRED: &str = "Customer email, customer name and total amount are required";
pub const STATUS_REQUIRED: &str = "Status is required";
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

fn as_object(body: &Value) -> Result<&Map<String, Value>, ServiceError> {
    body.as_object().ok_or_else(|| ServiceError::Validation(BODY_NOT_OBJECT.into()))
}

fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn text(v: &Value, field: &str) -> Result<String, ServiceError> {
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| ServiceError::Validation(format!("{field} must be a string")))
}

/// Non-blank string, or the given "required" message.
fn required_text(v: &Value, field: &str, missing: &str) -> Result<String, ServiceError> {
    let s = text(v, field)?;
    if s.trim().is_empty() {
        return Err(ServiceError::Validation(missing.into()));
    }
    Ok(s)
}

pub fn coerce_f64(v: &Value, field: &str) -> Result<f64, ServiceError> {
    let parsed = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(ServiceError::Validation(format!("{field} must be a number"))),
    }
}

/// Integers pass through, floats truncate toward zero, strings must hold an integer.
pub fn coerce_i32(v: &Value, field: &str) -> Result<i32, ServiceError> {
    let parsed = match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => n
                .as_f64()
                .filter(|f| f.is_finite())
                .map(f64::trunc)
                .filter(|f| *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
                .map(|f| f as i32),
        },
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ServiceError::Validation(format!("{field} must be an integer")))
}

pub fn parse_new_product(body: &Value) -> Result<NewProduct, ServiceError> {
    let obj = as_object(body)?;
    let (Some(name), Some(price)) = (present(obj, "name"), present(obj, "price")) else {
        return Err(ServiceError::Validation(PRODUCT_REQUIRED.into()));
    };
    let name = required_text(name, "name", PRODUCT_REQUIRED)?;
    let price = coerce_f64(price, "price")?;
    let description = match present(obj, "description") {
        Some(v) => text(v, "description")?,
        None => String::new(),
    };
    let stock = match present(obj, "stock") {
        Some(v) => coerce_i32(v, "stock")?,
        None => 0,
    };
    Ok(NewProduct { name, description, price, stock })
}

pub fn parse_new_order(body: &Value) -> Result<NewOrder, ServiceError> {
    let obj = as_object(body)?;
    let (Some(email), Some(name), Some(total)) = (
        present(obj, "customer_email"),
        present(obj, "customer_name"),
        present(obj, "total_amount"),
    ) else {
        return Err(ServiceError::Validation(ORDER_REQUIRED.into()));
    };
    let customer_email = required_text(email, "customer_email", ORDER_REQUIRED)?;
    let customer_name = required_text(name, "customer_name", ORDER_REQUIRED)?;
    let total_amount = coerce_f64(total, "total_amount")?;
    let status = match present(obj, "status") {
        Some(v) => Some(required_text(v, "status", STATUS_REQUIRED)?),
        None => None,
    };
    Ok(NewOrder { customer_email, customer_name, total_amount, status })
}

/// `Ok(None)` when the body has no usable `status`; the caller decides
/// whether that is an error (it is, but only after the order lookup).
pub fn status_field(body: Option<&Value>) -> Result<Option<String>, ServiceError> {
    let Some(obj) = body.and_then(Value::as_object) else {
        return Ok(None);
    };
    match present(obj, "status") {
        Some(v) => {
            let s = text(v, "status")?;
            Ok(if s.trim().is_empty() { None } else { Some(s) })
        }
        None => Ok(None),
    }
}
