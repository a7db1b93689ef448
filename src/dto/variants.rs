use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Variant;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVariantRequest {
    pub product_id: Uuid,
    pub color: String,
    pub size: i32,
    pub stock: i32,
    pub price: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVariantRequest {
    pub color: Option<String>,
    pub size: Option<i32>,
    pub stock: Option<i32>,
    pub price: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct VariantList {
    pub items: Vec<Variant>,
}
