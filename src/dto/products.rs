use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Product;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub brand_id: Uuid,
    pub name: String,
    pub description: String,
    pub base_price: i64,
    #[serde(default)]
    pub discount: i32,
    #[serde(default)]
    pub views: i32,
    #[serde(default)]
    pub sold: i32,
    #[serde(default)]
    pub favorites: i32,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub brand_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<i64>,
    pub discount: Option<i32>,
    pub views: Option<i32>,
    pub sold: Option<i32>,
    pub favorites: Option<i32>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ProductList {
    pub items: Vec<Product>,
}
