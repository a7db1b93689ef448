use serde::{Deserialize, Serialize};

use crate::models::Brand;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBrandRequest {
    pub name: String,
    pub slug: String,
    pub logo: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BrandList {
    pub items: Vec<Brand>,
}
