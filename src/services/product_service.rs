use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
    params::ProductQuery,
    response::{ApiResponse, Meta},
    rules::product_matches,
    state::AdminStore,
};

/// Search over name + description; no sort beyond store insertion order.
pub fn list_products(
    store: &AdminStore,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let q = query.q.as_deref();

    let matching: Vec<Product> = store
        .products
        .iter()
        .filter(|p| product_matches(p, q))
        .cloned()
        .collect();
    let total = matching.len() as i64;
    let items = matching
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    ))
}

pub fn get_product(store: &AdminStore, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let product = store.product(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

pub fn create_product(
    store: &mut AdminStore,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_brand_exists(store, payload.brand_id)?;
    let product = store.add_product(payload);

    log_audit(
        store,
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    );

    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub fn update_product(
    store: &mut AdminStore,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    if let Some(brand_id) = payload.brand_id {
        ensure_brand_exists(store, brand_id)?;
    }
    let product = store.update_product(id, payload).ok_or(AppError::NotFound)?;

    log_audit(
        store,
        "product_update",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id })),
    );

    Ok(ApiResponse::success("Updated", product, Some(Meta::empty())))
}

pub fn delete_product(
    store: &mut AdminStore,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let cascaded = store
        .variants
        .iter()
        .filter(|v| v.product_id == id)
        .count();
    if !store.remove_product(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        store,
        "product_delete",
        Some("products"),
        Some(serde_json::json!({ "product_id": id, "variants_removed": cascaded })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn ensure_brand_exists(store: &AdminStore, brand_id: Uuid) -> AppResult<()> {
    if store.brand(brand_id).is_none() {
        return Err(AppError::validation("brand_id", "brand does not exist"));
    }
    Ok(())
}
