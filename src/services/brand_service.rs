use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::brands::{BrandList, CreateBrandRequest, UpdateBrandRequest},
    error::{AppError, AppResult},
    models::Brand,
    params::Pagination,
    response::{ApiResponse, Meta},
    state::AdminStore,
};

pub fn list_brands(
    store: &AdminStore,
    pagination: Pagination,
) -> AppResult<ApiResponse<BrandList>> {
    let (page, limit, offset) = pagination.normalize();
    let total = store.brands.len() as i64;
    let items = store
        .brands
        .iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Brands", BrandList { items }, Some(meta)))
}

pub fn get_brand(store: &AdminStore, id: Uuid) -> AppResult<ApiResponse<Brand>> {
    let brand = store.brand(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Brand", brand, None))
}

pub fn create_brand(
    store: &mut AdminStore,
    payload: CreateBrandRequest,
) -> AppResult<ApiResponse<Brand>> {
    ensure_slug_free(store, &payload.slug, None)?;
    let brand = store.add_brand(payload);

    log_audit(
        store,
        "brand_create",
        Some("brands"),
        Some(serde_json::json!({ "brand_id": brand.id })),
    );

    Ok(ApiResponse::success(
        "Brand created",
        brand,
        Some(Meta::empty()),
    ))
}

pub fn update_brand(
    store: &mut AdminStore,
    id: Uuid,
    payload: UpdateBrandRequest,
) -> AppResult<ApiResponse<Brand>> {
    if let Some(slug) = payload.slug.as_deref() {
        ensure_slug_free(store, slug, Some(id))?;
    }
    let brand = store.update_brand(id, payload).ok_or(AppError::NotFound)?;

    log_audit(
        store,
        "brand_update",
        Some("brands"),
        Some(serde_json::json!({ "brand_id": brand.id })),
    );

    Ok(ApiResponse::success("Updated", brand, Some(Meta::empty())))
}

pub fn delete_brand(
    store: &mut AdminStore,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let cascaded = store
        .products
        .iter()
        .filter(|p| p.brand_id == id)
        .count();
    if !store.remove_brand(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        store,
        "brand_delete",
        Some("brands"),
        Some(serde_json::json!({ "brand_id": id, "products_removed": cascaded })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn ensure_slug_free(store: &AdminStore, slug: &str, exclude: Option<Uuid>) -> AppResult<()> {
    let taken = store
        .brands
        .iter()
        .any(|b| Some(b.id) != exclude && b.slug.eq_ignore_ascii_case(slug));
    if taken {
        return Err(AppError::validation("slug", "slug already exists"));
    }
    Ok(())
}
