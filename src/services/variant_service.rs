use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::variants::{CreateVariantRequest, UpdateVariantRequest, VariantList},
    error::{AppError, AppResult},
    models::Variant,
    params::Pagination,
    response::{ApiResponse, Meta},
    state::AdminStore,
};

pub fn list_variants(
    store: &AdminStore,
    product_id: Option<Uuid>,
    pagination: Pagination,
) -> AppResult<ApiResponse<VariantList>> {
    let (page, limit, offset) = pagination.normalize();

    let matching: Vec<Variant> = store
        .variants
        .iter()
        .filter(|v| product_id.is_none_or(|pid| v.product_id == pid))
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
        "Variants",
        VariantList { items },
        Some(meta),
    ))
}

pub fn get_variant(store: &AdminStore, id: Uuid) -> AppResult<ApiResponse<Variant>> {
    let variant = store.variant(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Variant", variant, None))
}

pub fn create_variant(
    store: &mut AdminStore,
    payload: CreateVariantRequest,
) -> AppResult<ApiResponse<Variant>> {
    if store.product(payload.product_id).is_none() {
        return Err(AppError::validation("product_id", "product does not exist"));
    }
    let variant = store.add_variant(payload);

    log_audit(
        store,
        "variant_create",
        Some("variants"),
        Some(serde_json::json!({ "variant_id": variant.id })),
    );

    Ok(ApiResponse::success(
        "Variant created",
        variant,
        Some(Meta::empty()),
    ))
}

pub fn update_variant(
    store: &mut AdminStore,
    id: Uuid,
    payload: UpdateVariantRequest,
) -> AppResult<ApiResponse<Variant>> {
    let variant = store.update_variant(id, payload).ok_or(AppError::NotFound)?;

    log_audit(
        store,
        "variant_update",
        Some("variants"),
        Some(serde_json::json!({ "variant_id": variant.id })),
    );

    Ok(ApiResponse::success("Updated", variant, Some(Meta::empty())))
}

pub fn delete_variant(
    store: &mut AdminStore,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !store.remove_variant(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        store,
        "variant_delete",
        Some("variants"),
        Some(serde_json::json!({ "variant_id": id })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
