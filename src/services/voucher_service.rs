use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::vouchers::{CreateVoucherRequest, UpdateVoucherRequest, VoucherList},
    error::{AppError, AppResult},
    models::{Voucher, VoucherStatus},
    params::{SortOrder, VoucherListQuery, VoucherTab},
    response::{ApiResponse, Meta},
    rules::{check_activation, effective_status, sort_vouchers_newest_first, voucher_matches},
    state::AdminStore,
};

/// Tab filter uses the *effective* status (date expiry wins over the stored
/// flag), then search over code/id, then newest first.
pub fn list_vouchers(
    store: &AdminStore,
    query: VoucherListQuery,
) -> AppResult<ApiResponse<VoucherList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let tab = query.tab.unwrap_or(VoucherTab::All);
    let q = query.q.as_deref();
    let now = Utc::now();

    let mut matching: Vec<Voucher> = store
        .vouchers
        .iter()
        .filter(|v| voucher_matches(v, tab, q, now))
        .cloned()
        .collect();
    match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Desc => sort_vouchers_newest_first(&mut matching),
        SortOrder::Asc => matching.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    let total = matching.len() as i64;
    let items = matching
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Vouchers",
        VoucherList { items },
        Some(meta),
    ))
}

pub fn get_voucher(store: &AdminStore, id: Uuid) -> AppResult<ApiResponse<Voucher>> {
    let voucher = store.voucher(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Voucher", voucher, None))
}

pub fn create_voucher(
    store: &mut AdminStore,
    payload: CreateVoucherRequest,
) -> AppResult<ApiResponse<Voucher>> {
    ensure_code_free(store, &payload.code, None)?;
    let voucher = store.add_voucher(payload);

    log_audit(
        store,
        "voucher_create",
        Some("vouchers"),
        Some(serde_json::json!({ "voucher_id": voucher.id, "code": voucher.code })),
    );

    Ok(ApiResponse::success(
        "Voucher created",
        voucher,
        Some(Meta::empty()),
    ))
}

pub fn update_voucher(
    store: &mut AdminStore,
    id: Uuid,
    payload: UpdateVoucherRequest,
) -> AppResult<ApiResponse<Voucher>> {
    if let Some(code) = payload.code.as_deref() {
        ensure_code_free(store, code, Some(id))?;
    }
    if payload.status == Some(VoucherStatus::Active) {
        let existing = store.voucher(id).ok_or(AppError::NotFound)?;
        check_activation(existing, Utc::now())?;
    }
    let voucher = store.update_voucher(id, payload).ok_or(AppError::NotFound)?;

    log_audit(
        store,
        "voucher_update",
        Some("vouchers"),
        Some(serde_json::json!({ "voucher_id": voucher.id })),
    );

    Ok(ApiResponse::success("Updated", voucher, Some(Meta::empty())))
}

/// Flips active/expired. Reactivating a voucher whose end date has passed is
/// rejected and leaves the stored flag unchanged.
pub fn toggle_voucher_status(store: &mut AdminStore, id: Uuid) -> AppResult<ApiResponse<Voucher>> {
    let now = Utc::now();
    let existing = store.voucher(id).ok_or(AppError::NotFound)?;

    let next = match effective_status(existing, now) {
        VoucherStatus::Active => VoucherStatus::Expired,
        VoucherStatus::Expired => {
            check_activation(existing, now)?;
            VoucherStatus::Active
        }
    };
    let patch = UpdateVoucherRequest {
        status: Some(next),
        ..Default::default()
    };
    let voucher = store.update_voucher(id, patch).ok_or(AppError::NotFound)?;

    log_audit(
        store,
        "voucher_toggle",
        Some("vouchers"),
        Some(serde_json::json!({ "voucher_id": voucher.id, "status": voucher.status.as_str() })),
    );

    Ok(ApiResponse::success(
        "Voucher updated",
        voucher,
        Some(Meta::empty()),
    ))
}

pub fn delete_voucher(
    store: &mut AdminStore,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !store.remove_voucher(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        store,
        "voucher_delete",
        Some("vouchers"),
        Some(serde_json::json!({ "voucher_id": id })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn ensure_code_free(store: &AdminStore, code: &str, exclude: Option<Uuid>) -> AppResult<()> {
    let taken = store
        .vouchers
        .iter()
        .any(|v| Some(v.id) != exclude && v.code.eq_ignore_ascii_case(code));
    if taken {
        return Err(AppError::validation("code", "voucher code already exists"));
    }
    Ok(())
}
