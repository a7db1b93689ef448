use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::orders::{CreateOrderRequest, OrderList, UpdateOrderRequest, UpdateOrderStatusRequest},
    error::{AppError, AppResult},
    models::Order,
    params::{OrderListQuery, OrderTab, SortOrder},
    response::{ApiResponse, Meta},
    rules::{order_matches, sort_orders_newest_first},
    state::AdminStore,
};

/// Status tab, then case-insensitive search over id/payment method/user id,
/// then newest first (unless asked otherwise).
pub fn list_orders(store: &AdminStore, query: OrderListQuery) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let tab = query.tab.unwrap_or(OrderTab::All);
    let q = query.q.as_deref();

    let mut matching: Vec<Order> = store
        .orders
        .iter()
        .filter(|o| order_matches(o, tab, q))
        .cloned()
        .collect();
    match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Desc => sort_orders_newest_first(&mut matching),
        SortOrder::Asc => matching.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    let total = matching.len() as i64;
    let items = matching
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

pub fn get_order(store: &AdminStore, id: Uuid) -> AppResult<ApiResponse<Order>> {
    let order = store.order(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Order found", order, Some(Meta::empty())))
}

pub fn create_order(
    store: &mut AdminStore,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    if payload.items.is_empty() {
        return Err(AppError::BadRequest("Order has no items".into()));
    }
    if payload.items.iter().any(|item| item.qty <= 0) {
        return Err(AppError::BadRequest("Order has invalid quantity".into()));
    }
    let order = store.add_order(payload);

    log_audit(
        store,
        "order_create",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id })),
    );

    Ok(ApiResponse::success(
        "Order created",
        order,
        Some(Meta::empty()),
    ))
}

pub fn update_order(
    store: &mut AdminStore,
    id: Uuid,
    payload: UpdateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let order = store.update_order(id, payload).ok_or(AppError::NotFound)?;

    log_audit(
        store,
        "order_update",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id })),
    );

    Ok(ApiResponse::success("Updated", order, Some(Meta::empty())))
}

/// No state-machine guard: any status is settable at any time.
pub fn update_order_status(
    store: &mut AdminStore,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let patch = UpdateOrderRequest {
        status: Some(payload.status),
        ..Default::default()
    };
    let order = store.update_order(id, patch).ok_or(AppError::NotFound)?;

    log_audit(
        store,
        "order_status_update",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "status": order.status.as_str() })),
    );

    Ok(ApiResponse::success(
        "Order updated",
        order,
        Some(Meta::empty()),
    ))
}

pub fn delete_order(
    store: &mut AdminStore,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !store.remove_order(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        store,
        "order_delete",
        Some("orders"),
        Some(serde_json::json!({ "order_id": id })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
