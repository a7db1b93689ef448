use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    error::{AppError, AppResult},
    models::User,
    params::UserQuery,
    response::{ApiResponse, Meta},
    rules::user_matches,
    state::AdminStore,
};

/// Search over email + username + firebase uid; store insertion order.
pub fn list_users(store: &AdminStore, query: UserQuery) -> AppResult<ApiResponse<UserList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let q = query.q.as_deref();

    let matching: Vec<User> = store
        .users
        .iter()
        .filter(|u| user_matches(u, q))
        .cloned()
        .collect();
    let total = matching.len() as i64;
    let items = matching
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Users", UserList { items }, Some(meta)))
}

pub fn get_user(store: &AdminStore, id: Uuid) -> AppResult<ApiResponse<User>> {
    let user = store.user(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("User", user, None))
}

pub fn create_user(
    store: &mut AdminStore,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let user = store.add_user(payload);

    log_audit(
        store,
        "user_create",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id })),
    );

    Ok(ApiResponse::success(
        "User created",
        user,
        Some(Meta::empty()),
    ))
}

pub fn update_user(
    store: &mut AdminStore,
    id: Uuid,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let user = store.update_user(id, payload).ok_or(AppError::NotFound)?;

    log_audit(
        store,
        "user_update",
        Some("users"),
        Some(serde_json::json!({ "user_id": user.id })),
    );

    Ok(ApiResponse::success("Updated", user, Some(Meta::empty())))
}

pub fn delete_user(
    store: &mut AdminStore,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !store.remove_user(id) {
        return Err(AppError::NotFound);
    }

    log_audit(
        store,
        "user_delete",
        Some("users"),
        Some(serde_json::json!({ "user_id": id })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
