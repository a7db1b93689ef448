//! The JSON shapes exchanged with the surrounding app are a contract:
//! mixed snake_case/camelCase field names, `{ success, message, data,
//! field, meta }` envelopes, and `meta.totalPages`.

use serde_json::json;

use sneakshop_admin::error::AppError;
use sneakshop_admin::response::{ApiResponse, Meta};
use sneakshop_admin::seed;

#[test]
fn envelope_and_meta_field_names() -> anyhow::Result<()> {
    let resp = ApiResponse::success("Brands", json!([]), Some(Meta::new(2, 20, 45)));
    let value = serde_json::to_value(&resp)?;

    assert_eq!(value["success"], json!(true));
    assert_eq!(value["message"], json!("Brands"));
    assert_eq!(value["meta"]["page"], json!(2));
    assert_eq!(value["meta"]["limit"], json!(20));
    assert_eq!(value["meta"]["total"], json!(45));
    assert_eq!(value["meta"]["totalPages"], json!(3));
    Ok(())
}

#[test]
fn validation_errors_carry_the_field_name() -> anyhow::Result<()> {
    let err = AppError::validation("code", "voucher code already exists");
    let body: ApiResponse<serde_json::Value> = err.to_response();
    let value = serde_json::to_value(&body)?;

    assert_eq!(value["success"], json!(false));
    assert_eq!(value["field"], json!("code"));
    assert_eq!(value["message"], json!("voucher code already exists"));
    Ok(())
}

#[test]
fn entity_field_name_conventions() -> anyhow::Result<()> {
    let store = seed::seeded();

    let product = serde_json::to_value(&store.products[0])?;
    assert!(product.get("brand_id").is_some());
    assert!(product.get("base_price").is_some());
    assert!(product.get("createdAt").is_some());
    assert!(product.get("created_at").is_none());

    let voucher = serde_json::to_value(&store.vouchers[0])?;
    assert!(voucher.get("type").is_some());
    assert!(voucher.get("minOrder").is_some());
    assert!(voucher.get("endAt").is_some());

    let user = serde_json::to_value(&store.users[0])?;
    assert!(user.get("firebaseUid").is_some());

    let order = serde_json::to_value(&store.orders[0])?;
    assert!(order.get("payment_method").is_some());
    assert!(order.get("shipping_address").is_some());
    assert!(order["items"][0].get("variant_id").is_some());
    Ok(())
}
