use serde::{Deserialize, Serialize};

use crate::models::{Voucher, VoucherKind, VoucherStatus};

/// Dates arrive as strings and are parsed leniently by the service layer;
/// an unparsable date is kept as "no date", never a hard error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoucherRequest {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: VoucherKind,
    pub value: i64,
    pub min_order: Option<i64>,
    pub max_discount: Option<i64>,
    pub usage_limit: Option<i32>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    /// Defaults to `active` when absent.
    pub status: Option<VoucherStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVoucherRequest {
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<VoucherKind>,
    pub value: Option<i64>,
    pub min_order: Option<i64>,
    pub max_discount: Option<i64>,
    pub usage_limit: Option<i32>,
    pub used: Option<i32>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub status: Option<VoucherStatus>,
}

#[derive(Debug, Serialize)]
pub struct VoucherList {
    pub items: Vec<Voucher>,
}
