use serde::Deserialize;

use crate::models::{OrderStatus, VoucherStatus};

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Status tab on the admin order list.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderTab {
    All,
    Paid,
    Pending,
    Cancelled,
}

impl OrderTab {
    pub fn accepts(&self, status: OrderStatus) -> bool {
        match self {
            OrderTab::All => true,
            OrderTab::Paid => status == OrderStatus::Paid,
            OrderTab::Pending => status == OrderStatus::Pending,
            OrderTab::Cancelled => status == OrderStatus::Cancelled,
        }
    }
}

/// Status tab on the voucher list. Matched against the *effective* status,
/// not the stored one.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoucherTab {
    All,
    Active,
    Expired,
}

impl VoucherTab {
    pub fn accepts(&self, effective: VoucherStatus) -> bool {
        match self {
            VoucherTab::All => true,
            VoucherTab::Active => effective == VoucherStatus::Active,
            VoucherTab::Expired => effective == VoucherStatus::Expired,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub tab: Option<OrderTab>,
    pub q: Option<String>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Deserialize)]
pub struct VoucherListQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub tab: Option<VoucherTab>,
    pub q: Option<String>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub q: Option<String>,
}
