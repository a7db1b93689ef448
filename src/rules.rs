//! Pure derivations over stored records. Nothing here touches the store.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{AppError, AppResult};
use crate::models::{Order, Product, User, Voucher, VoucherStatus};
use crate::params::{OrderTab, VoucherTab};

/// Lenient voucher date parsing: RFC 3339 first, then a bare `YYYY-MM-DD`
/// (read as midnight UTC). Anything else is `None`; a voucher with an
/// unparsable date never expires by date.
pub fn parse_voucher_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// The status actually shown to users: a past `end_at` always reads as
/// expired, regardless of the stored flag. Otherwise the stored flag wins.
pub fn effective_status(voucher: &Voucher, now: DateTime<Utc>) -> VoucherStatus {
    match voucher.end_at {
        Some(end) if end < now => VoucherStatus::Expired,
        _ => voucher.status,
    }
}

/// Guard for flipping a voucher back to active. Date-based expiry is final;
/// a voucher whose stored flag was flipped to expired while `end_at` is
/// still in the future (or absent) may be reactivated.
pub fn check_activation(voucher: &Voucher, now: DateTime<Utc>) -> AppResult<()> {
    if matches!(voucher.end_at, Some(end) if end < now) {
        return Err(AppError::validation(
            "status",
            "voucher has passed its end date and cannot be reactivated",
        ));
    }
    Ok(())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Order list predicate: status tab, then case-insensitive substring match
/// over the joined id / payment method / user id.
pub fn order_matches(order: &Order, tab: OrderTab, q: Option<&str>) -> bool {
    if !tab.accepts(order.status) {
        return false;
    }
    match q {
        None | Some("") => true,
        Some(q) => {
            let joined = format!(
                "{} {} {}",
                order.id,
                order.payment_method.as_str(),
                order.user_id
            );
            contains_ci(&joined, q)
        }
    }
}

/// Voucher list predicate. The tab is matched against the *effective*
/// status, not the stored one.
pub fn voucher_matches(
    voucher: &Voucher,
    tab: VoucherTab,
    q: Option<&str>,
    now: DateTime<Utc>,
) -> bool {
    if !tab.accepts(effective_status(voucher, now)) {
        return false;
    }
    match q {
        None | Some("") => true,
        Some(q) => {
            let joined = format!("{} {}", voucher.code, voucher.id);
            contains_ci(&joined, q)
        }
    }
}

pub fn product_matches(product: &Product, q: Option<&str>) -> bool {
    match q {
        None | Some("") => true,
        Some(q) => {
            contains_ci(&product.name, q) || contains_ci(&product.description, q)
        }
    }
}

pub fn user_matches(user: &User, q: Option<&str>) -> bool {
    match q {
        None | Some("") => true,
        Some(q) => {
            contains_ci(&user.email, q)
                || contains_ci(&user.username, q)
                || contains_ci(&user.firebase_uid, q)
        }
    }
}

pub fn sort_orders_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub fn sort_vouchers_newest_first(vouchers: &mut [Voucher]) {
    vouchers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
