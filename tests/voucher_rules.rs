use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use sneakshop_admin::models::{Voucher, VoucherKind, VoucherStatus};
use sneakshop_admin::rules::{check_activation, effective_status, parse_voucher_date};

fn voucher(end_at: Option<DateTime<Utc>>, status: VoucherStatus) -> Voucher {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Voucher {
        id: Uuid::new_v4(),
        code: "WELCOME10".into(),
        kind: VoucherKind::Percent,
        value: 10,
        min_order: None,
        max_discount: None,
        usage_limit: None,
        used: 0,
        start_at: None,
        end_at,
        status,
        created_at: created,
        updated_at: created,
    }
}

#[test]
fn past_end_date_always_reads_expired() {
    let end = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();

    let active = voucher(Some(end), VoucherStatus::Active);
    let expired = voucher(Some(end), VoucherStatus::Expired);
    assert_eq!(effective_status(&active, now), VoucherStatus::Expired);
    assert_eq!(effective_status(&expired, now), VoucherStatus::Expired);
}

#[test]
fn future_end_date_falls_through_to_stored_status() {
    let end = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let active = voucher(Some(end), VoucherStatus::Active);
    let expired = voucher(Some(end), VoucherStatus::Expired);
    assert_eq!(effective_status(&active, now), VoucherStatus::Active);
    assert_eq!(effective_status(&expired, now), VoucherStatus::Expired);
}

#[test]
fn missing_end_date_never_expires_by_date() {
    let now = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
    let v = voucher(None, VoucherStatus::Active);
    assert_eq!(effective_status(&v, now), VoucherStatus::Active);
}

#[test]
fn lenient_date_parsing() {
    let midnight = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(parse_voucher_date("2026-06-01"), Some(midnight));
    assert_eq!(
        parse_voucher_date("2026-06-01T00:00:00Z"),
        Some(midnight)
    );
    assert_eq!(parse_voucher_date("soon"), None);
    assert_eq!(parse_voucher_date(""), None);
}

#[test]
fn reactivation_after_date_expiry_is_rejected() {
    let end = Utc.with_ymd_and_hms(2024, 8, 31, 0, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let v = voucher(Some(end), VoucherStatus::Expired);
    let err = check_activation(&v, now).unwrap_err();
    assert!(err.to_string().contains("cannot be reactivated"));
}

#[test]
fn manually_expired_voucher_with_future_end_may_reactivate() {
    let end = Utc.with_ymd_and_hms(2030, 6, 30, 0, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let v = voucher(Some(end), VoucherStatus::Expired);
    assert!(check_activation(&v, now).is_ok());

    let undated = voucher(None, VoucherStatus::Expired);
    assert!(check_activation(&undated, now).is_ok());
}
