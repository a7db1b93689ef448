use uuid::Uuid;

use sneakshop_admin::dto::orders::CreateOrderRequest;
use sneakshop_admin::models::{OrderItem, OrderStatus, PaymentMethod};
use sneakshop_admin::params::{
    OrderListQuery, OrderTab, Pagination, ProductQuery, UserQuery, VoucherListQuery, VoucherTab,
};
use sneakshop_admin::seed;
use sneakshop_admin::services::{order_service, product_service, user_service, voucher_service};
use sneakshop_admin::state::AdminStore;

fn page(per_page: i64) -> Pagination {
    Pagination {
        page: Some(1),
        per_page: Some(per_page),
    }
}

fn order_req(user_id: Uuid, method: PaymentMethod, status: OrderStatus) -> CreateOrderRequest {
    CreateOrderRequest {
        user_id,
        items: vec![OrderItem {
            product_id: Uuid::new_v4(),
            variant_id: Uuid::new_v4(),
            name: "Air Force 1".into(),
            price: 2_929_000,
            qty: 1,
            image: String::new(),
        }],
        payment_method: method,
        total_amount: 2_929_000,
        status: Some(status),
        shipping_address: "somewhere".into(),
    }
}

#[test]
fn order_tab_and_query_combine() -> anyhow::Result<()> {
    let mut store = AdminStore::new();
    let user = Uuid::new_v4();
    let paid_momo = store.add_order(order_req(user, PaymentMethod::Momo, OrderStatus::Paid));
    store.add_order(order_req(user, PaymentMethod::Card, OrderStatus::Paid));
    store.add_order(order_req(user, PaymentMethod::Momo, OrderStatus::Pending));

    let resp = order_service::list_orders(
        &store,
        OrderListQuery {
            pagination: page(20),
            tab: Some(OrderTab::Paid),
            q: Some("MoMo".into()),
            sort_order: None,
        },
    )?;
    let items = resp.data.unwrap().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, paid_momo.id);
    Ok(())
}

#[test]
fn order_query_matches_user_id_fragment() -> anyhow::Result<()> {
    let mut store = AdminStore::new();
    let user = Uuid::new_v4();
    store.add_order(order_req(user, PaymentMethod::Cod, OrderStatus::Pending));
    store.add_order(order_req(Uuid::new_v4(), PaymentMethod::Cod, OrderStatus::Pending));

    let fragment = user.to_string()[..8].to_uppercase();
    let resp = order_service::list_orders(
        &store,
        OrderListQuery {
            pagination: page(20),
            tab: Some(OrderTab::All),
            q: Some(fragment),
            sort_order: None,
        },
    )?;
    let items = resp.data.unwrap().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].user_id, user);
    Ok(())
}

#[test]
fn orders_sort_newest_first_by_default() -> anyhow::Result<()> {
    let mut store = AdminStore::new();
    let user = Uuid::new_v4();
    store.add_order(order_req(user, PaymentMethod::Cod, OrderStatus::Pending));
    let newest = store.add_order(order_req(user, PaymentMethod::Cod, OrderStatus::Pending));

    let resp = order_service::list_orders(
        &store,
        OrderListQuery {
            pagination: page(20),
            tab: None,
            q: None,
            sort_order: None,
        },
    )?;
    let items = resp.data.unwrap().items;
    assert_eq!(items[0].id, newest.id);
    Ok(())
}

#[test]
fn voucher_tabs_use_effective_status() -> anyhow::Result<()> {
    // Seed data: WELCOME10 active, SUMMER25 stored-active but past its end
    // date, FREESHIP manually expired with a future end date.
    let store = seed::seeded();

    let list = |tab| -> anyhow::Result<Vec<String>> {
        let resp = voucher_service::list_vouchers(
            &store,
            VoucherListQuery {
                pagination: page(20),
                tab: Some(tab),
                q: None,
                sort_order: None,
            },
        )?;
        Ok(resp
            .data
            .unwrap()
            .items
            .into_iter()
            .map(|v| v.code)
            .collect())
    };

    let active = list(VoucherTab::Active)?;
    assert_eq!(active, vec!["WELCOME10".to_string()]);

    let expired = list(VoucherTab::Expired)?;
    assert!(expired.contains(&"SUMMER25".to_string()));
    assert!(expired.contains(&"FREESHIP".to_string()));
    assert_eq!(expired.len(), 2);

    assert_eq!(list(VoucherTab::All)?.len(), 3);
    Ok(())
}

#[test]
fn voucher_query_matches_code_case_insensitively() -> anyhow::Result<()> {
    let store = seed::seeded();
    let resp = voucher_service::list_vouchers(
        &store,
        VoucherListQuery {
            pagination: page(20),
            tab: None,
            q: Some("welcome".into()),
            sort_order: None,
        },
    )?;
    let items = resp.data.unwrap().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].code, "WELCOME10");
    Ok(())
}

#[test]
fn product_search_spans_name_and_description() -> anyhow::Result<()> {
    let store = seed::seeded();
    let resp = product_service::list_products(
        &store,
        ProductQuery {
            pagination: page(20),
            q: Some("AIR".into()),
        },
    )?;
    let names: Vec<String> = resp
        .data
        .unwrap()
        .items
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|n| n.to_lowercase().contains("air")));

    let resp = product_service::list_products(
        &store,
        ProductQuery {
            pagination: page(20),
            q: Some("terrace".into()),
        },
    )?;
    assert_eq!(resp.data.unwrap().items.len(), 1);
    Ok(())
}

#[test]
fn user_search_spans_email_username_and_uid() -> anyhow::Result<()> {
    let store = seed::seeded();
    let by_email = user_service::list_users(
        &store,
        UserQuery {
            pagination: page(20),
            q: Some("minh.tran@".into()),
        },
    )?;
    assert_eq!(by_email.data.unwrap().items.len(), 1);

    let by_uid = user_service::list_users(
        &store,
        UserQuery {
            pagination: page(20),
            q: Some("fb-ue5".into()),
        },
    )?;
    let items = by_uid.data.unwrap().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].username, "lanpham");
    Ok(())
}

#[test]
fn pagination_meta_reports_total_pages() -> anyhow::Result<()> {
    let store = seed::seeded();
    let resp = product_service::list_products(
        &store,
        ProductQuery {
            pagination: Pagination {
                page: Some(3),
                per_page: Some(2),
            },
            q: None,
        },
    )?;
    let meta = resp.meta.unwrap();
    assert_eq!(meta.total, Some(5));
    assert_eq!(meta.total_pages, Some(3));
    // Last page holds the remainder.
    assert_eq!(resp.data.unwrap().items.len(), 1);
    Ok(())
}
