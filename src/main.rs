use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sneakshop_admin::{
    config::AppConfig,
    dto::vouchers::CreateVoucherRequest,
    models::{VoucherKind, VoucherStatus},
    params::{OrderListQuery, OrderTab, Pagination, ProductQuery},
    response::ApiResponse,
    seed,
    services::{order_service, product_service, voucher_service},
    state::AdminStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sneakshop_admin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let mut store = AdminStore::new();
    store.boot(Duration::from_millis(config.boot_delay_ms)).await;
    if config.seed_demo_data {
        seed::seed(&mut store);
        tracing::info!(
            brands = store.brands.len(),
            products = store.products.len(),
            variants = store.variants.len(),
            orders = store.orders.len(),
            vouchers = store.vouchers.len(),
            "seeded demo data"
        );
    }

    // A short admin session against the seeded store.
    let products = product_service::list_products(
        &store,
        ProductQuery {
            pagination: Pagination {
                page: Some(1),
                per_page: Some(10),
            },
            q: Some("air".into()),
        },
    )?;
    for product in products.data.map(|list| list.items).unwrap_or_default() {
        tracing::info!(name = %product.name, price = product.base_price, "matched product");
    }

    let paid = order_service::list_orders(
        &store,
        OrderListQuery {
            pagination: Pagination {
                page: Some(1),
                per_page: Some(20),
            },
            tab: Some(OrderTab::Paid),
            q: None,
            sort_order: None,
        },
    )?;
    tracing::info!(
        total = paid.meta.and_then(|m| m.total).unwrap_or(0),
        "paid orders"
    );

    let created = voucher_service::create_voucher(
        &mut store,
        CreateVoucherRequest {
            code: "BACK2SCHOOL".into(),
            kind: VoucherKind::Fixed,
            value: 100_000,
            min_order: Some(500_000),
            max_discount: None,
            usage_limit: Some(300),
            start_at: Some("2026-08-01".into()),
            end_at: Some("2026-09-15".into()),
            status: Some(VoucherStatus::Active),
        },
    )?;
    if let Some(voucher) = created.data {
        tracing::info!(code = %voucher.code, "voucher created");
    }

    // Date-expired voucher: reactivation must be refused.
    let expired = store
        .vouchers
        .iter()
        .find(|v| v.code == "SUMMER25")
        .map(|v| v.id);
    if let Some(id) = expired {
        match voucher_service::toggle_voucher_status(&mut store, id) {
            Ok(_) => tracing::info!("voucher toggled"),
            Err(err) => {
                let body: ApiResponse<serde_json::Value> = err.to_response();
                tracing::warn!(body = %serde_json::to_string(&body)?, "toggle refused");
            }
        }
    }

    tracing::info!(audit_entries = store.audit_logs.len(), "session done");
    Ok(())
}
