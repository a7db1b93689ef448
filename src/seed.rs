//! Static fixtures populating a fresh store before any user interaction.

use crate::dto::brands::CreateBrandRequest;
use crate::dto::orders::CreateOrderRequest;
use crate::dto::products::CreateProductRequest;
use crate::dto::users::CreateUserRequest;
use crate::dto::variants::CreateVariantRequest;
use crate::dto::vouchers::CreateVoucherRequest;
use crate::models::{OrderItem, OrderStatus, PaymentMethod, VoucherKind, VoucherStatus};
use crate::state::AdminStore;

pub fn seeded() -> AdminStore {
    let mut store = AdminStore::new();
    seed(&mut store);
    store
}

pub fn seed(store: &mut AdminStore) {
    let shopper = store.add_user(CreateUserRequest {
        firebase_uid: "fb-7Kq2mX9pLr".into(),
        username: "minhtran".into(),
        email: "minh.tran@example.com".into(),
        avatar: Some("https://cdn.sneakshop.dev/avatars/minhtran.png".into()),
        phone: Some("+84901234567".into()),
        birth_date: Some("1998-04-12".into()),
        gender: Some("male".into()),
    });
    store.add_user(CreateUserRequest {
        firebase_uid: "fb-Ue5sD1wNvz".into(),
        username: "lanpham".into(),
        email: "lan.pham@example.com".into(),
        avatar: None,
        phone: None,
        birth_date: None,
        gender: Some("female".into()),
    });

    let brands = [
        (
            "Nike",
            "nike",
            "https://cdn.sneakshop.dev/brands/nike.svg",
            "Just do it.",
        ),
        (
            "Adidas",
            "adidas",
            "https://cdn.sneakshop.dev/brands/adidas.svg",
            "Impossible is nothing.",
        ),
        (
            "New Balance",
            "new-balance",
            "https://cdn.sneakshop.dev/brands/new-balance.svg",
            "Fearlessly independent since 1906.",
        ),
    ];
    let mut brand_ids = Vec::new();
    for (name, slug, logo, description) in brands {
        let brand = store.add_brand(CreateBrandRequest {
            name: name.into(),
            slug: slug.into(),
            logo: logo.into(),
            description: description.into(),
        });
        brand_ids.push(brand.id);
    }

    // (brand index, name, description, base price, discount %)
    let products = [
        (0, "Air Force 1 '07", "The classic white-on-white court icon.", 2_929_000, 0),
        (0, "Air Max 90", "Waffle outsole, visible Air cushioning.", 3_519_000, 15),
        (1, "Samba OG", "Low-profile gum-sole terrace staple.", 2_600_000, 0),
        (1, "Ultraboost Light", "Lightest Boost midsole to date.", 4_800_000, 20),
        (2, "550", "Early-80s basketball silhouette, back again.", 3_100_000, 10),
    ];
    let mut product_ids = Vec::new();
    for (brand_idx, name, description, base_price, discount) in products {
        let product = store.add_product(CreateProductRequest {
            brand_id: brand_ids[brand_idx],
            name: name.into(),
            description: description.into(),
            base_price,
            discount,
            views: 0,
            sold: 0,
            favorites: 0,
            images: vec![format!(
                "https://cdn.sneakshop.dev/products/{}.jpg",
                name.to_lowercase().replace(' ', "-")
            )],
        });
        product_ids.push(product.id);
    }

    // (product index, color, size, stock, price)
    let variants = [
        (0, "White", 41, 12, 2_929_000),
        (0, "White", 42, 8, 2_929_000),
        (1, "Infrared", 42, 5, 3_519_000),
        (2, "Black/White", 40, 20, 2_600_000),
        (3, "Core Black", 43, 3, 4_800_000),
        (4, "White/Green", 42, 7, 3_100_000),
    ];
    let mut variant_ids = Vec::new();
    for (product_idx, color, size, stock, price) in variants {
        let variant = store.add_variant(CreateVariantRequest {
            product_id: product_ids[product_idx],
            color: color.into(),
            size,
            stock,
            price,
        });
        variant_ids.push(variant.id);
    }

    store.add_order(CreateOrderRequest {
        user_id: shopper.id,
        items: vec![OrderItem {
            product_id: product_ids[0],
            variant_id: variant_ids[0],
            name: "Air Force 1 '07".into(),
            price: 2_929_000,
            qty: 1,
            image: "https://cdn.sneakshop.dev/products/air-force-1-'07.jpg".into(),
        }],
        payment_method: PaymentMethod::Cod,
        total_amount: 2_929_000,
        status: Some(OrderStatus::Pending),
        shipping_address: "12 Nguyen Hue, District 1, Ho Chi Minh City".into(),
    });
    store.add_order(CreateOrderRequest {
        user_id: shopper.id,
        items: vec![OrderItem {
            product_id: product_ids[2],
            variant_id: variant_ids[3],
            name: "Samba OG".into(),
            price: 2_600_000,
            qty: 2,
            image: "https://cdn.sneakshop.dev/products/samba-og.jpg".into(),
        }],
        payment_method: PaymentMethod::Momo,
        total_amount: 5_200_000,
        status: Some(OrderStatus::Paid),
        shipping_address: "45 Tran Phu, Hai Chau, Da Nang".into(),
    });

    store.add_voucher(CreateVoucherRequest {
        code: "WELCOME10".into(),
        kind: VoucherKind::Percent,
        value: 10,
        min_order: Some(1_000_000),
        max_discount: Some(500_000),
        usage_limit: Some(1000),
        start_at: Some("2025-01-01".into()),
        end_at: Some("2030-12-31".into()),
        status: Some(VoucherStatus::Active),
    });
    // Ended long ago; effective status reads expired no matter the flag.
    store.add_voucher(CreateVoucherRequest {
        code: "SUMMER25".into(),
        kind: VoucherKind::Percent,
        value: 25,
        min_order: Some(2_000_000),
        max_discount: Some(800_000),
        usage_limit: Some(200),
        start_at: Some("2024-06-01".into()),
        end_at: Some("2024-08-31".into()),
        status: Some(VoucherStatus::Active),
    });
    // Manually switched off while its end date is still ahead.
    store.add_voucher(CreateVoucherRequest {
        code: "FREESHIP".into(),
        kind: VoucherKind::Fixed,
        value: 30_000,
        min_order: None,
        max_discount: None,
        usage_limit: None,
        start_at: Some("2025-01-01".into()),
        end_at: Some("2030-06-30".into()),
        status: Some(VoucherStatus::Expired),
    });
}
