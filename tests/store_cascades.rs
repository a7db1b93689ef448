use uuid::Uuid;

use sneakshop_admin::dto::brands::{CreateBrandRequest, UpdateBrandRequest};
use sneakshop_admin::dto::products::{CreateProductRequest, UpdateProductRequest};
use sneakshop_admin::dto::variants::CreateVariantRequest;
use sneakshop_admin::dto::vouchers::CreateVoucherRequest;
use sneakshop_admin::models::{VoucherKind, VoucherStatus};
use sneakshop_admin::state::AdminStore;

fn brand_req(name: &str, slug: &str) -> CreateBrandRequest {
    CreateBrandRequest {
        name: name.into(),
        slug: slug.into(),
        logo: format!("https://cdn.example.com/{slug}.svg"),
        description: String::new(),
    }
}

fn product_req(brand_id: Uuid, name: &str) -> CreateProductRequest {
    CreateProductRequest {
        brand_id,
        name: name.into(),
        description: String::new(),
        base_price: 1_000_000,
        discount: 0,
        views: 0,
        sold: 0,
        favorites: 0,
        images: vec![],
    }
}

fn variant_req(product_id: Uuid) -> CreateVariantRequest {
    CreateVariantRequest {
        product_id,
        color: "Black".into(),
        size: 42,
        stock: 5,
        price: 1_000_000,
    }
}

#[test]
fn brand_removal_cascades_to_products_and_variants() {
    let mut store = AdminStore::new();
    let nike = store.add_brand(brand_req("Nike", "nike"));
    let adidas = store.add_brand(brand_req("Adidas", "adidas"));

    let af1 = store.add_product(product_req(nike.id, "Air Force 1"));
    let am90 = store.add_product(product_req(nike.id, "Air Max 90"));
    let samba = store.add_product(product_req(adidas.id, "Samba"));
    store.add_variant(variant_req(af1.id));
    store.add_variant(variant_req(am90.id));
    let kept = store.add_variant(variant_req(samba.id));

    assert!(store.remove_brand(nike.id));

    assert!(store.brand(nike.id).is_none());
    assert!(store.products.iter().all(|p| p.brand_id != nike.id));
    // Only the other brand's product and variant survive.
    assert_eq!(store.products.len(), 1);
    assert_eq!(store.variants.len(), 1);
    assert_eq!(store.variants[0].id, kept.id);
}

#[test]
fn removing_only_brand_empties_chain() {
    let mut store = AdminStore::new();
    let brand = store.add_brand(brand_req("Nike", "nike"));
    let product = store.add_product(product_req(brand.id, "Air Force 1"));
    store.add_variant(variant_req(product.id));

    assert!(store.remove_brand(brand.id));

    assert!(store.brands.is_empty());
    assert!(store.products.is_empty());
    assert!(store.variants.is_empty());
}

#[test]
fn product_removal_cascades_to_variants_only() {
    let mut store = AdminStore::new();
    let brand = store.add_brand(brand_req("Nike", "nike"));
    let product = store.add_product(product_req(brand.id, "Air Force 1"));
    store.add_variant(variant_req(product.id));

    assert!(store.remove_product(product.id));

    assert_eq!(store.brands.len(), 1);
    assert!(store.products.is_empty());
    assert!(store.variants.is_empty());
}

#[test]
fn sequential_updates_shallow_merge() {
    let mut store = AdminStore::new();
    let brand = store.add_brand(brand_req("Nike", "nike"));
    let product = store.add_product(product_req(brand.id, "Air Force 1"));

    let first = store
        .update_product(
            product.id,
            UpdateProductRequest {
                name: Some("Air Force 1 '07".into()),
                ..Default::default()
            },
        )
        .expect("product exists");
    let second = store
        .update_product(
            product.id,
            UpdateProductRequest {
                base_price: Some(2_929_000),
                ..Default::default()
            },
        )
        .expect("product exists");

    // Both patches are reflected; the second touch owns updated_at.
    assert_eq!(second.name, "Air Force 1 '07");
    assert_eq!(second.base_price, 2_929_000);
    assert!(second.updated_at >= first.updated_at);
    assert_eq!(second.created_at, product.created_at);
}

#[test]
fn adds_prepend_newest_first() {
    let mut store = AdminStore::new();
    store.add_brand(brand_req("Nike", "nike"));
    let newest = store.add_brand(brand_req("Adidas", "adidas"));
    assert_eq!(store.brands[0].id, newest.id);

    let voucher = store.add_voucher(CreateVoucherRequest {
        code: "X".into(),
        kind: VoucherKind::Fixed,
        value: 10_000,
        min_order: None,
        max_discount: None,
        usage_limit: None,
        start_at: None,
        end_at: None,
        status: Some(VoucherStatus::Active),
    });
    assert_eq!(store.vouchers[0].id, voucher.id);
}

#[test]
fn store_assigns_ids_and_timestamps() {
    let mut store = AdminStore::new();
    let brand = store.add_brand(brand_req("Nike", "nike"));
    assert_eq!(brand.created_at, brand.updated_at);
    assert_ne!(brand.id, Uuid::nil());
}

#[test]
fn mutations_on_unknown_ids_are_silent_noops() {
    let mut store = AdminStore::new();
    store.add_brand(brand_req("Nike", "nike"));

    let missing = Uuid::new_v4();
    assert!(store.update_brand(missing, UpdateBrandRequest::default()).is_none());
    assert!(!store.remove_brand(missing));
    assert!(!store.remove_product(missing));
    assert!(!store.remove_voucher(missing));
    assert_eq!(store.brands.len(), 1);
}
