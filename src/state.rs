use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::dto::brands::{CreateBrandRequest, UpdateBrandRequest};
use crate::dto::orders::{CreateOrderRequest, UpdateOrderRequest};
use crate::dto::products::{CreateProductRequest, UpdateProductRequest};
use crate::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::dto::variants::{CreateVariantRequest, UpdateVariantRequest};
use crate::dto::vouchers::{CreateVoucherRequest, UpdateVoucherRequest};
use crate::models::{
    AuditLog, Brand, Order, OrderStatus, Product, User, Variant, Voucher, VoucherStatus,
};
use crate::rules::parse_voucher_date;

/// Single source of truth for all admin-visible entities. Collections keep
/// newest-first order: every add prepends. Ids and timestamps are assigned
/// here, never by callers.
///
/// This layer is deliberately permissive: no field validation, and mutations
/// on unknown ids are silent no-ops. Guards (duplicate voucher codes,
/// reactivation after expiry, foreign keys) live in the service layer.
#[derive(Debug, Default)]
pub struct AdminStore {
    pub users: Vec<User>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
    pub variants: Vec<Variant>,
    pub orders: Vec<Order>,
    pub vouchers: Vec<Voucher>,
    pub audit_logs: Vec<AuditLog>,
    pub is_booted: bool,
}

impl AdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated initial load: fixed, non-cancelable delay, then the booted
    /// flag flips. Entity data is untouched.
    pub async fn boot(&mut self, delay: Duration) {
        tokio::time::sleep(delay).await;
        self.is_booted = true;
        tracing::info!(delay_ms = delay.as_millis() as u64, "store booted");
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn add_user(&mut self, req: CreateUserRequest) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            firebase_uid: req.firebase_uid,
            username: req.username,
            email: req.email,
            avatar: req.avatar,
            phone: req.phone,
            birth_date: req.birth_date,
            gender: req.gender,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(0, user.clone());
        user
    }

    pub fn update_user(&mut self, id: Uuid, patch: UpdateUserRequest) -> Option<User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(birth_date) = patch.birth_date {
            user.birth_date = Some(birth_date);
        }
        if let Some(gender) = patch.gender {
            user.gender = Some(gender);
        }
        user.updated_at = Utc::now();
        Some(user.clone())
    }

    pub fn remove_user(&mut self, id: Uuid) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    // ------------------------------------------------------------------
    // Brands
    // ------------------------------------------------------------------

    pub fn add_brand(&mut self, req: CreateBrandRequest) -> Brand {
        let now = Utc::now();
        let brand = Brand {
            id: Uuid::new_v4(),
            name: req.name,
            slug: req.slug,
            logo: req.logo,
            description: req.description,
            created_at: now,
            updated_at: now,
        };
        self.brands.insert(0, brand.clone());
        brand
    }

    pub fn update_brand(&mut self, id: Uuid, patch: UpdateBrandRequest) -> Option<Brand> {
        let brand = self.brands.iter_mut().find(|b| b.id == id)?;
        if let Some(name) = patch.name {
            brand.name = name;
        }
        if let Some(slug) = patch.slug {
            brand.slug = slug;
        }
        if let Some(logo) = patch.logo {
            brand.logo = logo;
        }
        if let Some(description) = patch.description {
            brand.description = description;
        }
        brand.updated_at = Utc::now();
        Some(brand.clone())
    }

    /// Removes the brand and cascades: its products go, and transitively
    /// their variants. Orders and vouchers are never touched by cascades.
    pub fn remove_brand(&mut self, id: Uuid) -> bool {
        let before = self.brands.len();
        self.brands.retain(|b| b.id != id);
        if self.brands.len() == before {
            return false;
        }
        let orphaned: Vec<Uuid> = self
            .products
            .iter()
            .filter(|p| p.brand_id == id)
            .map(|p| p.id)
            .collect();
        self.products.retain(|p| p.brand_id != id);
        self.variants.retain(|v| !orphaned.contains(&v.product_id));
        true
    }

    pub fn brand(&self, id: Uuid) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    pub fn add_product(&mut self, req: CreateProductRequest) -> Product {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            brand_id: req.brand_id,
            name: req.name,
            description: req.description,
            base_price: req.base_price,
            discount: req.discount,
            views: req.views,
            sold: req.sold,
            favorites: req.favorites,
            images: req.images,
            created_at: now,
            updated_at: now,
        };
        self.products.insert(0, product.clone());
        product
    }

    pub fn update_product(&mut self, id: Uuid, patch: UpdateProductRequest) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        if let Some(brand_id) = patch.brand_id {
            product.brand_id = brand_id;
        }
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(base_price) = patch.base_price {
            product.base_price = base_price;
        }
        if let Some(discount) = patch.discount {
            product.discount = discount;
        }
        if let Some(views) = patch.views {
            product.views = views;
        }
        if let Some(sold) = patch.sold {
            product.sold = sold;
        }
        if let Some(favorites) = patch.favorites {
            product.favorites = favorites;
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        product.updated_at = Utc::now();
        Some(product.clone())
    }

    /// Removes the product and its variants.
    pub fn remove_product(&mut self, id: Uuid) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return false;
        }
        self.variants.retain(|v| v.product_id != id);
        true
    }

    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    // ------------------------------------------------------------------
    // Variants
    // ------------------------------------------------------------------

    pub fn add_variant(&mut self, req: CreateVariantRequest) -> Variant {
        let variant = Variant {
            id: Uuid::new_v4(),
            product_id: req.product_id,
            color: req.color,
            size: req.size,
            stock: req.stock,
            price: req.price,
            updated_at: Utc::now(),
        };
        self.variants.insert(0, variant.clone());
        variant
    }

    pub fn update_variant(&mut self, id: Uuid, patch: UpdateVariantRequest) -> Option<Variant> {
        let variant = self.variants.iter_mut().find(|v| v.id == id)?;
        if let Some(color) = patch.color {
            variant.color = color;
        }
        if let Some(size) = patch.size {
            variant.size = size;
        }
        if let Some(stock) = patch.stock {
            variant.stock = stock;
        }
        if let Some(price) = patch.price {
            variant.price = price;
        }
        variant.updated_at = Utc::now();
        Some(variant.clone())
    }

    pub fn remove_variant(&mut self, id: Uuid) -> bool {
        let before = self.variants.len();
        self.variants.retain(|v| v.id != id);
        self.variants.len() != before
    }

    pub fn variant(&self, id: Uuid) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    // ------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------

    pub fn add_order(&mut self, req: CreateOrderRequest) -> Order {
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            user_id: req.user_id,
            items: req.items,
            payment_method: req.payment_method,
            total_amount: req.total_amount,
            status: req.status.unwrap_or(OrderStatus::Pending),
            shipping_address: req.shipping_address,
            created_at: now,
            updated_at: now,
        };
        self.orders.insert(0, order.clone());
        order
    }

    /// Status transitions are free-form here: any status is settable at any
    /// time.
    pub fn update_order(&mut self, id: Uuid, patch: UpdateOrderRequest) -> Option<Order> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        if let Some(items) = patch.items {
            order.items = items;
        }
        if let Some(payment_method) = patch.payment_method {
            order.payment_method = payment_method;
        }
        if let Some(total_amount) = patch.total_amount {
            order.total_amount = total_amount;
        }
        if let Some(status) = patch.status {
            order.status = status;
        }
        if let Some(shipping_address) = patch.shipping_address {
            order.shipping_address = shipping_address;
        }
        order.updated_at = Utc::now();
        Some(order.clone())
    }

    pub fn remove_order(&mut self, id: Uuid) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != id);
        self.orders.len() != before
    }

    pub fn order(&self, id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    // ------------------------------------------------------------------
    // Vouchers
    // ------------------------------------------------------------------

    pub fn add_voucher(&mut self, req: CreateVoucherRequest) -> Voucher {
        let now = Utc::now();
        let voucher = Voucher {
            id: Uuid::new_v4(),
            code: req.code,
            kind: req.kind,
            value: req.value,
            min_order: req.min_order,
            max_discount: req.max_discount,
            usage_limit: req.usage_limit,
            used: 0,
            start_at: req.start_at.as_deref().and_then(parse_voucher_date),
            end_at: req.end_at.as_deref().and_then(parse_voucher_date),
            status: req.status.unwrap_or(VoucherStatus::Active),
            created_at: now,
            updated_at: now,
        };
        self.vouchers.insert(0, voucher.clone());
        voucher
    }

    pub fn update_voucher(&mut self, id: Uuid, patch: UpdateVoucherRequest) -> Option<Voucher> {
        let voucher = self.vouchers.iter_mut().find(|v| v.id == id)?;
        if let Some(code) = patch.code {
            voucher.code = code;
        }
        if let Some(kind) = patch.kind {
            voucher.kind = kind;
        }
        if let Some(value) = patch.value {
            voucher.value = value;
        }
        if let Some(min_order) = patch.min_order {
            voucher.min_order = Some(min_order);
        }
        if let Some(max_discount) = patch.max_discount {
            voucher.max_discount = Some(max_discount);
        }
        if let Some(usage_limit) = patch.usage_limit {
            voucher.usage_limit = Some(usage_limit);
        }
        if let Some(used) = patch.used {
            voucher.used = used;
        }
        if let Some(start_at) = patch.start_at {
            voucher.start_at = parse_voucher_date(&start_at);
        }
        if let Some(end_at) = patch.end_at {
            voucher.end_at = parse_voucher_date(&end_at);
        }
        if let Some(status) = patch.status {
            voucher.status = status;
        }
        voucher.updated_at = Utc::now();
        Some(voucher.clone())
    }

    pub fn remove_voucher(&mut self, id: Uuid) -> bool {
        let before = self.vouchers.len();
        self.vouchers.retain(|v| v.id != id);
        self.vouchers.len() != before
    }

    pub fn voucher(&self, id: Uuid) -> Option<&Voucher> {
        self.vouchers.iter().find(|v| v.id == id)
    }
}
