pub mod brand_service;
pub mod order_service;
pub mod product_service;
pub mod user_service;
pub mod variant_service;
pub mod voucher_service;
