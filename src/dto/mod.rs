pub mod brands;
pub mod orders;
pub mod products;
pub mod users;
pub mod variants;
pub mod vouchers;
