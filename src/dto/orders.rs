use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Order, OrderItem, OrderStatus, PaymentMethod};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: Uuid,
    pub items: Vec<OrderItem>,
    pub payment_method: PaymentMethod,
    pub total_amount: i64,
    /// Defaults to `pending` when absent.
    pub status: Option<OrderStatus>,
    pub shipping_address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderRequest {
    pub items: Option<Vec<OrderItem>>,
    pub payment_method: Option<PaymentMethod>,
    pub total_amount: Option<i64>,
    pub status: Option<OrderStatus>,
    pub shipping_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize)]
pub struct OrderList {
    pub items: Vec<Order>,
}
