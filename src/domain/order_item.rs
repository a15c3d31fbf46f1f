use serde::{Deserialize, Serialize};

// One line of an order, prices are taken from the client as is
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderItem{
    pub name: String,
    pub price: f64,
    pub quantity: u32
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// Sum of price * quantity over all items, 0 for an empty list
pub fn total_amount(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::line_total).sum()
}
