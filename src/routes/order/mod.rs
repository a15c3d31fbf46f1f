use serde::{Deserialize, Serialize};

use crate::models::OrderWithCustomer;

pub mod get;
pub mod post;
pub mod update;

pub use get::*;
pub use post::*;
pub use update::*;

#[derive(Serialize, Deserialize, Debug)]
pub struct OrderEnvelope{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub order: OrderWithCustomer
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OrderList{
    pub orders: Vec<OrderWithCustomer>,
    pub count: usize
}
