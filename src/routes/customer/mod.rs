use serde::{Deserialize, Serialize};

use crate::models::Customer;

pub mod get;
pub mod post;

pub use get::*;
pub use post::*;

#[derive(Serialize, Deserialize, Debug)]
pub struct CustomerEnvelope{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub customer: Customer
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CustomerList{
    pub customers: Vec<Customer>,
    pub count: usize
}
