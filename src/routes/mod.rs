mod health_check;
pub mod customer;
pub mod dashboard;
pub mod order;

pub use health_check::*;
