mod customer_details;
mod customer_email;
mod order_item;
mod order_status;

pub use customer_details::*;
pub use customer_email::*;
pub use order_item::*;
pub use order_status::*;
