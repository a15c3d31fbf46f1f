mod customers;
mod dashboard;
mod orders;
mod seed;

pub use customers::*;
pub use dashboard::*;
pub use orders::*;
pub use seed::*;
