use chrono::{DateTime, Utc};
use diesel::prelude::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::domain::{total_amount, CustomerDetails, OrderItem, OrderStatus};
use crate::schema::{customers, orders};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = customers)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<CustomerDetails> for NewCustomer {
    fn from(details: CustomerDetails) -> Self {
        NewCustomer {
            name: details.name,
            phone: details.phone,
            email: details.email.map(|e| e.inner()),
            address: details.address,
            created_at: Utc::now(),
        }
    }
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub items: String,
    pub total_amount: f64,
    pub status: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub customer_id: i32,
    pub items: String,
    pub total_amount: f64,
    pub status: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewOrder {
    // The total is fixed here and never recomputed
    pub fn new(
        customer_id: i32,
        items: &[OrderItem],
        payment_method: String,
        status: OrderStatus,
    ) -> Result<Self, serde_json::Error> {
        let now = Utc::now();

        Ok(NewOrder {
            customer_id,
            items: serde_json::to_string(items)?,
            total_amount: total_amount(items),
            status: status.as_str().to_string(),
            payment_method,
            created_at: now,
            updated_at: now,
        })
    }
}

// Order as returned by the api, with the owning customer embedded
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderWithCustomer {
    pub id: i32,
    pub customer_id: i32,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderWithCustomer {
    pub fn new(order: Order, customer: Customer) -> Result<Self, serde_json::Error> {
        let items: Vec<OrderItem> = serde_json::from_str(&order.items)?;

        Ok(OrderWithCustomer {
            id: order.id,
            customer_id: order.customer_id,
            customer,
            items,
            total_amount: order.total_amount,
            status: order.status,
            payment_method: order.payment_method,
            created_at: order.created_at,
            updated_at: order.updated_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_orders: i64,
    pub total_customers: i64,
    pub pending_orders: i64,
    pub total_revenue: f64,
}
