use anyhow::Context;
use diesel::{Connection, PgConnection, QueryDsl, RunQueryDsl};

use crate::{domain::{CustomerDetails, OrderItem, OrderStatus}, models::NewCustomer, schema::customers};

use super::{insert_customer, insert_order};

// Inserts a demo customer with one confirmed order into an empty store.
// Returns false when customers already exist.
#[tracing::instrument(
    "Adding sample data",
    skip_all
)]
pub fn add_sample_data(conn: &mut PgConnection) -> Result<bool, anyhow::Error> {
    conn.transaction::<bool, anyhow::Error, _>(|conn| {
        let existing = customers::table
            .count()
            .get_result::<i64>(conn)
            .context("Failed to count customers")?;

        if existing > 0 {
            return Ok(false);
        }

        let details = CustomerDetails::parse(
            Some("John Doe".to_string()),
            Some("9016748921".to_string()),
            Some("john@example.com".to_string()),
            Some("123 Main St, Test City".to_string())
        )?;

        let customer = insert_customer(conn, NewCustomer::from(details))
            .context("Failed to insert sample customer")?;

        let items = vec![
            OrderItem {
                name: "Tandoori Chicken Pizza".to_string(),
                price: 399.0,
                quantity: 2
            },
            OrderItem {
                name: "Paneer Tikka Pizza".to_string(),
                price: 349.0,
                quantity: 1
            }
        ];

        let order = insert_order(conn, customer.id, &items, "cash".to_string(), OrderStatus::Confirmed)
            .context("Failed to insert sample order")?;

        tracing::info!(customer_id = customer.id, order_id = order.id, "Sample data added");

        Ok(true)
    })
}
