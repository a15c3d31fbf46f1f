use std::{error::Error, fmt::Debug};

use anyhow::Context;
use chrono::Utc;
use diesel::{Connection, OptionalExtension, PgConnection, SelectableHelper};
use diesel::{RunQueryDsl, QueryDsl, ExpressionMethods};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::{domain::{CustomerDetails, OrderItem, OrderStatus}, models::{Customer, NewCustomer, NewOrder, Order, OrderWithCustomer}, schema::{customers, orders}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

use super::{find_customer_by_phone, insert_customer};

// Optional filters for listing orders, both are exact matches and an empty value means no filter
#[derive(Deserialize, Debug, Default, Clone)]
pub struct OrderFilter {
    #[serde(default, deserialize_with = "empty_status_as_none")]
    pub status: Option<OrderStatus>,
    pub customer_phone: Option<String>,
}

fn empty_status_as_none<'de, D>(deserializer: D) -> Result<Option<OrderStatus>, D::Error>
where
    D: Deserializer<'de>
{
    match Option::<String>::deserialize(deserializer)? {
        Some(status) if !status.is_empty() => status.parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None)
    }
}

// Error associated with creating orders
#[derive(Error)]
pub enum CreateOrderError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query: {0}")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("Failed to encode order items: {0}")]
    ItemsEncodingError(#[from] serde_json::Error),
    #[error("Order total is out of range")]
    TotalOutOfRangeError
}

impl Debug for CreateOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

pub fn insert_order(
    conn: &mut PgConnection,
    customer_id: i32,
    items: &[OrderItem],
    payment_method: String,
    status: OrderStatus
) -> Result<Order, CreateOrderError> {
    let new_order = NewOrder::new(customer_id, items, payment_method, status)?;

    // Postgres would store an overflowed sum as Infinity, which json cannot carry
    if !new_order.total_amount.is_finite() {
        return Err(CreateOrderError::TotalOutOfRangeError);
    }

    let order = diesel::insert_into(orders::table)
        .values(&new_order)
        .returning(Order::as_returning())
        .get_result::<Order>(conn)?;

    Ok(order)
}

#[tracing::instrument(
    "Creating order along with its customer if needed",
    skip_all,
    fields(customer_phone = %details.phone)
)]
pub async fn create_order_for_customer(
    mut conn: DbConnection,
    details: CustomerDetails,
    items: Vec<OrderItem>,
    payment_method: String
) -> Result<OrderWithCustomer, CreateOrderError> {

    let res = spawn_blocking_with_tracing(move || {
        conn.transaction::<OrderWithCustomer, CreateOrderError, _>(|conn| {
            let customer = match find_customer_by_phone(conn, &details.phone)? {
                Some(customer) => customer,
                None => {
                    let customer = insert_customer(conn, NewCustomer::from(details))?;
                    tracing::info!(customer_id = customer.id, "Created customer for new phone number");
                    customer
                }
            };

            // Client supplied statuses are ignored at creation
            let order = insert_order(conn, customer.id, &items, payment_method, OrderStatus::Pending)?;

            Ok(OrderWithCustomer::new(order, customer)?)
        })
    })
    .await??;

    Ok(res)
}

#[tracing::instrument(
    "Getting orders along with their customers",
    skip(conn)
)]
pub async fn get_orders(
    mut conn: DbConnection,
    filter: OrderFilter
) -> Result<Vec<OrderWithCustomer>, anyhow::Error> {

    let res = spawn_blocking_with_tracing(move || {
        let mut query = orders::table
            .inner_join(customers::table)
            .select((Order::as_select(), Customer::as_select()))
            .into_boxed();

        if let Some(status) = filter.status {
            query = query.filter(orders::status.eq(status.as_str()));
        }

        if let Some(phone) = filter.customer_phone.filter(|p| !p.is_empty()) {
            query = query.filter(customers::phone.eq(phone));
        }

        let rows = query
            .order((orders::created_at.desc(), orders::id.desc()))
            .load::<(Order, Customer)>(&mut conn)
            .context("Failed to load orders")?;

        rows.into_iter()
            .map(|(order, customer)| OrderWithCustomer::new(order, customer))
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to decode order items")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

// Error associated with getting a single order
#[derive(Error)]
pub enum GetOrderError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query: {0}")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("Failed to decode order items: {0}")]
    ItemsDecodingError(#[from] serde_json::Error),
    #[error("Order {0} not found")]
    NoOrderIdError(i32)
}

impl Debug for GetOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Getting order by id",
    skip(conn)
)]
pub async fn get_order_by_id(
    mut conn: DbConnection,
    order_id: i32
) -> Result<OrderWithCustomer, GetOrderError> {

    let res = spawn_blocking_with_tracing(move || {
        let row = orders::table
            .inner_join(customers::table)
            .filter(orders::id.eq(order_id))
            .select((Order::as_select(), Customer::as_select()))
            .first::<(Order, Customer)>(&mut conn)
            .optional()?;

        match row {
            Some((order, customer)) => Ok(OrderWithCustomer::new(order, customer)?),
            None => Err(GetOrderError::NoOrderIdError(order_id))
        }
    })
    .await??;

    Ok(res)
}

// Error associated with updating order status
#[derive(Error)]
pub enum UpdateOrderStatusError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query: {0}")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("Failed to decode order items: {0}")]
    ItemsDecodingError(#[from] serde_json::Error),
    #[error("Order {0} not found")]
    NoOrderIdError(i32)
}

impl Debug for UpdateOrderStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Function to perform update order status operation
#[tracing::instrument(
    "Updating order status",
    skip(conn)
)]
pub async fn update_order_status(
    mut conn: DbConnection,
    status: OrderStatus,
    order_id: i32
) -> Result<OrderWithCustomer, UpdateOrderStatusError> {

    let res = spawn_blocking_with_tracing(move || {
        conn.transaction::<OrderWithCustomer, UpdateOrderStatusError, _>(|conn| {
            let updated = diesel::update(orders::table.find(order_id))
                .set((
                    orders::status.eq(status.as_str()),
                    orders::updated_at.eq(Utc::now())
                ))
                .returning(Order::as_returning())
                .get_result::<Order>(conn)
                .optional()?;

            let order = match updated {
                Some(order) => order,
                None => return Err(UpdateOrderStatusError::NoOrderIdError(order_id))
            };

            let customer = customers::table
                .find(order.customer_id)
                .select(Customer::as_select())
                .first::<Customer>(conn)?;

            Ok(OrderWithCustomer::new(order, customer)?)
        })
    })
    .await??;

    Ok(res)
}
