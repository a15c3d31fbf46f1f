use anyhow::Context;
use diesel::{Connection, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, QueryResult, RunQueryDsl, SelectableHelper};

use crate::{domain::CustomerDetails, models::{Customer, NewCustomer}, schema::customers, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

// Phone is not unique, the oldest customer with a matching phone wins
#[tracing::instrument(
    "Finding customer by phone",
    skip(conn)
)]
pub fn find_customer_by_phone(
    conn: &mut PgConnection,
    phone: &str
) -> QueryResult<Option<Customer>> {
    customers::table
        .filter(customers::phone.eq(phone))
        .order(customers::id.asc())
        .select(Customer::as_select())
        .first::<Customer>(conn)
        .optional()
}

pub fn insert_customer(
    conn: &mut PgConnection,
    new_customer: NewCustomer
) -> QueryResult<Customer> {
    diesel::insert_into(customers::table)
        .values(&new_customer)
        .returning(Customer::as_returning())
        .get_result::<Customer>(conn)
}

#[tracing::instrument(
    "Inserting customer into the database",
    skip_all
)]
pub async fn create_customer(
    mut conn: DbConnection,
    details: CustomerDetails
) -> Result<Customer, anyhow::Error> {
    let res = spawn_blocking_with_tracing(move || {
        conn.transaction::<Customer, anyhow::Error, _>(|conn| {
            let customer = insert_customer(conn, NewCustomer::from(details))
                .context("Failed to insert customer")?;

            Ok(customer)
        })
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[tracing::instrument(
    "Getting customers from db",
    skip_all
)]
pub async fn get_customers(
    mut conn: DbConnection
) -> Result<Vec<Customer>, anyhow::Error> {
    let res = spawn_blocking_with_tracing(move || {
        customers::table
            .order((customers::created_at.desc(), customers::id.desc()))
            .select(Customer::as_select())
            .load::<Customer>(&mut conn)
            .context("Failed to get customers")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}
