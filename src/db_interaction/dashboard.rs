use anyhow::Context;
use diesel::{dsl::sum, ExpressionMethods, QueryDsl, RunQueryDsl};

use crate::{domain::OrderStatus, models::DashboardStats, schema::{customers, orders}, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

#[tracing::instrument(
    "Aggregating dashboard stats",
    skip_all
)]
pub async fn get_dashboard_stats(
    mut conn: DbConnection
) -> Result<DashboardStats, anyhow::Error> {

    let res = spawn_blocking_with_tracing(move || {
        // One snapshot for all four aggregates
        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run::<DashboardStats, anyhow::Error, _>(|conn| {
                let total_orders = orders::table
                    .count()
                    .get_result::<i64>(conn)
                    .context("Failed to count orders")?;

                let total_customers = customers::table
                    .count()
                    .get_result::<i64>(conn)
                    .context("Failed to count customers")?;

                let pending_orders = orders::table
                    .filter(orders::status.eq(OrderStatus::Pending.as_str()))
                    .count()
                    .get_result::<i64>(conn)
                    .context("Failed to count pending orders")?;

                let total_revenue = orders::table
                    .select(sum(orders::total_amount))
                    .get_result::<Option<f64>>(conn)
                    .context("Failed to sum order totals")?
                    .unwrap_or(0.0);

                Ok(DashboardStats {
                    total_orders,
                    total_customers,
                    pending_orders,
                    total_revenue
                })
            })
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}
