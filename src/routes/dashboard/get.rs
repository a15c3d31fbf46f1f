use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{db_interaction::get_dashboard_stats, utils::{error_fmt_chain, error_json_response, get_pooled_connection, DbPool, PoolGetError}};

#[derive(Error)]
pub enum DashboardStatsError {
    #[error("{0}")]
    PoolError(#[from] PoolGetError),
    #[error("{0:#}")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for DashboardStatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for DashboardStatsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_json_response(self.status_code(), self)
    }
}

#[tracing::instrument(
    "Getting dashboard stats",
    skip(pool)
)]
pub async fn dashboard_stats(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, DashboardStatsError>{
    let conn = get_pooled_connection(&pool).await?;
    let stats = get_dashboard_stats(conn).await?;

    Ok(HttpResponse::Ok().json(stats))
}
