use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{db_interaction::get_customers, utils::{error_fmt_chain, error_json_response, get_pooled_connection, DbPool, PoolGetError}};

use super::CustomerList;

#[derive(Error)]
pub enum GetCustomersError {
    #[error("{0}")]
    PoolError(#[from] PoolGetError),
    #[error("{0:#}")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for GetCustomersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for GetCustomersError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_json_response(self.status_code(), self)
    }
}

#[tracing::instrument(
    "Getting list of customers",
    skip(pool)
)]
pub async fn list_customers(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, GetCustomersError>{
    let conn = get_pooled_connection(&pool).await?;
    let customers = get_customers(conn).await?;

    Ok(HttpResponse::Ok().json(CustomerList{
        count: customers.len(),
        customers
    }))
}
