use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{db_interaction::{get_order_by_id, get_orders, GetOrderError, OrderFilter}, utils::{error_fmt_chain, error_json_response, get_pooled_connection, DbPool, PoolGetError}};

use super::{OrderEnvelope, OrderList};

#[derive(Error)]
pub enum GetOrdersError {
    #[error("{0}")]
    PoolError(#[from] PoolGetError),
    #[error("{0:#}")]
    UnexpectedError(#[from] anyhow::Error)
}

impl Debug for GetOrdersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for GetOrdersError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_json_response(self.status_code(), self)
    }
}

#[tracing::instrument(
    "Getting list of orders",
    skip(pool)
)]
pub async fn list_orders(
    pool: web::Data<DbPool>,
    query: web::Query<OrderFilter>
) -> Result<HttpResponse, GetOrdersError> {
    let conn = get_pooled_connection(&pool).await?;
    let orders = get_orders(conn, query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(OrderList{
        count: orders.len(),
        orders
    }))
}

#[derive(Error)]
pub enum GetOrderByIdError {
    #[error("{0}")]
    PoolError(#[from] PoolGetError),
    #[error("{0}")]
    LookupError(#[from] GetOrderError)
}

impl Debug for GetOrderByIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for GetOrderByIdError {
    fn status_code(&self) -> StatusCode {
        match self {
            GetOrderByIdError::LookupError(GetOrderError::NoOrderIdError(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_json_response(self.status_code(), self)
    }
}

#[tracing::instrument(
    "Getting order by id",
    skip(pool)
)]
pub async fn get_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, GetOrderByIdError> {
    let order_id = path.into_inner();

    let conn = get_pooled_connection(&pool).await?;
    let order = get_order_by_id(conn, order_id).await?;

    Ok(HttpResponse::Ok().json(OrderEnvelope{
        message: None,
        order
    }))
}
