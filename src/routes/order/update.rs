use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde::Deserialize;
use thiserror::Error;

use crate::{db_interaction::{update_order_status, UpdateOrderStatusError}, domain::OrderStatus, utils::{error_fmt_chain, error_json_response, get_pooled_connection, DbPool, PoolGetError}};

use super::OrderEnvelope;

// Unknown status names are rejected by the json extractor
#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusJson{
    pub status: Option<OrderStatus>
}

#[derive(Error)]
pub enum UpdateOrderError{
    #[error("Status is required")]
    MissingStatus,
    #[error("{0}")]
    PoolError(#[from] PoolGetError),
    #[error("{0}")]
    UpdateError(#[from] UpdateOrderStatusError)
}

impl Debug for UpdateOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for UpdateOrderError {
    fn status_code(&self) -> StatusCode {
        match self {
            UpdateOrderError::MissingStatus => StatusCode::BAD_REQUEST,
            UpdateOrderError::UpdateError(UpdateOrderStatusError::NoOrderIdError(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_json_response(self.status_code(), self)
    }
}

#[tracing::instrument(
    "Updating order status",
    skip(pool)
)]
pub async fn update_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<UpdateOrderStatusJson>
) -> Result<HttpResponse, UpdateOrderError>{
    let order_id = path.into_inner();
    let status = json.into_inner().status.ok_or(UpdateOrderError::MissingStatus)?;

    let conn = get_pooled_connection(&pool).await?;
    let order = update_order_status(conn, status, order_id).await?;

    Ok(HttpResponse::Ok().json(OrderEnvelope{
        message: Some("Order status updated successfully".to_string()),
        order
    }))
}
