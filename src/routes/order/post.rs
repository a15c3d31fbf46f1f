use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde::Deserialize;
use thiserror::Error;

use crate::{db_interaction::{create_order_for_customer, CreateOrderError}, domain::{CustomerDetails, CustomerDetailsError, OrderItem}, utils::{error_fmt_chain, error_json_response, get_pooled_connection, DbPool, PoolGetError}};

use super::OrderEnvelope;

const DEFAULT_PAYMENT_METHOD: &str = "cash";

// A `status` sent by the client is not part of the schema and is dropped
#[derive(Deserialize, Debug)]
pub struct OrderJson{
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub customer_address: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub payment_method: Option<String>
}

#[derive(Error)]
pub enum PostOrderError{
    #[error("Customer details and items are required")]
    MissingFields,
    #[error("{0}")]
    InvalidEmail(String),
    #[error("{0}")]
    PoolError(#[from] PoolGetError),
    #[error("{0}")]
    CreateError(#[from] CreateOrderError)
}

impl From<CustomerDetailsError> for PostOrderError {
    fn from(e: CustomerDetailsError) -> Self {
        match e {
            CustomerDetailsError::MissingField(_) => PostOrderError::MissingFields,
            CustomerDetailsError::InvalidEmail(e) => PostOrderError::InvalidEmail(e)
        }
    }
}

impl Debug for PostOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for PostOrderError {
    fn status_code(&self) -> StatusCode {
        match self {
            PostOrderError::MissingFields
            | PostOrderError::InvalidEmail(_)
            | PostOrderError::CreateError(CreateOrderError::TotalOutOfRangeError) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_json_response(self.status_code(), self)
    }
}

#[tracing::instrument(
    "Posting order",
    skip(pool)
)]
pub async fn post_order(
    pool: web::Data<DbPool>,
    json: web::Json<OrderJson>
) -> Result<HttpResponse, PostOrderError> {
    let OrderJson{
        customer_name,
        customer_phone,
        customer_email,
        customer_address,
        items,
        payment_method
    } = json.into_inner();

    let details = CustomerDetails::parse(customer_name, customer_phone, customer_email, customer_address)?;
    let items = items.ok_or(PostOrderError::MissingFields)?;

    let payment_method = payment_method
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string());

    let conn = get_pooled_connection(&pool).await?;
    let order = create_order_for_customer(conn, details, items, payment_method).await?;

    Ok(HttpResponse::Created().json(OrderEnvelope{
        message: Some("Order created successfully".to_string()),
        order
    }))
}
