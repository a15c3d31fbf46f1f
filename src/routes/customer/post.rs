use std::{error::Error, fmt::Debug};

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde::Deserialize;
use thiserror::Error;

use crate::{db_interaction::create_customer, domain::{CustomerDetails, CustomerDetailsError}, utils::{error_fmt_chain, error_json_response, get_pooled_connection, DbPool, PoolGetError}};

use super::CustomerEnvelope;

// Every field is optional here so that absent ones surface as a 400
#[derive(Deserialize, Debug)]
pub struct CustomerJson{
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>
}

#[derive(Error)]
pub enum PostCustomerError{
    #[error("Name, phone, and address are required")]
    MissingFields,
    #[error("{0}")]
    InvalidEmail(String),
    #[error("{0}")]
    PoolError(#[from] PoolGetError),
    #[error("{0:#}")]
    UnexpectedError(#[from] anyhow::Error)
}

impl From<CustomerDetailsError> for PostCustomerError {
    fn from(e: CustomerDetailsError) -> Self {
        match e {
            CustomerDetailsError::MissingField(_) => PostCustomerError::MissingFields,
            CustomerDetailsError::InvalidEmail(e) => PostCustomerError::InvalidEmail(e)
        }
    }
}

impl Debug for PostCustomerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl ResponseError for PostCustomerError {
    fn status_code(&self) -> StatusCode {
        match self {
            PostCustomerError::MissingFields | PostCustomerError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        error_json_response(self.status_code(), self)
    }
}

#[tracing::instrument(
    "Creating customer",
    skip(pool)
)]
pub async fn post_customer(
    pool: web::Data<DbPool>,
    json: web::Json<CustomerJson>
) -> Result<HttpResponse, PostCustomerError>{
    let CustomerJson{ name, phone, email, address } = json.into_inner();
    let details = CustomerDetails::parse(name, phone, email, address)?;

    let conn = get_pooled_connection(&pool).await?;
    let customer = create_customer(conn, details).await?;

    Ok(HttpResponse::Created().json(CustomerEnvelope{
        message: Some("Customer created successfully".to_string()),
        customer
    }))
}
