use thiserror::Error;

use super::CustomerEmail;

// Validated customer fields, used by both explicit and implicit customer creation
#[derive(Debug, Clone)]
pub struct CustomerDetails{
    pub name: String,
    pub phone: String,
    pub email: Option<CustomerEmail>,
    pub address: String
}

#[derive(Error, Debug)]
pub enum CustomerDetailsError{
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0}")]
    InvalidEmail(String)
}

impl CustomerDetails {
    pub fn parse(
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>
    ) -> Result<CustomerDetails, CustomerDetailsError> {
        let name = required(name, "name")?;
        let phone = required(phone, "phone")?;
        let address = required(address, "address")?;

        // Blank emails are stored as null
        let email = match email.map(|e| e.trim().to_string()) {
            Some(e) if !e.is_empty() => {
                Some(CustomerEmail::parse(e).map_err(CustomerDetailsError::InvalidEmail)?)
            }
            _ => None
        };

        Ok(CustomerDetails{
            name,
            phone,
            email,
            address
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, CustomerDetailsError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CustomerDetailsError::MissingField(field))
    }
}
