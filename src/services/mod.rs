use crate::{
    models::customers::CustomerId,
    patch::{negotiation::BodyParseError, PatchError},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Customer with id '{0}' not found")]
    NotFound(CustomerId),

    #[error(transparent)]
    InvalidBody(#[from] BodyParseError),

    #[error(transparent)]
    PatchFailed(#[from] PatchError),
}

pub mod customers;
