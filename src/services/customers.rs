use super::ServiceError;
use crate::{
    extract::PatchRequest,
    models::customers::{Customer, CustomerId},
    store::CustomerStore,
};
use tracing::{info, warn};

pub fn list_customers(store: &dyn CustomerStore) -> Vec<Customer> {
    store.get_all()
}

pub fn get_customer(store: &dyn CustomerStore, id: CustomerId) -> Result<Customer, ServiceError> {
    store.get(id).ok_or(ServiceError::NotFound(id))
}

pub fn create_customer(store: &dyn CustomerStore, customer: Customer) -> Customer {
    let created = store.insert(customer);
    info!(customer_id = ?created.id, "Created customer");
    created
}

/// Full overwrite of an existing record. The path id wins over any id in the body.
pub fn replace_customer(
    store: &dyn CustomerStore,
    id: CustomerId,
    mut customer: Customer,
) -> Result<Customer, ServiceError> {
    get_customer(store, id)?;

    customer.id = Some(id);
    let replaced = store.update(id, customer);
    info!(customer_id = id, "Replaced customer");
    Ok(replaced)
}

/// Looks up the record before parsing the body, so an unknown id is reported as not found
/// regardless of what the body contains.
pub fn patch_customer(
    store: &dyn CustomerStore,
    id: CustomerId,
    request: &PatchRequest,
) -> Result<Customer, ServiceError> {
    let current = get_customer(store, id)?;
    let patch = request.format.parse(&request.body)?;

    let mut patched = patch.apply(current).map_err(|err| {
        warn!(customer_id = id, format = %request.format, error = %err, "Rejected customer patch");
        err
    })?;

    patched.id = Some(id);
    let stored = store.update(id, patched);
    info!(customer_id = id, format = %request.format, "Patched customer");
    Ok(stored)
}

pub fn delete_customer(store: &dyn CustomerStore, id: CustomerId) -> Result<(), ServiceError> {
    store.delete(id).ok_or(ServiceError::NotFound(id))?;
    info!(customer_id = id, "Deleted customer");
    Ok(())
}

#[cfg(test)]
#[path = "customers_tests.rs"]
mod tests;
