use crate::models::customers::{Customer, CustomerId};
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Storage for customer records. Implementations own identifier assignment.
pub trait CustomerStore: Send + Sync {
    fn get(&self, id: CustomerId) -> Option<Customer>;

    fn get_all(&self) -> Vec<Customer>;

    /// Assigns the next identifier to `customer`, overriding any id it carries.
    fn insert(&self, customer: Customer) -> Customer;

    /// Stores `customer` under `id`, stamping the id onto the record.
    fn update(&self, id: CustomerId, customer: Customer) -> Customer;

    fn delete(&self, id: CustomerId) -> Option<Customer>;
}

#[derive(Debug)]
struct Inner {
    customers: BTreeMap<CustomerId, Customer>,
    next_id: CustomerId,
}

/// Process-local store. A single mutex serializes every operation.
#[derive(Debug)]
pub struct InMemoryCustomerStore {
    inner: Mutex<Inner>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                customers: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    // The map is never left half-updated, so a poisoned guard is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn get(&self, id: CustomerId) -> Option<Customer> {
        self.lock().customers.get(&id).cloned()
    }

    fn get_all(&self) -> Vec<Customer> {
        self.lock().customers.values().cloned().collect()
    }

    fn insert(&self, mut customer: Customer) -> Customer {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        customer.id = Some(id);
        inner.customers.insert(id, customer.clone());
        customer
    }

    fn update(&self, id: CustomerId, mut customer: Customer) -> Customer {
        customer.id = Some(id);
        self.lock().customers.insert(id, customer.clone());
        customer
    }

    fn delete(&self, id: CustomerId) -> Option<Customer> {
        self.lock().customers.remove(&id)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
