use crate::{models::customers::Customer, store::CustomerStore};
use tracing::info;

/// Inserts the two sample customers. On an empty store they receive ids 1 and 2.
pub fn load_customers(store: &dyn CustomerStore) {
    let customers = [
        Customer::new("First customer"),
        Customer::new("Second customer").with_phone_numbers(["01234", "56789"]),
    ];

    for customer in customers {
        let inserted = store.insert(customer);
        info!(customer_id = ?inserted.id, "Seeded customer");
    }
}
