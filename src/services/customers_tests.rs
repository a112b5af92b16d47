use super::*;
use crate::{
    patch::{negotiation::PatchFormat, PatchError},
    store::InMemoryCustomerStore,
};

fn seeded_store() -> InMemoryCustomerStore {
    let store = InMemoryCustomerStore::new();
    store.insert(Customer::new("First customer"));
    store.insert(Customer::new("Second customer").with_phone_numbers(["01234", "56789"]));
    store
}

fn partial(body: &'static str) -> PatchRequest {
    PatchRequest::new(PatchFormat::PartialJson, body)
}

fn operations(body: &'static str) -> PatchRequest {
    PatchRequest::new(PatchFormat::JsonPatch, body)
}

#[cfg(test)]
mod test_crud {
    use super::*;

    #[test]
    fn create_then_get_round_trips_everything_but_id() {
        let store = InMemoryCustomerStore::new();
        let input = Customer::new("Ada").with_phone_numbers(["1"]);

        let created = create_customer(&store, input.clone());
        let fetched = get_customer(&store, created.id.unwrap()).unwrap();

        assert_eq!(fetched, input.with_id(1));
    }

    #[test]
    fn create_ignores_client_id() {
        let store = seeded_store();

        let created = create_customer(&store, Customer::new("Third").with_id(1));

        assert_eq!(created.id, Some(3));
        assert_eq!(
            get_customer(&store, 1).unwrap().name.as_deref(),
            Some("First customer")
        );
    }

    #[test]
    fn list_returns_all_records() {
        let store = seeded_store();

        let customers = list_customers(&store);

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].id, Some(1));
        assert_eq!(customers[1].id, Some(2));
    }

    #[test]
    fn get_unknown_is_not_found() {
        let store = seeded_store();

        assert!(matches!(
            get_customer(&store, 42),
            Err(ServiceError::NotFound(42))
        ));
    }

    #[test]
    fn replace_forces_path_id() {
        let store = seeded_store();

        let replaced = replace_customer(&store, 2, Customer::new("Replaced").with_id(9)).unwrap();

        assert_eq!(replaced.id, Some(2));
        assert_eq!(get_customer(&store, 2).unwrap(), Customer::new("Replaced").with_id(2));
        assert!(get_customer(&store, 9).is_err());
    }

    #[test]
    fn replace_unknown_is_not_found_and_does_not_insert() {
        let store = seeded_store();

        let result = replace_customer(&store, 5, Customer::new("Ghost"));

        assert!(matches!(result, Err(ServiceError::NotFound(5))));
        assert_eq!(list_customers(&store).len(), 2);
    }

    #[test]
    fn delete_removes_record() {
        let store = seeded_store();

        delete_customer(&store, 1).unwrap();

        assert!(matches!(
            get_customer(&store, 1),
            Err(ServiceError::NotFound(1))
        ));
        assert!(matches!(
            delete_customer(&store, 1),
            Err(ServiceError::NotFound(1))
        ));
    }
}

#[cfg(test)]
mod test_patch_customer {
    use super::*;

    #[test]
    fn partial_name_keeps_phone_numbers() {
        let store = seeded_store();

        let patched = patch_customer(&store, 2, &partial(r#"{"name":"X"}"#)).unwrap();

        assert_eq!(patched.name.as_deref(), Some("X"));
        assert_eq!(
            patched.phone_numbers,
            Some(vec!["01234".to_string(), "56789".to_string()])
        );
        assert_eq!(get_customer(&store, 2).unwrap(), patched);
    }

    #[test]
    fn replace_operation_sets_name() {
        let store = seeded_store();

        let patched = patch_customer(
            &store,
            2,
            &operations(r#"[{"op":"replace","path":"/name","value":"Y"}]"#),
        )
        .unwrap();

        assert_eq!(patched.name.as_deref(), Some("Y"));
        assert_eq!(patched.phone_numbers.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn failed_test_operation_leaves_store_untouched() {
        let store = seeded_store();
        let before = get_customer(&store, 2).unwrap();

        let result = patch_customer(
            &store,
            2,
            &operations(
                r#"[{"op":"replace","path":"/phoneNumbers","value":[]},
                    {"op":"test","path":"/name","value":"wrong"}]"#,
            ),
        );

        assert!(matches!(
            result,
            Err(ServiceError::PatchFailed(PatchError::Operation(_)))
        ));
        assert_eq!(get_customer(&store, 2).unwrap(), before);
    }

    #[test]
    fn unknown_id_wins_over_malformed_body() {
        let store = seeded_store();

        let result = patch_customer(&store, 99, &partial("{not json"));

        assert!(matches!(result, Err(ServiceError::NotFound(99))));
    }

    #[test]
    fn malformed_body_is_invalid_body() {
        let store = seeded_store();

        let result = patch_customer(&store, 1, &operations(r#"{"op":"replace"}"#));

        assert!(matches!(result, Err(ServiceError::InvalidBody(_))));
    }

    #[test]
    fn patch_cannot_change_id() {
        let store = seeded_store();

        let by_merge = patch_customer(&store, 1, &partial(r#"{"id": 50, "name": "Moved"}"#)).unwrap();
        let by_ops = patch_customer(
            &store,
            2,
            &operations(r#"[{"op":"replace","path":"/id","value":60}]"#),
        )
        .unwrap();

        assert_eq!(by_merge.id, Some(1));
        assert_eq!(by_ops.id, Some(2));
        assert_eq!(get_customer(&store, 1).unwrap().name.as_deref(), Some("Moved"));
        assert!(get_customer(&store, 50).is_err());
        assert!(get_customer(&store, 60).is_err());
    }

    #[test]
    fn null_id_in_partial_is_reasserted() {
        let store = seeded_store();

        let patched = patch_customer(&store, 1, &partial(r#"{"id": null}"#)).unwrap();

        assert_eq!(patched.id, Some(1));
    }

    #[test]
    fn partial_patch_twice_is_idempotent() {
        let store = seeded_store();
        let request = partial(r#"{"phoneNumbers":["999"]}"#);

        let first = patch_customer(&store, 2, &request).unwrap();
        let second = patch_customer(&store, 2, &request).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.phone_numbers, Some(vec!["999".to_string()]));
    }

    #[test]
    fn type_mismatch_is_patch_failure() {
        let store = seeded_store();

        let result = patch_customer(&store, 2, &partial(r#"{"phoneNumbers":"999"}"#));

        assert!(matches!(
            result,
            Err(ServiceError::PatchFailed(PatchError::Merge(_)))
        ));
    }
}
