// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SqliteStore` behaviour below the gateway: filters, ordering, merges,
//! deletes and the errors the store reports.

use serde_json::json;

use super::{init_tracing, row};
use crate::{Collection, Filter, Order, PersistenceError, Select, SqliteStore, Store, single};

fn create_test_store() -> SqliteStore {
    init_tracing();
    SqliteStore::new_in_memory().unwrap()
}

fn seed_listings(store: &SqliteStore) {
    for (id, farmer, created_at) in [
        ("l-1", "farmer-1", "2026-02-01T08:00:00Z"),
        ("l-2", "farmer-2", "2026-02-03T08:00:00Z"),
        ("l-3", "farmer-1", "2026-02-02T08:00:00Z"),
    ] {
        store
            .insert(
                Collection::Listings,
                row(json!({ "id": id, "farmerId": farmer, "createdAt": created_at })),
            )
            .unwrap();
    }
}

fn ids(rows: &[crate::Row]) -> Vec<&str> {
    rows.iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect()
}

#[test]
fn test_store_initialization() {
    let result: Result<SqliteStore, PersistenceError> = SqliteStore::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_stores_are_isolated() {
    let store1 = create_test_store();
    let store2 = create_test_store();

    store1
        .insert(Collection::Rfqs, row(json!({ "id": "rfq-1" })))
        .unwrap();

    assert_eq!(store1.select(&Select::all(Collection::Rfqs)).unwrap().len(), 1);
    assert!(store2.select(&Select::all(Collection::Rfqs)).unwrap().is_empty());
}

#[test]
fn test_migrations_create_every_collection() {
    let store = create_test_store();

    for collection in Collection::ALL {
        let result = store.select(&Select::all(*collection));
        assert!(result.is_ok(), "{collection} table must exist: {result:?}");
    }
}

#[test]
fn test_file_store_persists_between_opens() {
    let path = std::env::temp_dir().join(format!("kisan-store-{}.db", uuid::Uuid::new_v4()));

    {
        let store = SqliteStore::new_with_file(&path).unwrap();
        store
            .insert(Collection::Payouts, row(json!({ "id": "p-1", "amount": 10.0 })))
            .unwrap();
    }

    let reopened = SqliteStore::new_with_file(&path).unwrap();
    let rows = reopened.select(&Select::all(Collection::Payouts)).unwrap();
    assert_eq!(ids(&rows), vec!["p-1"]);

    drop(reopened);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}

#[test]
fn test_insert_returns_stored_row() {
    let store = create_test_store();
    let stored = store
        .insert(
            Collection::Messages,
            row(json!({ "id": "m-1", "text": "namaste", "read": false })),
        )
        .unwrap();

    assert_eq!(stored, row(json!({ "id": "m-1", "text": "namaste", "read": false })));
}

#[test]
fn test_insert_generates_missing_id() {
    let store = create_test_store();

    let generated = store
        .insert(Collection::Rfqs, row(json!({ "cropName": "Tomato" })))
        .unwrap();
    let empty = store
        .insert(Collection::Rfqs, row(json!({ "id": "", "cropName": "Okra" })))
        .unwrap();

    let generated_id = generated["id"].as_str().unwrap();
    let empty_id = empty["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated_id).is_ok());
    assert!(uuid::Uuid::parse_str(empty_id).is_ok());
    assert_ne!(generated_id, empty_id);
}

#[test]
fn test_insert_rejects_non_string_id() {
    let store = create_test_store();
    let result = store.insert(Collection::Rfqs, row(json!({ "id": 7 })));
    assert_eq!(result, Err(PersistenceError::InvalidField(String::from("id"))));
}

#[test]
fn test_insert_rejects_duplicate_id() {
    let store = create_test_store();
    store
        .insert(Collection::Orders, row(json!({ "id": "o-1" })))
        .unwrap();

    let result = store.insert(Collection::Orders, row(json!({ "id": "o-1" })));

    assert!(matches!(result, Err(PersistenceError::DuplicateId(_))));
}

#[test]
fn test_select_filters_on_field_equality() {
    let store = create_test_store();
    seed_listings(&store);

    let rows = store
        .select(
            &Select::all(Collection::Listings)
                .eq("farmerId", "farmer-1")
                .order_by(Order::ascending("createdAt")),
        )
        .unwrap();

    assert_eq!(ids(&rows), vec!["l-1", "l-3"]);
}

#[test]
fn test_select_filters_on_numbers_and_booleans() {
    let store = create_test_store();
    store
        .insert(
            Collection::Messages,
            row(json!({ "id": "m-1", "read": true, "priority": 2 })),
        )
        .unwrap();
    store
        .insert(
            Collection::Messages,
            row(json!({ "id": "m-2", "read": false, "priority": 1 })),
        )
        .unwrap();

    let unread = store
        .select(&Select::all(Collection::Messages).eq("read", false))
        .unwrap();
    let urgent = store
        .select(&Select::all(Collection::Messages).eq("priority", 2))
        .unwrap();

    assert_eq!(ids(&unread), vec!["m-2"]);
    assert_eq!(ids(&urgent), vec!["m-1"]);
}

#[test]
fn test_select_orders_descending_with_limit() {
    let store = create_test_store();
    seed_listings(&store);

    let rows = store
        .select(
            &Select::all(Collection::Listings)
                .order_by(Order::descending("createdAt"))
                .limit(2),
        )
        .unwrap();

    assert_eq!(ids(&rows), vec!["l-2", "l-3"]);
}

#[test]
fn test_select_breaks_ties_by_insertion_order() {
    let store = create_test_store();
    for id in ["a", "b", "c"] {
        store
            .insert(
                Collection::Messages,
                row(json!({ "id": id, "timestamp": "2026-03-01T10:00:00Z" })),
            )
            .unwrap();
    }

    let ascending = store
        .select(&Select::all(Collection::Messages).order_by(Order::ascending("timestamp")))
        .unwrap();
    let descending = store
        .select(&Select::all(Collection::Messages).order_by(Order::descending("timestamp")))
        .unwrap();

    assert_eq!(ids(&ascending), vec!["a", "b", "c"]);
    assert_eq!(ids(&descending), vec!["c", "b", "a"]);
}

#[test]
fn test_select_rejects_invalid_field_names() {
    let store = create_test_store();

    let filtered = store.select(&Select::all(Collection::Users).eq("phone') OR 1=1 --", "x"));
    let ordered = store.select(&Select::all(Collection::Users).order_by(Order::ascending("a.b")));

    assert!(matches!(filtered, Err(PersistenceError::InvalidField(_))));
    assert!(matches!(ordered, Err(PersistenceError::InvalidField(_))));
}

#[test]
fn test_update_merges_patch_into_matching_rows() {
    let store = create_test_store();
    store
        .insert(
            Collection::Orders,
            row(json!({ "id": "o-1", "status": "confirmed", "quantity": 500 })),
        )
        .unwrap();

    let updated = store
        .update(
            Collection::Orders,
            &[Filter::eq("id", "o-1")],
            row(json!({ "status": "picked_up", "transporterId": "t-1" })),
        )
        .unwrap();

    let expected = row(json!({
        "id": "o-1",
        "status": "picked_up",
        "quantity": 500,
        "transporterId": "t-1",
    }));
    assert_eq!(updated, vec![expected.clone()]);

    let stored = store.select(&Select::all(Collection::Orders)).unwrap();
    assert_eq!(stored, vec![expected]);
}

#[test]
fn test_update_with_no_match_returns_no_rows() {
    let store = create_test_store();

    let updated = store
        .update(
            Collection::Offers,
            &[Filter::eq("id", "offer-1")],
            row(json!({ "status": "accepted" })),
        )
        .unwrap();

    assert!(updated.is_empty());
    assert!(matches!(
        single(Collection::Offers, updated),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_update_can_rename_id() {
    let store = create_test_store();
    store
        .insert(Collection::Rfqs, row(json!({ "id": "draft" })))
        .unwrap();

    store
        .update(
            Collection::Rfqs,
            &[Filter::eq("id", "draft")],
            row(json!({ "id": "rfq-9" })),
        )
        .unwrap();

    let by_new_id = store
        .select(&Select::all(Collection::Rfqs).eq("id", "rfq-9"))
        .unwrap();
    assert_eq!(ids(&by_new_id), vec!["rfq-9"]);
    assert!(store
        .select(&Select::all(Collection::Rfqs).eq("id", "draft"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_unfiltered_writes_are_refused() {
    let store = create_test_store();
    seed_listings(&store);

    let update = store.update(Collection::Listings, &[], row(json!({ "status": "paused" })));
    let delete = store.delete(Collection::Listings, &[]);

    assert_eq!(
        update,
        Err(PersistenceError::UnfilteredWrite(String::from("listings")))
    );
    assert_eq!(
        delete,
        Err(PersistenceError::UnfilteredWrite(String::from("listings")))
    );
    assert_eq!(
        store.select(&Select::all(Collection::Listings)).unwrap().len(),
        3
    );
}

#[test]
fn test_delete_reports_removed_count() {
    let store = create_test_store();
    seed_listings(&store);

    let removed = store
        .delete(Collection::Listings, &[Filter::eq("farmerId", "farmer-1")])
        .unwrap();
    let removed_again = store
        .delete(Collection::Listings, &[Filter::eq("farmerId", "farmer-1")])
        .unwrap();

    assert_eq!(removed, 2);
    assert_eq!(removed_again, 0);
    let remaining = store.select(&Select::all(Collection::Listings)).unwrap();
    assert_eq!(ids(&remaining), vec!["l-2"]);
}

#[test]
fn test_single_rejects_multiple_rows() {
    let store = create_test_store();
    seed_listings(&store);

    let rows = store
        .select(&Select::all(Collection::Listings).eq("farmerId", "farmer-1"))
        .unwrap();

    assert_eq!(
        single(Collection::Listings, rows),
        Err(PersistenceError::MultipleRows {
            collection: String::from("listings"),
            count: 2,
        })
    );
}
