// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! What actually reaches the store on each write.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use kisan_domain::{FarmerProfile, UserProfile};

use super::{
    RecordedWrite, create_recording_gateway, create_test_listing, create_test_new_user,
    create_test_offer, create_test_order, create_test_payout, create_test_transport_bid,
};
use crate::{
    Collection, Filter, LISTING_FIELDS, OFFER_FIELDS, ORDER_FIELDS, PAYOUT_FIELDS, Row,
    USER_SECRET_FIELDS,
};

fn keys(row: &Row) -> BTreeSet<&str> {
    row.keys().map(String::as_str).collect()
}

fn allowed(fields: &[&'static str]) -> BTreeSet<&'static str> {
    fields.iter().copied().collect()
}

fn last_write(writes: &Arc<Mutex<Vec<RecordedWrite>>>) -> RecordedWrite {
    writes.lock().unwrap().last().cloned().unwrap()
}

fn last_insert(writes: &Arc<Mutex<Vec<RecordedWrite>>>, expected: Collection) -> Row {
    match last_write(writes) {
        RecordedWrite::Insert(collection, row) => {
            assert_eq!(collection, expected);
            row
        }
        other => panic!("expected an insert into {expected}, got {other:?}"),
    }
}

#[test]
fn test_add_user_never_forwards_credentials() {
    let (gateway, writes) = create_recording_gateway();

    let user = gateway
        .add_user(&create_test_new_user("user-1", "9812345670"))
        .unwrap();

    let sent = last_insert(&writes, Collection::Users);
    for field in USER_SECRET_FIELDS {
        assert!(!sent.contains_key(*field), "{field} must not be stored");
    }
    assert_eq!(sent["phone"], "9812345670");
    assert_eq!(user.phone, "9812345670");
}

#[test]
fn test_update_user_profile_patches_role_and_profile() {
    let (gateway, writes) = create_recording_gateway();
    let mut new_user = create_test_new_user("user-2", "9812345671");
    new_user
        .user
        .set_profile(UserProfile::Farmer(FarmerProfile::default()))
        .unwrap();
    gateway.add_user(&new_user).unwrap();

    let profile = UserProfile::Farmer(FarmerProfile {
        full_name: String::from("Ramesh Patil"),
        village: String::from("Pimpalgaon"),
        district: String::from("Nashik"),
        state: String::from("Maharashtra"),
        language: String::from("Marathi"),
        ..FarmerProfile::default()
    });
    gateway.update_user_profile("user-2", &profile).unwrap();

    match last_write(&writes) {
        RecordedWrite::Update(collection, filters, patch) => {
            assert_eq!(collection, Collection::Users);
            assert_eq!(filters, vec![Filter::eq("id", "user-2")]);
            assert_eq!(keys(&patch), BTreeSet::from(["profile", "role"]));
            assert_eq!(patch["role"], "farmer");
            assert_eq!(patch["profile"]["village"], "Pimpalgaon");
        }
        other => panic!("expected a user update, got {other:?}"),
    }
}

#[test]
fn test_add_listing_sends_only_allow_listed_fields() {
    let (gateway, writes) = create_recording_gateway();

    gateway
        .add_listing(&create_test_listing("listing-1", "2026-02-20T07:00:00Z"))
        .unwrap();

    let sent = last_insert(&writes, Collection::Listings);
    assert_eq!(keys(&sent), allowed(LISTING_FIELDS));
    for dropped in ["variety", "videoUrl", "certification", "moistureContent"] {
        assert!(!sent.contains_key(dropped), "{dropped} must not be stored");
    }
}

#[test]
fn test_add_listing_omits_absent_allow_listed_fields() {
    let (gateway, writes) = create_recording_gateway();
    let mut listing = create_test_listing("listing-2", "2026-02-20T07:00:00Z");
    listing.harvest_date = None;

    let stored = gateway.add_listing(&listing).unwrap();

    let sent = last_insert(&writes, Collection::Listings);
    assert!(!sent.contains_key("harvestDate"));
    assert!(keys(&sent).is_subset(&allowed(LISTING_FIELDS)));
    assert_eq!(stored.harvest_date, None);
}

#[test]
fn test_update_listing_sends_only_allow_listed_fields() {
    let (gateway, writes) = create_recording_gateway();
    let mut listing = create_test_listing("listing-3", "2026-02-20T07:00:00Z");
    gateway.add_listing(&listing).unwrap();

    listing.price_per_kg = 21.0;
    listing.packaging_details = Some(String::from("50 kg jute bags"));
    let updated = gateway.update_listing(&listing).unwrap();

    match last_write(&writes) {
        RecordedWrite::Update(collection, filters, patch) => {
            assert_eq!(collection, Collection::Listings);
            assert_eq!(filters, vec![Filter::eq("id", "listing-3")]);
            assert_eq!(keys(&patch), allowed(LISTING_FIELDS));
            assert_eq!(patch["pricePerKg"], 21.0);
        }
        other => panic!("expected a listing update, got {other:?}"),
    }
    assert!((updated.price_per_kg - 21.0).abs() < f64::EPSILON);
    assert_eq!(updated.packaging_details, None);
}

#[test]
fn test_place_offer_drops_negotiation_fields() {
    let (gateway, writes) = create_recording_gateway();
    let mut offer = create_test_offer("offer-1", "2026-03-01T09:00:00Z");
    offer.counter_price = Some(18.0);

    let placed = gateway.place_offer(&offer).unwrap();

    let sent = last_insert(&writes, Collection::Offers);
    assert_eq!(keys(&sent), allowed(OFFER_FIELDS));
    assert!(!sent.contains_key("buyerBusiness"));
    assert_eq!(placed.counter_price, None);
    assert_eq!(placed.buyer_business, None);
}

#[test]
fn test_create_order_sends_only_allow_listed_fields() {
    let (gateway, writes) = create_recording_gateway();

    gateway
        .create_order(&create_test_order("order-1", "2026-03-01"))
        .unwrap();

    let sent = last_insert(&writes, Collection::Orders);
    assert!(keys(&sent).is_subset(&allowed(ORDER_FIELDS)));
    assert!(!sent.contains_key("transporterId"));
    assert_eq!(sent["distanceKm"], 410.0);
}

#[test]
fn test_add_payout_sends_only_allow_listed_fields() {
    let (gateway, writes) = create_recording_gateway();

    gateway.add_payout(&create_test_payout("payout-1")).unwrap();

    let sent = last_insert(&writes, Collection::Payouts);
    assert_eq!(keys(&sent), allowed(PAYOUT_FIELDS));
}

#[test]
fn test_passthrough_collections_store_every_field() {
    let (gateway, writes) = create_recording_gateway();
    let bid = create_test_transport_bid("bid-1");

    gateway.add_transport_bid(&bid).unwrap();

    let sent = last_insert(&writes, Collection::TransportBids);
    assert_eq!(
        keys(&sent),
        BTreeSet::from([
            "id",
            "requestId",
            "transporterId",
            "amount",
            "message",
            "status",
            "createdAt",
        ])
    );
}
