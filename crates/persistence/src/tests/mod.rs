// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod projection_tests;
mod store_tests;

use std::sync::{Arc, Mutex};

use kisan_domain::{
    CropListing, Dispute, DisputeStatus, Grade, InventoryItem, ListingStatus, Message, NewUser,
    Offer, OfferStatus, Order, OrderStatus, Payout, PayoutStatus, Rfq, RfqStatus, RoutePlan,
    RouteStop, TransportBid, TransportBidStatus, TransportMode, TransportRequest,
    TransportRequestStatus, TransportVehicle, User, UserRole,
};

use crate::{
    Collection, Filter, MarketplaceGateway, PersistenceError, Row, Select, SqliteStore, Store,
};

/// Installs a test-writer subscriber so gateway logs show up in failing
/// test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .try_init();
}

pub fn create_test_gateway() -> MarketplaceGateway {
    init_tracing();
    MarketplaceGateway::with_store(SqliteStore::new_in_memory().unwrap())
}

pub fn create_test_listing(id: &str, created_at: &str) -> CropListing {
    CropListing {
        id: id.to_string(),
        farmer_id: String::from("farmer-1"),
        farmer_name: String::from("Ramesh Patil"),
        crop_name: String::from("Onion"),
        variety: Some(String::from("Nashik Red")),
        grade: Grade::A,
        quantity: 1000.0,
        quantity_unit: None,
        available_quantity: 800.0,
        price_per_kg: 18.5,
        price_unit: None,
        description: String::from("Sorted red onion, sun dried"),
        image_urls: vec![String::from("https://img.example/onion-1.jpg")],
        video_url: Some(String::from("https://img.example/onion.mp4")),
        video_duration_sec: Some(42.0),
        video_size_bytes: None,
        video_type: None,
        video_thumbnail: None,
        location: String::from("Nashik, Maharashtra"),
        status: ListingStatus::Active,
        harvest_date: Some(String::from("2026-02-10")),
        created_at: created_at.to_string(),
        storage_type: None,
        certification: Some(vec![String::from("organic")]),
        min_order_quantity: Some(100.0),
        min_order_quantity_unit: None,
        available_date: None,
        packaging_details: None,
        moisture_content: Some(12.5),
    }
}

pub fn create_test_offer(id: &str, created_at: &str) -> Offer {
    Offer {
        id: id.to_string(),
        listing_id: String::from("listing-1"),
        crop_name: String::from("Onion"),
        buyer_name: String::from("Anita Traders"),
        buyer_business: Some(String::from("Anita Traders Pvt Ltd")),
        buyer_location: String::from("Indore"),
        offered_price: 17.0,
        quantity_requested: 500.0,
        status: OfferStatus::Pending,
        counter_price: None,
        counter_quantity: None,
        last_action_by: None,
        history: None,
        price_per_kg: Some(18.5),
        quantity: Some(1000.0),
        total_amount: Some(8500.0),
        created_at: created_at.to_string(),
    }
}

pub fn create_test_order(id: &str, date: &str) -> Order {
    Order {
        id: id.to_string(),
        listing_id: String::from("listing-1"),
        crop_name: String::from("Onion"),
        quantity: 500.0,
        total_amount: 8500.0,
        status: OrderStatus::Confirmed,
        date: date.to_string(),
        farmer_name: String::from("Ramesh Patil"),
        farmer_location: String::from("Nashik"),
        buyer_name: String::from("Anita Traders"),
        buyer_location: String::from("Indore"),
        transporter_id: None,
        distance_km: Some(410.0),
    }
}

pub fn create_test_message(id: &str, timestamp: &str) -> Message {
    Message {
        id: id.to_string(),
        from_user_id: String::from("buyer-1"),
        to_user_id: String::from("farmer-1"),
        listing_id: Some(String::from("listing-1")),
        order_id: None,
        text: String::from("Is the lot still available?"),
        timestamp: timestamp.to_string(),
        read: false,
    }
}

pub fn create_test_dispute(id: &str, created_at: &str) -> Dispute {
    Dispute {
        id: id.to_string(),
        order_id: String::from("order-1"),
        raised_by: String::from("Anita Traders"),
        role: Some(UserRole::Buyer),
        issue: String::from("Short delivery"),
        details: Some(String::from("Received 450 kg of 500 kg")),
        amount: Some(850.0),
        status: DisputeStatus::Open,
        created_at: created_at.to_string(),
    }
}

pub fn create_test_new_user(id: &str, phone: &str) -> NewUser {
    NewUser {
        user: User::new(id, phone, "2026-01-20T06:00:00Z"),
        password: Some(String::from("correct horse battery")),
        confirm_password: Some(String::from("correct horse battery")),
    }
}

pub fn create_test_inventory_item(id: &str) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        listing_id: String::from("listing-1"),
        batch_id: String::from("batch-7"),
        grade: Grade::B,
        quantity_kg: 250.0,
        storage_location: Some(String::from("Cold store 2")),
        expiry_date: None,
        created_at: String::from("2026-02-21T10:00:00Z"),
    }
}

pub fn create_test_payout(id: &str) -> Payout {
    Payout {
        id: id.to_string(),
        user_id: String::from("farmer-1"),
        listing_id: Some(String::from("listing-1")),
        order_id: Some(String::from("order-1")),
        amount: 8500.0,
        status: PayoutStatus::Pending,
        created_at: String::from("2026-03-02T12:00:00Z"),
    }
}

pub fn create_test_rfq(id: &str) -> Rfq {
    Rfq {
        id: id.to_string(),
        buyer_id: String::from("buyer-1"),
        crop_name: String::from("Tomato"),
        quantity_kg: 2000.0,
        target_price_per_kg: 11.0,
        status: RfqStatus::Open,
        created_at: String::from("2026-03-03T08:00:00Z"),
    }
}

pub fn create_test_route_plan(id: &str) -> RoutePlan {
    RoutePlan {
        id: id.to_string(),
        transporter_id: String::from("transporter-1"),
        order_id: String::from("order-1"),
        stops: vec![
            RouteStop {
                name: String::from("Nashik APMC"),
                eta: String::from("2026-03-04T06:00:00Z"),
            },
            RouteStop {
                name: String::from("Indore Mandi"),
                eta: String::from("2026-03-04T18:00:00Z"),
            },
        ],
        created_at: String::from("2026-03-03T20:00:00Z"),
    }
}

pub fn create_test_transport_request(id: &str) -> TransportRequest {
    TransportRequest {
        id: id.to_string(),
        order_id: String::from("order-1"),
        buyer_id: String::from("buyer-1"),
        farmer_id: String::from("farmer-1"),
        pickup_location: String::from("Nashik"),
        drop_location: String::from("Indore"),
        weight_kg: 500.0,
        vehicle_type: TransportVehicle::MiniTruck,
        mode: TransportMode::Marketplace,
        status: TransportRequestStatus::Open,
        estimated_fare: 6200.0,
        final_fare: None,
        transporter_id: None,
        delivery_otp: None,
        created_at: String::from("2026-03-02T09:00:00Z"),
    }
}

pub fn create_test_transport_bid(id: &str) -> TransportBid {
    TransportBid {
        id: id.to_string(),
        request_id: String::from("request-1"),
        transporter_id: String::from("transporter-1"),
        amount: 5900.0,
        message: Some(String::from("Can pick up tomorrow morning")),
        status: TransportBidStatus::Pending,
        created_at: String::from("2026-03-02T11:00:00Z"),
    }
}

/// Builds a row from a JSON object literal.
pub fn row(value: serde_json::Value) -> Row {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// A store that rejects every request.
pub struct FailingStore;

impl FailingStore {
    fn error() -> PersistenceError {
        PersistenceError::QueryFailed(String::from("store rejected the request"))
    }
}

impl Store for FailingStore {
    fn select(&self, _query: &Select) -> Result<Vec<Row>, PersistenceError> {
        Err(Self::error())
    }

    fn insert(&self, _collection: Collection, _row: Row) -> Result<Row, PersistenceError> {
        Err(Self::error())
    }

    fn update(
        &self,
        _collection: Collection,
        _filters: &[Filter],
        _patch: Row,
    ) -> Result<Vec<Row>, PersistenceError> {
        Err(Self::error())
    }

    fn delete(
        &self,
        _collection: Collection,
        _filters: &[Filter],
    ) -> Result<usize, PersistenceError> {
        Err(Self::error())
    }
}

/// A write as it reached the store.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedWrite {
    Insert(Collection, Row),
    Update(Collection, Vec<Filter>, Row),
}

/// Wraps an in-memory store and records every write it receives.
pub struct RecordingStore {
    inner: SqliteStore,
    writes: Arc<Mutex<Vec<RecordedWrite>>>,
}

impl RecordingStore {
    pub fn new() -> (Self, Arc<Mutex<Vec<RecordedWrite>>>) {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let store = Self {
            inner: SqliteStore::new_in_memory().unwrap(),
            writes: Arc::clone(&writes),
        };
        (store, writes)
    }
}

impl Store for RecordingStore {
    fn select(&self, query: &Select) -> Result<Vec<Row>, PersistenceError> {
        self.inner.select(query)
    }

    fn insert(&self, collection: Collection, row: Row) -> Result<Row, PersistenceError> {
        self.writes
            .lock()
            .unwrap()
            .push(RecordedWrite::Insert(collection, row.clone()));
        self.inner.insert(collection, row)
    }

    fn update(
        &self,
        collection: Collection,
        filters: &[Filter],
        patch: Row,
    ) -> Result<Vec<Row>, PersistenceError> {
        self.writes.lock().unwrap().push(RecordedWrite::Update(
            collection,
            filters.to_vec(),
            patch.clone(),
        ));
        self.inner.update(collection, filters, patch)
    }

    fn delete(
        &self,
        collection: Collection,
        filters: &[Filter],
    ) -> Result<usize, PersistenceError> {
        self.inner.delete(collection, filters)
    }
}

/// Creates a gateway over a recording store and returns the write log.
pub fn create_recording_gateway() -> (MarketplaceGateway, Arc<Mutex<Vec<RecordedWrite>>>) {
    init_tracing();
    let (store, writes) = RecordingStore::new();
    (MarketplaceGateway::with_store(store), writes)
}
