use bazaar_core::*;
use serde_json::{self as json, Value};

// Payload shaped like a real /getListings reply: joined user object plus
// an aggregated photos array.
const LISTINGS_BODY: &str = r#"[
    {
        "listing_id": 12,
        "title": "Road bike",
        "price": 120.0,
        "description": "minor scratches",
        "status": "active",
        "created_at": "2024-06-14 09:30:00",
        "user": {
            "user_id": 3,
            "username": "sam",
            "email": "sam@example.com",
            "profile_picture_url": null
        },
        "photos": [
            {"photo_id": 5, "photo_url": "https://cdn.example.com/a.jpg", "uploaded_at": "2024-06-14 09:31:00"},
            {"photo_id": 6, "photo_url": "https://cdn.example.com/b.jpg", "uploaded_at": null}
        ]
    },
    {
        "listing_id": 13,
        "title": "Lamp",
        "price": 8.5,
        "description": null,
        "status": "active",
        "created_at": "2024-06-15 10:00:00",
        "user": {"user_id": 4, "username": "kim"},
        "photos": []
    }
]"#;

#[test]
fn listings_reply_parses() {
    let listings: Vec<Listing> = json::from_str(LISTINGS_BODY).expect("deserialize");
    assert_eq!(listings.len(), 2);

    let bike = &listings[0];
    assert_eq!(bike.listing_id, 12);
    assert_eq!(bike.title, "Road bike");
    assert_eq!(bike.price, 120.0);
    assert_eq!(bike.user.username, "sam");
    assert_eq!(bike.photos.len(), 2);
    assert_eq!(bike.photos[0].photo_url, "https://cdn.example.com/a.jpg");

    let lamp = &listings[1];
    assert_eq!(lamp.user.email, None);
    assert!(lamp.photos.is_empty());
}

#[test]
fn login_request_uses_wire_field_names() {
    let req = LoginRequest {
        email: "e@x.com".to_string(),
        password: "p".to_string(),
    };
    let v: Value = json::to_value(&req).expect("serialize");
    assert_eq!(v["email"], "e@x.com");
    assert_eq!(v["password"], "p");
    assert_eq!(v.as_object().unwrap().len(), 2);
}

#[test]
fn create_user_request_uses_wire_field_names() {
    let req = CreateUserRequest {
        username: "sam".to_string(),
        email: "sam@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let v: Value = json::to_value(&req).expect("serialize");
    assert_eq!(v["username"], "sam");
    assert_eq!(v["email"], "sam@example.com");
    assert_eq!(v["password"], "hunter2");
}

#[test]
fn create_listing_request_omits_missing_description() {
    let req = CreateListingRequest {
        email: "e@x.com".to_string(),
        password: "p".to_string(),
        title: "Lamp".to_string(),
        price: 8.5,
        description: None,
    };
    let v: Value = json::to_value(&req).expect("serialize");
    assert_eq!(v["title"], "Lamp");
    assert_eq!(v["price"], 8.5);
    assert!(v.get("description").is_none());
}

#[test]
fn update_listing_request_keeps_only_given_fields() {
    let req = UpdateListingRequest {
        listing_id: 12,
        email: "e@x.com".to_string(),
        password: "p".to_string(),
        title: None,
        price: Some(99.99),
        description: None,
    };
    let v: Value = json::to_value(&req).expect("serialize");
    assert_eq!(v["listing_id"], 12);
    assert_eq!(v["price"], 99.99);
    assert!(v.get("title").is_none());
    assert!(v.get("description").is_none());
}

#[test]
fn ack_and_error_replies_parse() {
    let ack: AckResponse =
        json::from_str(r#"{"message": "Listing updated successfully"}"#).expect("ack");
    assert_eq!(ack.message.as_deref(), Some("Listing updated successfully"));

    let err: ErrorResponse =
        json::from_str(r#"{"error": "You do not own this listing"}"#).expect("error");
    assert_eq!(err.error, "You do not own this listing");
}

#[test]
fn session_round_trips_through_json() {
    let session = Session {
        user_id: "42".to_string(),
        email: "e@x.com".to_string(),
        password: "p".to_string(),
    };
    let s = json::to_string(&session).expect("serialize");
    let back: Session = json::from_str(&s).expect("deserialize");
    assert_eq!(back, session);
}
