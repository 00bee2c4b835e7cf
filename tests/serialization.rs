use bloodlink_web::types::*;
use serde_json::{self as json, Value};

fn parse(json_str: &str) -> Value {
    json::from_str(json_str).expect("valid json")
}

// The backend speaks camelCase; every wire type renames its fields on
// the way out and tolerates missing optionals on the way in.

#[test]
fn user_roundtrip_uses_camel_case() {
    let user = User {
        id: "u-1".to_string(),
        name: "Ana Pop".to_string(),
        email: "ana@example.com".to_string(),
        role: "user".to_string(),
        blood_type: Some("O+".to_string()),
        phone: Some("0721234567".to_string()),
        city: Some("Cluj".to_string()),
        created_at: None,
    };

    let s = json::to_string(&user).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["bloodType"], "O+");
    assert_eq!(v["name"], "Ana Pop");
    assert!(v.get("blood_type").is_none());

    let back: User = json::from_str(&s).expect("deserialize");
    assert_eq!(back, user);
}

#[test]
fn user_tolerates_missing_donor_fields() {
    let back: User = json::from_str(
        r#"{"id":"u-2","name":"Ion","email":"ion@example.com"}"#,
    )
    .expect("deserialize");

    assert_eq!(back.role, "");
    assert!(back.blood_type.is_none());
    assert!(!back.is_admin());
}

#[test]
fn admin_role_is_detected() {
    let back: User = json::from_str(
        r#"{"id":"u-3","name":"Admin","email":"admin@example.com","role":"admin"}"#,
    )
    .expect("deserialize");

    assert!(back.is_admin());
}

#[test]
fn market_post_defaults_to_no_matches() {
    let back: MarketPost = json::from_str(
        r#"{
            "id": "p-1",
            "authorId": "u-1",
            "kind": "request",
            "bloodType": "AB-",
            "city": "Iasi",
            "status": "open"
        }"#,
    )
    .expect("deserialize");

    assert!(back.matches.is_empty());
    assert_eq!(back.kind, "request");
}

#[test]
fn market_post_carries_server_computed_matches() {
    let back: MarketPost = json::from_str(
        r#"{
            "id": "p-2",
            "authorId": "u-1",
            "kind": "offer",
            "bloodType": "O-",
            "city": "Cluj",
            "status": "open",
            "matches": [
                {"postId": "p-9", "kind": "request", "bloodType": "O-", "city": "Cluj", "contact": "0722000000"}
            ]
        }"#,
    )
    .expect("deserialize");

    assert_eq!(back.matches.len(), 1);
    assert_eq!(back.matches[0].post_id, "p-9");
    assert_eq!(back.matches[0].contact.as_deref(), Some("0722000000"));
}

#[test]
fn eligibility_null_next_date_deserializes() {
    let back: Eligibility = json::from_str(
        r#"{"canDonate": true, "lastDonationDate": null, "nextDonationDate": null}"#,
    )
    .expect("deserialize");

    assert!(back.can_donate);
    assert!(back.next_donation_date.is_none());
}

#[test]
fn eligibility_dates_parse_as_plain_dates() {
    let back: Eligibility = json::from_str(
        r#"{"canDonate": false, "lastDonationDate": "2026-01-10", "nextDonationDate": "2026-04-10"}"#,
    )
    .expect("deserialize");

    assert!(!back.can_donate);
    assert_eq!(
        back.next_donation_date.expect("date").to_string(),
        "2026-04-10"
    );
}

#[test]
fn donation_roundtrip_keeps_status_string() {
    let back: Donation = json::from_str(
        r#"{
            "id": "d-1",
            "userId": "u-1",
            "userName": "Ana Pop",
            "hospitalName": "County Hospital",
            "date": "2026-02-14",
            "status": "pending"
        }"#,
    )
    .expect("deserialize");

    assert_eq!(back.status, "pending");

    let s = json::to_string(&back).expect("serialize");
    let v = parse(&s);
    assert_eq!(v["userId"], "u-1");
    assert_eq!(v["hospitalName"], "County Hospital");
}

#[test]
fn auth_response_carries_token_and_user() {
    let back: AuthResponse = json::from_str(
        r#"{
            "token": "session-token-123",
            "user": {"id": "u-1", "name": "Ana Pop", "email": "ana@example.com", "role": "user"}
        }"#,
    )
    .expect("deserialize");

    assert_eq!(back.token, "session-token-123");
    assert_eq!(back.user.name, "Ana Pop");
}

#[test]
fn login_request_renames_id_token() {
    let s = json::to_string(&LoginRequest {
        id_token: "provider-token".to_string(),
    })
    .expect("serialize");

    assert_eq!(parse(&s)["idToken"], "provider-token");
}

#[test]
fn profile_update_serializes_donor_fields() {
    let s = json::to_string(&UpdateProfileRequest {
        name: "Ana Pop".to_string(),
        blood_type: "O+".to_string(),
        phone: "0721234567".to_string(),
        city: "Cluj".to_string(),
    })
    .expect("serialize");

    let v = parse(&s);
    assert_eq!(v["bloodType"], "O+");
    assert_eq!(v["city"], "Cluj");
}

#[test]
fn subscriber_tolerates_missing_timestamp() {
    let back: Subscriber = json::from_str(r#"{"id": "s-1", "email": "ana@example.com"}"#)
        .expect("deserialize");

    assert!(back.subscribed_at.is_none());
}
