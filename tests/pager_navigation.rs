//! Integration tests for the fetch-then-paginate flow.
//!
//! Covers the pagination state machine over a full-size batch, the field
//! fallback contract, and the error-path messages. No network: batches are
//! decoded from embedded JSON the same way the client decodes a response
//! body.

use serde_json::{json, Value};

use userdeck::api::{decode_user_batch, display_or_default, ApiError};
use userdeck::screens::{FETCH_FAILED_MESSAGE, NO_DATA_MESSAGE};
use userdeck::UserSession;

/// Build a well-formed batch of `n` records, shaped like the live endpoint.
fn batch_of(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                json!({
                    "id": i + 1,
                    "first_name": format!("First{i}"),
                    "last_name": format!("Last{i}"),
                    "username": format!("user{i}"),
                    "email": format!("user{i}@example.com"),
                    "password": format!("secret{i}"),
                    "avatar": format!("https://robohash.org/{i}.png"),
                    // Extra fields the endpoint sends and we ignore
                    "uid": format!("uid-{i}"),
                    "employment": {"title": "Engineer"},
                })
            })
            .collect(),
    )
}

// ============================================================================
// FULL BATCH - HAPPY PATH
// ============================================================================

#[test]
fn full_batch_starts_at_first_record_with_previous_disabled() {
    let users = decode_user_batch(batch_of(80)).unwrap();
    assert_eq!(users.len(), 80);

    let session = UserSession::new(users);
    assert_eq!(session.index(), 0);
    assert!(!session.has_previous());
    assert!(session.has_next());

    let first = session.current().unwrap();
    assert_eq!(first.username.as_deref(), Some("user0"));
}

#[test]
fn last_record_disables_next_and_steps_back_to_previous() {
    let users = decode_user_batch(batch_of(80)).unwrap();
    let mut session = UserSession::new(users);

    while session.step_forward() {}
    assert_eq!(session.index(), 79);
    assert!(!session.has_next());
    assert!(session.has_previous());

    assert!(session.step_backward());
    assert_eq!(session.index(), 78);
}

#[test]
fn step_transitions_are_invertible_across_the_batch() {
    let users = decode_user_batch(batch_of(10)).unwrap();
    let mut session = UserSession::new(users);

    for i in 0..9 {
        assert!(session.step_forward());
        assert_eq!(session.index(), i + 1);
        assert!(session.step_backward());
        assert_eq!(session.index(), i);
        assert!(session.step_forward());
    }
}

#[test]
fn both_directions_enabled_away_from_the_edges() {
    let users = decode_user_batch(batch_of(5)).unwrap();
    let mut session = UserSession::new(users);
    session.step_forward();

    assert!(session.has_previous());
    assert!(session.has_next());
}

// ============================================================================
// FIELD FALLBACK CONTRACT
// ============================================================================

#[test]
fn absent_empty_and_falsy_fields_render_as_na() {
    let users = decode_user_batch(json!([
        {"id": 0, "first_name": "", "avatar": "https://example.com/x.png"},
    ]))
    .unwrap();

    let record = &users[0];
    assert_eq!(record.id_display(), "N/A");
    assert_eq!(display_or_default(record.first_name.as_deref()), "N/A");
    assert_eq!(display_or_default(record.email.as_deref()), "N/A");
    assert_eq!(
        display_or_default(record.avatar.as_deref()),
        "https://example.com/x.png"
    );
}

// ============================================================================
// ERROR PATHS
// ============================================================================

#[test]
fn empty_batch_is_rejected_and_an_empty_session_has_no_data() {
    assert!(matches!(
        decode_user_batch(json!([])),
        Err(ApiError::Shape)
    ));

    // A session can still end up empty via the defensive render guard
    let session = UserSession::new(Vec::new());
    assert!(session.is_empty());
    assert!(session.current().is_none());
    assert_eq!(NO_DATA_MESSAGE, "Oops! No user data available.");
}

#[test]
fn non_array_body_is_rejected_with_the_shape_error() {
    let err = decode_user_batch(json!({"error": "oops"})).unwrap_err();
    assert!(matches!(err, ApiError::Shape));
    assert_eq!(err.to_string(), "Invalid user data received");
}

#[test]
fn every_failure_maps_to_the_same_user_visible_message() {
    assert_eq!(
        FETCH_FAILED_MESSAGE,
        "Failed to load user data. Please check your internet connection."
    );
}
