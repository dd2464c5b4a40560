use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, post_form};

#[test]
fn complaints_page_lists_seed_complaints() {
    let db = init_test_db();

    let resp = handle(get("/complaints"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Leaking faucet in kitchen"));
    assert!(body.contains("Loud music from apartment 3B"));
    assert!(body.contains("Improper waste disposal"));
}

#[test]
fn category_filter_narrows_to_one_category() {
    let db = init_test_db();

    let resp = handle(get("/complaints?category=Noise%20Complaints"), &db).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Loud music from apartment 3B"));
    assert!(body.contains("solved"));
    assert!(!body.contains("Leaking faucet in kitchen"));
}

#[test]
fn category_filter_composes_with_search() {
    let db = init_test_db();

    let resp = handle(
        get("/complaints?category=Maintenance%20Issues&search=garage"),
        &db,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(!body.contains("Leaking faucet in kitchen"));
}

#[test]
fn submitted_complaint_shows_up_pending() {
    let db = init_test_db();

    let resp = handle(
        post_form(
            "/complaints",
            &[
                ("category", "Parking Problems"),
                ("description", "Blocked driveway on block D"),
            ],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/complaints");

    let body = body_string(handle(get("/complaints"), &db).unwrap());
    assert!(body.contains("Blocked driveway on block D"));
    assert!(body.contains("pending"));
}

#[test]
fn complaint_with_unknown_category_is_rejected() {
    let db = init_test_db();

    let result = handle(
        post_form(
            "/complaints",
            &[("category", "Gossip"), ("description", "whatever")],
        ),
        &db,
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn responding_solves_a_pending_complaint() {
    let db = init_test_db();

    let resp = handle(
        post_form(
            "/admin/complaints/1/respond",
            &[("response", "A plumber has been scheduled for Thursday.")],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_string(handle(get("/admin/complaints"), &db).unwrap());
    assert!(body.contains("A plumber has been scheduled for Thursday."));
}

#[test]
fn solved_complaints_cannot_be_responded_to_again() {
    let db = init_test_db();

    // Complaint 2 is already solved in the seed data.
    let result = handle(
        post_form("/admin/complaints/2/respond", &[("response", "Again?")]),
        &db,
    );
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn stats_endpoint_returns_per_category_counts() {
    let db = init_test_db();

    let resp = handle(get("/api/complaints/stats"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let parsed: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 7);

    let noise = rows
        .iter()
        .find(|r| r["category"] == "Noise Complaints")
        .unwrap();
    assert_eq!(noise["total"], 1);
    assert_eq!(noise["resolved"], 1);
    assert_eq!(noise["outstanding"], 0);
}
