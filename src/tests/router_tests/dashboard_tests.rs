use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, post_form};

#[test]
fn dashboard_renders_every_section() {
    let db = init_test_db();

    let resp = handle(get("/dashboard"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("User Approval"));
    assert!(body.contains("Fee Assignment"));
    assert!(body.contains("Complaints by Category"));
    assert!(body.contains("Latest News"));
}

#[test]
fn pending_requests_appear_in_the_approval_queue() {
    let db = init_test_db();

    let body = body_string(handle(get("/dashboard"), &db).unwrap());
    assert!(body.contains("Jane Smith"));
    assert!(body.contains("jane@example.com"));
}

#[test]
fn complaint_stats_cover_all_categories() {
    let db = init_test_db();

    let body = body_string(handle(get("/dashboard"), &db).unwrap());
    assert!(body.contains("Maintenance Issues"));
    assert!(body.contains("Environmental Issues"));
}

#[test]
fn latest_news_shows_the_three_newest_items() {
    let db = init_test_db();

    let body = body_string(handle(get("/dashboard"), &db).unwrap());
    assert!(body.contains("New Staff Introduction"));
    assert!(body.contains("Maintenance Notice"));
    assert!(body.contains("Holiday Schedule"));
    assert!(!body.contains("Annual General Meeting"));
}

#[test]
fn assigning_a_fee_places_the_renter() {
    let db = init_test_db();

    let resp = handle(
        post_form(
            "/properties/fee",
            &[
                ("property_id", "PROP002"),
                ("renter", "Dewi Lestari"),
                ("fee", "1300"),
            ],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/dashboard");

    let dashboard = body_string(handle(get("/dashboard"), &db).unwrap());
    assert!(dashboard.contains("Dewi Lestari"));
    assert!(dashboard.contains("$1300"));

    // The property is occupied now that it carries a renter.
    let row = body_string(handle(get("/properties?search=dewi"), &db).unwrap());
    assert!(row.contains("PROP002"));
    assert!(row.contains("Occupied"));
}

#[test]
fn fee_adjustment_keeps_the_current_renter() {
    let db = init_test_db();

    handle(post_form("/properties/PROP001/fee", &[("fee", "1050")]), &db).unwrap();

    let dashboard = body_string(handle(get("/dashboard"), &db).unwrap());
    assert!(dashboard.contains("$1050"));

    // The renter still matches a property search, so the field was not cleared.
    let row = body_string(handle(get("/properties?search=jane"), &db).unwrap());
    assert!(row.contains("PROP001"));
}

#[test]
fn fee_for_an_unknown_property_is_not_found() {
    let db = init_test_db();

    let result = handle(
        post_form(
            "/properties/fee",
            &[("property_id", "PROP999"), ("renter", "Nobody"), ("fee", "100")],
        ),
        &db,
    );
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn home_and_access_levels_pages_render() {
    let db = init_test_db();

    let home = handle(get("/"), &db).unwrap();
    assert_eq!(home.status(), 200);

    let grants = body_string(handle(get("/access-levels"), &db).unwrap());
    assert!(grants.contains("Group Director"));
    assert!(grants.contains("Estate Manager"));
}

#[test]
fn unknown_routes_are_not_found() {
    let db = init_test_db();

    let result = handle(get("/no/such/page"), &db);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn non_numeric_fee_is_rejected() {
    let db = init_test_db();

    let result = handle(
        post_form("/properties/PROP001/fee", &[("fee", "a lot")]),
        &db,
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}
