use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, post_form};

#[test]
fn users_page_lists_seed_accounts() {
    let db = init_test_db();

    let resp = handle(get("/users"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("John Doe"));
    assert!(body.contains("Jane Smith"));
    assert!(body.contains("Alice Johnson"));
    assert!(body.contains("Budi Santoso"));
}

#[test]
fn user_search_matches_roles() {
    let db = init_test_db();

    let body = body_string(handle(get("/users?search=renter"), &db).unwrap());
    assert!(body.contains("Jane Smith"));
    assert!(!body.contains("Alice Johnson"));
    assert!(!body.contains("Budi Santoso"));
}

#[test]
fn approving_a_pending_user() {
    let db = init_test_db();

    let resp = handle(post_form("/users/2/approve", &[]), &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/users");

    // Jane was the only pending request, so the dashboard queue is empty now.
    let dashboard = body_string(handle(get("/dashboard"), &db).unwrap());
    assert!(dashboard.contains("No account requests waiting for approval."));
}

#[test]
fn rejecting_a_pending_user() {
    let db = init_test_db();

    handle(post_form("/users/2/reject", &[]), &db).unwrap();

    let body = body_string(handle(get("/users"), &db).unwrap());
    assert!(body.contains("rejected"));
}

#[test]
fn approving_a_missing_user_is_not_found() {
    let db = init_test_db();

    let result = handle(post_form("/users/999/approve", &[]), &db);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn account_request_starts_out_pending() {
    let db = init_test_db();

    let resp = handle(
        post_form(
            "/users",
            &[
                ("name", "Dewi Lestari"),
                ("role", "Renter"),
                ("email", "dewi@example.com"),
                ("contact_number", "8120001111"),
                ("property_id", "PROP002"),
            ],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/dashboard");

    let dashboard = body_string(handle(get("/dashboard"), &db).unwrap());
    assert!(dashboard.contains("Dewi Lestari"));

    let users = body_string(handle(get("/users"), &db).unwrap());
    assert!(users.contains("dewi@example.com"));
    assert!(users.contains("pending"));
}

#[test]
fn account_request_without_a_name_is_rejected() {
    let db = init_test_db();

    let result = handle(
        post_form(
            "/users",
            &[
                ("name", "   "),
                ("role", "Owner"),
                ("email", "x@example.com"),
                ("contact_number", "123"),
            ],
        ),
        &db,
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn editing_a_user_overwrites_contact_details() {
    let db = init_test_db();

    handle(
        post_form(
            "/users/1/edit",
            &[
                ("name", "John Doe"),
                ("role", "Owner"),
                ("property_id", "PROP001"),
                ("dob", "1980-01-01"),
                ("contact_number", "1112223333"),
                ("email", "john.doe@newmail.example.com"),
            ],
        ),
        &db,
    )
    .unwrap();

    let body = body_string(handle(get("/users"), &db).unwrap());
    assert!(body.contains("john.doe@newmail.example.com"));
    assert!(body.contains("1112223333"));
    assert!(!body.contains("john@example.com"));
}

#[test]
fn editing_a_user_with_a_bad_date_is_rejected() {
    let db = init_test_db();

    let result = handle(
        post_form(
            "/users/1/edit",
            &[
                ("name", "John Doe"),
                ("role", "Owner"),
                ("dob", "not-a-date"),
                ("contact_number", "1234567890"),
                ("email", "john@example.com"),
            ],
        ),
        &db,
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}
