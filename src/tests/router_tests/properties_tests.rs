use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn group_director_sees_every_property() {
    let db = init_test_db();

    let resp = handle(get("/properties"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    for id in ["PROP001", "PROP002", "PROP003", "PROP004"] {
        assert!(body.contains(id), "Expected {id} in properties table");
    }
}

#[test]
fn administrator_sees_no_properties() {
    let db = init_test_db();

    let resp = handle(get("/properties?access_level=Administrator"), &db).unwrap();
    let body = body_string(resp);

    assert!(!body.contains("PROP001"));
    assert!(body.contains("No properties found matching your search or access level."));
}

#[test]
fn estate_manager_is_scoped_to_the_riverview_cluster() {
    let db = init_test_db();

    let resp = handle(get("/properties?access_level=Estate%20Manager"), &db).unwrap();
    let body = body_string(resp);

    assert!(body.contains("PROP001"));
    assert!(body.contains("PROP003"));
    assert!(!body.contains("PROP002"));
    assert!(!body.contains("PROP004"));
}

#[test]
fn unrecognized_access_level_is_denied() {
    let db = init_test_db();

    let resp = handle(get("/properties?access_level=Janitor"), &db).unwrap();
    let body = body_string(resp);

    assert!(!body.contains("PROP001"));
    assert!(body.contains("No properties found matching your search or access level."));
}

#[test]
fn property_search_is_case_insensitive() {
    let db = init_test_db();

    // "john" hits John Doe (PROP001) and Alice Johnson (PROP002).
    let lower = body_string(handle(get("/properties?search=john"), &db).unwrap());
    assert!(lower.contains("PROP001"));
    assert!(lower.contains("PROP002"));
    assert!(!lower.contains("PROP003"));

    let upper = body_string(handle(get("/properties?search=JOHN"), &db).unwrap());
    assert!(upper.contains("PROP001"));
    assert!(upper.contains("PROP002"));
    assert!(!upper.contains("PROP003"));
}

#[test]
fn search_composes_with_the_role_filter() {
    let db = init_test_db();

    // Estate Manager can see PROP001 and PROP003; the search narrows to PROP003.
    let resp = handle(
        get("/properties?access_level=Estate%20Manager&search=bob"),
        &db,
    )
    .unwrap();
    let body = body_string(resp);

    assert!(body.contains("PROP003"));
    assert!(!body.contains("PROP001"));
}
