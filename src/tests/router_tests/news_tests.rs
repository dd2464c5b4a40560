use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, post_form};

#[test]
fn news_page_lists_seed_items() {
    let db = init_test_db();

    let resp = handle(get("/news"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Annual General Meeting"));
    assert!(body.contains("Community Cleanup Day"));
    assert!(body.contains("New Staff Introduction"));
}

#[test]
fn level_filter_keeps_only_cluster_items() {
    let db = init_test_db();

    let resp = handle(get("/news?level=Cluster%20Level"), &db).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Community Cleanup Day"));
    assert!(body.contains("Maintenance Notice"));
    assert!(!body.contains("Annual General Meeting"));
    assert!(!body.contains("Holiday Schedule"));
}

#[test]
fn news_search_matches_titles_case_insensitively() {
    let db = init_test_db();

    let resp = handle(get("/news?search=CLEANUP"), &db).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Community Cleanup Day"));
    assert!(!body.contains("Holiday Schedule"));
}

#[test]
fn posted_news_appears_in_the_list() {
    let db = init_test_db();

    let resp = handle(
        post_form(
            "/news",
            &[
                ("title", "Pool Reopening"),
                ("category", "Announcement"),
                ("details", "The pool reopens Monday after resurfacing."),
                ("broadcast_level", "Cluster Level"),
            ],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/news");

    let body = body_string(handle(get("/news"), &db).unwrap());
    assert!(body.contains("Pool Reopening"));
    assert!(body.contains("The pool reopens Monday after resurfacing."));
}

#[test]
fn news_with_unknown_broadcast_level_is_rejected() {
    let db = init_test_db();

    let result = handle(
        post_form(
            "/news",
            &[
                ("title", "Bad level"),
                ("category", "Update"),
                ("details", "irrelevant"),
                ("broadcast_level", "Street Level"),
            ],
        ),
        &db,
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn editing_news_replaces_title_and_details() {
    let db = init_test_db();

    let resp = handle(
        post_form(
            "/news/1/edit",
            &[
                ("title", "AGM Rescheduled"),
                ("category", "Event"),
                ("details", "The meeting moves to July 22nd, same time and room."),
                ("broadcast_level", "Group Level"),
            ],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_string(handle(get("/news"), &db).unwrap());
    assert!(body.contains("AGM Rescheduled"));
    assert!(body.contains("The meeting moves to July 22nd, same time and room."));
    // Both the old title and the old body text are gone.
    assert!(!body.contains("Annual General Meeting will be held on July 15th"));
}

#[test]
fn editing_a_missing_news_item_is_not_found() {
    let db = init_test_db();

    let result = handle(
        post_form(
            "/news/999/edit",
            &[
                ("title", "Ghost"),
                ("category", "Update"),
                ("details", "nothing here"),
                ("broadcast_level", "Group Level"),
            ],
        ),
        &db,
    );
    assert!(matches!(result, Err(ServerError::NotFound)));
}
