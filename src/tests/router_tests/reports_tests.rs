use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn reports_default_to_january_and_the_first_property() {
    let db = init_test_db();

    let resp = handle(get("/reports"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Monthly Report - January"));
    assert!(body.contains("Per-Property Report - 123 Main St"));
}

#[test]
fn january_totals_are_fully_collected() {
    let db = init_test_db();

    let body = body_string(handle(get("/reports?month=January"), &db).unwrap());
    assert!(body.contains("$3100"));
    assert!(body.contains("Collection Percentage: 100.00%"));
}

#[test]
fn february_shows_the_shortfall() {
    let db = init_test_db();

    let body = body_string(handle(get("/reports?month=February"), &db).unwrap());
    assert!(body.contains("Monthly Report - February"));
    assert!(body.contains("$2950"));
}

#[test]
fn unknown_month_falls_back_to_january() {
    let db = init_test_db();

    let body = body_string(handle(get("/reports?month=Brumaire"), &db).unwrap());
    assert!(body.contains("Monthly Report - January"));
}

#[test]
fn per_property_report_counts_days_past_the_first() {
    let db = init_test_db();

    // PROP001 paid on the 15th of January and the 18th of February.
    let body = body_string(handle(get("/reports?property=PROP001"), &db).unwrap());
    assert!(body.contains("14 days"));
    assert!(body.contains("17 days"));
    assert!(body.contains("(Full)"));
    assert!(body.contains("(Partial)"));
}

#[test]
fn consolidated_reports_resolve_company_and_group() {
    let db = init_test_db();

    let body = body_string(handle(get("/reports"), &db).unwrap());
    assert!(body.contains("Consolidated Report - by Company"));
    assert!(body.contains("Ekadi Trisakti Mas"));
    assert!(body.contains("Consolidated Report - by Group"));
    assert!(body.contains("Ekamas Mandiri Group"));
}

#[test]
fn overall_report_sums_every_payment() {
    let db = init_test_db();

    let body = body_string(handle(get("/reports"), &db).unwrap());
    assert!(body.contains("$6200"));
    assert!(body.contains("$6050"));
    assert!(body.contains("Overall Collection Percentage: 97.58%"));
}

#[test]
fn export_returns_a_spreadsheet_attachment() {
    let db = init_test_db();

    let resp = handle(get("/reports/export?month=January"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers()["Content-Disposition"],
        "attachment; filename=\"monthly_report_January.xlsx\""
    );
}
