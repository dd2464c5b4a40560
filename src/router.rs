use crate::db::connection::Database;
use crate::db::{complaints, news, payments, properties, users};
use crate::domain::access::AccessLevel;
use crate::domain::models::{
    ApprovalStatus, BroadcastLevel, Complaint, ComplaintCategory, NewsCategory, NewsItem,
    Property, User,
};
use crate::domain::reports::MONTHS;
use crate::domain::search::{filter_by_exact_field, search_records};
use crate::domain::stats::complaint_breakdown;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, redirect, ResultResp};
use crate::spreadsheets::export_monthly_report_xlsx;
use crate::templates::pages;
use astra::Request;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::io::Read;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => html_response(pages::home_page()),
        ("GET", ["dashboard"]) => dashboard(db),
        ("GET", ["access-levels"]) => html_response(pages::access_levels_page()),

        ("GET", ["properties"]) => properties_view(db, &query),
        ("POST", ["properties", "fee"]) => {
            let form = parse_form(&mut req)?;
            let property_id = require(&form, "property_id")?;
            assign_fee(db, &property_id, &form)
        }
        ("POST", ["properties", id, "fee"]) => {
            let property_id = id.to_string();
            let form = parse_form(&mut req)?;
            assign_fee(db, &property_id, &form)
        }

        ("GET", ["complaints"]) => complaints_view(db, &query, false),
        ("POST", ["complaints"]) => submit_complaint(db, &mut req),
        ("GET", ["admin", "complaints"]) => complaints_view(db, &query, true),
        ("POST", ["admin", "complaints", id, "respond"]) => {
            let id = parse_id(id)?;
            let form = parse_form(&mut req)?;
            let response = require(&form, "response")?;
            complaints::respond_to_complaint(db, id, &response)?;
            redirect("/admin/complaints")
        }
        ("GET", ["api", "complaints", "stats"]) => {
            let all = complaints::list_complaints(db)?;
            json_response(&complaint_breakdown(&all))
        }

        ("GET", ["news"]) => news_view(db, &query),
        ("POST", ["news"]) => post_news(db, &mut req),
        ("POST", ["news", id, "edit"]) => {
            let id = parse_id(id)?;
            edit_news(db, id, &mut req)
        }

        ("GET", ["reports"]) => reports_view(db, &query),
        ("GET", ["reports", "export"]) => reports_export(db, &query),

        ("GET", ["users"]) => users_view(db, &query),
        ("POST", ["users"]) => submit_user_request(db, &mut req),
        ("POST", ["users", id, "approve"]) => {
            users::set_user_status(db, parse_id(id)?, ApprovalStatus::Approved)?;
            redirect("/users")
        }
        ("POST", ["users", id, "reject"]) => {
            users::set_user_status(db, parse_id(id)?, ApprovalStatus::Rejected)?;
            redirect("/users")
        }
        ("POST", ["users", id, "edit"]) => {
            let id = parse_id(id)?;
            edit_user(db, id, &mut req)
        }

        _ => Err(ServerError::NotFound),
    }
}

// ---- page handlers ----

fn dashboard(db: &Database) -> ResultResp {
    let pending = users::pending_users(db)?;
    let all_properties = properties::list_properties(db)?;
    let all_complaints = complaints::list_complaints(db)?;
    let all_news = news::list_news(db)?;

    let vm = pages::dashboard::DashboardVm {
        pending_users: pending.iter().collect(),
        properties: &all_properties,
        complaint_stats: complaint_breakdown(&all_complaints),
        latest_news: all_news.iter().take(3).collect(),
    };
    html_response(pages::dashboard_page(&vm))
}

fn properties_view(db: &Database, query: &HashMap<String, String>) -> ResultResp {
    let all = properties::list_properties(db)?;
    let search_term = query_str(query, "search");
    // The page defaults to the widest role. Anything unrecognized is
    // denied, not let through.
    let access_level = match query.get("access_level") {
        None => Some(AccessLevel::GroupDirector),
        Some(raw) => AccessLevel::parse(raw),
    };

    let visible = crate::domain::access::visible_properties(&all, access_level);
    let found = search_records(visible, search_term, Property::search_fields);

    let vm = pages::properties::PropertiesVm {
        properties: found,
        search_term,
        access_level,
    };
    html_response(pages::properties_page(&vm))
}

fn complaints_view(db: &Database, query: &HashMap<String, String>, admin: bool) -> ResultResp {
    let all = complaints::list_complaints(db)?;
    let search_term = query_str(query, "search");
    let category = query_str(query, "category");

    let by_category = filter_by_exact_field(&all, |c: &Complaint| c.category.to_string(), category);
    let found = search_records(by_category, search_term, Complaint::search_fields);

    if admin {
        let vm = pages::admin_complaints::AdminComplaintsVm {
            complaints: found,
            search_term,
            category,
        };
        html_response(pages::admin_complaints_page(&vm))
    } else {
        let vm = pages::complaints::ComplaintsVm {
            complaints: found,
            search_term,
            category,
        };
        html_response(pages::complaints_page(&vm))
    }
}

fn submit_complaint(db: &Database, req: &mut Request) -> ResultResp {
    let form = parse_form(req)?;
    let category_raw = require(&form, "category")?;
    let category = ComplaintCategory::parse(&category_raw)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown category '{category_raw}'")))?;
    let description = require(&form, "description")?;
    let photo = form.get("photo").map(String::as_str).filter(|s| !s.is_empty());

    complaints::insert_complaint(db, category, &description, photo, Utc::now().date_naive())?;
    redirect("/complaints")
}

fn news_view(db: &Database, query: &HashMap<String, String>) -> ResultResp {
    let all = news::list_news(db)?;
    let search_term = query_str(query, "search");
    let level = query_str(query, "level");

    let by_level =
        filter_by_exact_field(&all, |n: &NewsItem| n.broadcast_level.to_string(), level);
    let found = search_records(by_level, search_term, NewsItem::search_fields);

    let vm = pages::news::NewsVm {
        news: found,
        search_term,
        level,
    };
    html_response(pages::news_page(&vm))
}

fn post_news(db: &Database, req: &mut Request) -> ResultResp {
    let form = parse_form(req)?;
    let (title, category, details, level) = news_fields(&form)?;
    news::insert_news(db, &title, category, &details, Utc::now().date_naive(), level)?;
    redirect("/news")
}

fn edit_news(db: &Database, id: i64, req: &mut Request) -> ResultResp {
    let form = parse_form(req)?;
    let (title, category, details, level) = news_fields(&form)?;
    news::update_news(db, id, &title, category, &details, level)?;
    redirect("/news")
}

fn news_fields(
    form: &HashMap<String, String>,
) -> Result<(String, NewsCategory, String, BroadcastLevel), ServerError> {
    let title = require(form, "title")?;
    let category_raw = require(form, "category")?;
    let category = NewsCategory::parse(&category_raw)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown category '{category_raw}'")))?;
    let details = require(form, "details")?;
    let level_raw = require(form, "broadcast_level")?;
    let level = BroadcastLevel::parse(&level_raw).ok_or_else(|| {
        ServerError::BadRequest(format!("unknown broadcast level '{level_raw}'"))
    })?;
    Ok((title, category, details, level))
}

fn reports_view(db: &Database, query: &HashMap<String, String>) -> ResultResp {
    let all_properties = properties::list_properties(db)?;
    let all_payments = payments::list_payments(db)?;

    let month = match query.get("month") {
        Some(m) if MONTHS.contains(&m.as_str()) => m.clone(),
        _ => MONTHS[0].to_string(),
    };
    let property_id = query
        .get("property")
        .cloned()
        .or_else(|| all_properties.first().map(|p| p.id.clone()))
        .unwrap_or_default();

    let vm = pages::reports::ReportsVm {
        properties: &all_properties,
        payments: &all_payments,
        month: &month,
        property_id: &property_id,
    };
    html_response(pages::reports_page(&vm))
}

fn reports_export(db: &Database, query: &HashMap<String, String>) -> ResultResp {
    let month = match query.get("month") {
        Some(m) if MONTHS.contains(&m.as_str()) => m.clone(),
        _ => MONTHS[0].to_string(),
    };
    let all_properties = properties::list_properties(db)?;
    let monthly: Vec<_> = payments::list_payments(db)?
        .into_iter()
        .filter(|p| p.month == month)
        .collect();
    export_monthly_report_xlsx(&monthly, &all_properties, &month)
}

fn users_view(db: &Database, query: &HashMap<String, String>) -> ResultResp {
    let all = users::list_users(db)?;
    let search_term = query_str(query, "search");
    let found = search_records(&all, search_term, User::search_fields);

    let vm = pages::users::UsersVm {
        users: found,
        search_term,
    };
    html_response(pages::users_page(&vm))
}

fn submit_user_request(db: &Database, req: &mut Request) -> ResultResp {
    let form = parse_form(req)?;
    let name = require(&form, "name")?;
    let role = require(&form, "role")?;
    let email = require(&form, "email")?;
    let contact_number = require(&form, "contact_number")?;
    let property_id = form
        .get("property_id")
        .map(String::as_str)
        .filter(|s| !s.is_empty());
    let dob = parse_optional_date(&form, "dob")?;

    users::insert_user_request(db, &name, &role, property_id, dob, &contact_number, &email)?;
    redirect("/dashboard")
}

fn edit_user(db: &Database, id: i64, req: &mut Request) -> ResultResp {
    let form = parse_form(req)?;
    let name = require(&form, "name")?;
    let role = require(&form, "role")?;
    let email = require(&form, "email")?;
    let contact_number = require(&form, "contact_number")?;
    let property_id = form
        .get("property_id")
        .map(String::as_str)
        .filter(|s| !s.is_empty());
    let dob = parse_optional_date(&form, "dob")?;

    users::update_user(db, id, &name, &role, property_id, dob, &contact_number, &email)?;
    redirect("/users")
}

fn assign_fee(db: &Database, property_id: &str, form: &HashMap<String, String>) -> ResultResp {
    let fee_raw = require(form, "fee")?;
    let fee: i64 = fee_raw
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid fee '{fee_raw}'")))?;
    let renter = form
        .get("renter")
        .map(String::as_str)
        .filter(|s| !s.is_empty());

    properties::assign_fee(db, property_id, renter, fee)?;
    redirect("/dashboard")
}

// ---- request plumbing ----

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn query_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map(String::as_str).unwrap_or("")
}

fn require(form: &HashMap<String, String>, key: &str) -> Result<String, ServerError> {
    form.get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing field '{key}'")))
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid id '{raw}'")))
}

fn parse_optional_date(
    form: &HashMap<String, String>,
    key: &str,
) -> Result<Option<NaiveDate>, ServerError> {
    match form.get(key).map(String::as_str).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("invalid date '{raw}'"))),
    }
}
