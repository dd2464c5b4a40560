use crate::db::connection::Database;
use crate::domain::models::{ApprovalStatus, User};
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Row};

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    let status_raw: String = row.get(6)?;
    let status = ApprovalStatus::parse(&status_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            6,
            Type::Text,
            format!("unknown approval status '{status_raw}'").into(),
        )
    })?;
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        property_id: row.get(3)?,
        company: row.get(4)?,
        group: row.get(5)?,
        status,
        dob: row.get(7)?,
        contact_number: row.get(8)?,
        email: row.get(9)?,
    })
}

const SELECT_USER: &str = r#"
    SELECT id, name, role, property_id, company, group_name, status,
           dob, contact_number, email
    FROM users
"#;

pub fn list_users(db: &Database) -> Result<Vec<User>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!("{SELECT_USER} ORDER BY id"))?;
        let rows = stmt.query_map([], user_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
}

pub fn pending_users(db: &Database) -> Result<Vec<User>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!("{SELECT_USER} WHERE status = ?1 ORDER BY id"))?;
        let rows = stmt.query_map(params![ApprovalStatus::Pending.as_str()], user_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
}

/// Registers a resident account request; it starts out pending approval.
pub fn insert_user_request(
    db: &Database,
    name: &str,
    role: &str,
    property_id: Option<&str>,
    dob: Option<NaiveDate>,
    contact_number: &str,
    email: &str,
) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO users (name, role, property_id, status, dob, contact_number, email)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                name,
                role,
                property_id,
                ApprovalStatus::Pending.as_str(),
                dob,
                contact_number,
                email
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

pub fn set_user_status(db: &Database, id: i64, status: ApprovalStatus) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let updated = conn.execute(
            "UPDATE users SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        if updated == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}

/// Inline edit from the users table: every editable field is overwritten.
#[allow(clippy::too_many_arguments)]
pub fn update_user(
    db: &Database,
    id: i64,
    name: &str,
    role: &str,
    property_id: Option<&str>,
    dob: Option<NaiveDate>,
    contact_number: &str,
    email: &str,
) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let updated = conn.execute(
            r#"
            UPDATE users
            SET name = ?1, role = ?2, property_id = ?3, dob = ?4,
                contact_number = ?5, email = ?6
            WHERE id = ?7
            "#,
            params![name, role, property_id, dob, contact_number, email, id],
        )?;
        if updated == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}
