use crate::db::connection::Database;
use crate::domain::models::{Complaint, ComplaintCategory, ComplaintStatus};
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Row};

fn complaint_from_row(row: &Row) -> rusqlite::Result<Complaint> {
    let category_raw: String = row.get(1)?;
    let category = ComplaintCategory::parse(&category_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            Type::Text,
            format!("unknown complaint category '{category_raw}'").into(),
        )
    })?;
    let status_raw: String = row.get(4)?;
    let status = ComplaintStatus::parse(&status_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            format!("unknown complaint status '{status_raw}'").into(),
        )
    })?;
    Ok(Complaint {
        id: row.get(0)?,
        category,
        description: row.get(2)?,
        date: row.get(3)?,
        status,
        response: row.get(5)?,
        photo: row.get(6)?,
    })
}

/// Newest first, matching the submission flow that prepends new complaints.
pub fn list_complaints(db: &Database) -> Result<Vec<Complaint>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            r#"
            SELECT id, category, description, date, status, response, photo
            FROM complaints
            ORDER BY date DESC, id DESC
            "#,
        )?;
        let rows = stmt.query_map([], complaint_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
}

/// Records a new complaint; it always starts out pending.
pub fn insert_complaint(
    db: &Database,
    category: ComplaintCategory,
    description: &str,
    photo: Option<&str>,
    date: NaiveDate,
) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO complaints (category, description, date, status, photo)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                category.as_str(),
                description,
                date,
                ComplaintStatus::Pending.as_str(),
                photo
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// Stores the admin response and marks the complaint solved. Only a pending
/// complaint can transition; a solved one is terminal, so responding to it
/// again (or to an unknown id) is NotFound.
pub fn respond_to_complaint(db: &Database, id: i64, response: &str) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let updated = conn.execute(
            r#"
            UPDATE complaints
            SET status = ?1, response = ?2
            WHERE id = ?3 AND status = ?4
            "#,
            params![
                ComplaintStatus::Solved.as_str(),
                response,
                id,
                ComplaintStatus::Pending.as_str()
            ],
        )?;
        if updated == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}
