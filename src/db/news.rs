use crate::db::connection::Database;
use crate::domain::models::{BroadcastLevel, NewsCategory, NewsItem};
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Row};

fn news_from_row(row: &Row) -> rusqlite::Result<NewsItem> {
    let category_raw: String = row.get(2)?;
    let category = NewsCategory::parse(&category_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unknown news category '{category_raw}'").into(),
        )
    })?;
    let level_raw: String = row.get(5)?;
    let broadcast_level = BroadcastLevel::parse(&level_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            Type::Text,
            format!("unknown broadcast level '{level_raw}'").into(),
        )
    })?;
    Ok(NewsItem {
        id: row.get(0)?,
        title: row.get(1)?,
        category,
        details: row.get(3)?,
        date: row.get(4)?,
        broadcast_level,
    })
}

pub fn list_news(db: &Database) -> Result<Vec<NewsItem>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            r#"
            SELECT id, title, category, details, date, broadcast_level
            FROM news
            ORDER BY date DESC, id DESC
            "#,
        )?;
        let rows = stmt.query_map([], news_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
}

pub fn insert_news(
    db: &Database,
    title: &str,
    category: NewsCategory,
    details: &str,
    date: NaiveDate,
    broadcast_level: BroadcastLevel,
) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO news (title, category, details, date, broadcast_level)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![title, category.as_str(), details, date, broadcast_level.as_str()],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

/// Overwrites a news item in place; the id and original posting date stay.
pub fn update_news(
    db: &Database,
    id: i64,
    title: &str,
    category: NewsCategory,
    details: &str,
    broadcast_level: BroadcastLevel,
) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let updated = conn.execute(
            r#"
            UPDATE news
            SET title = ?1, category = ?2, details = ?3, broadcast_level = ?4
            WHERE id = ?5
            "#,
            params![title, category.as_str(), details, broadcast_level.as_str(), id],
        )?;
        if updated == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}
