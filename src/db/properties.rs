use crate::db::connection::Database;
use crate::domain::models::{Property, PropertyStatus};
use crate::errors::ServerError;
use rusqlite::types::Type;
use rusqlite::{params, Row};

fn property_from_row(row: &Row) -> rusqlite::Result<Property> {
    let status_raw: String = row.get(5)?;
    let status = PropertyStatus::parse(&status_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            Type::Text,
            format!("unknown property status '{status_raw}'").into(),
        )
    })?;
    Ok(Property {
        id: row.get(0)?,
        owner: row.get(1)?,
        renter: row.get(2)?,
        location: row.get(3)?,
        block_number: row.get(4)?,
        status,
        cluster: row.get(6)?,
        company: row.get(7)?,
        group: row.get(8)?,
        fee: row.get(9)?,
    })
}

pub fn list_properties(db: &Database) -> Result<Vec<Property>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            r#"
            SELECT id, owner, renter, location, block_number, status,
                   cluster, company, group_name, fee
            FROM properties
            ORDER BY id
            "#,
        )?;
        let rows = stmt.query_map([], property_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
}

/// Assigns a monthly fee, optionally placing a renter at the same time.
/// A property that gains a renter becomes occupied; a fee-only adjustment
/// leaves the renter and occupancy status alone.
pub fn assign_fee(
    db: &Database,
    property_id: &str,
    renter: Option<&str>,
    fee: i64,
) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let updated = match renter {
            Some(renter) => conn.execute(
                "UPDATE properties SET renter = ?1, fee = ?2, status = ?3 WHERE id = ?4",
                params![renter, fee, PropertyStatus::Occupied.as_str(), property_id],
            )?,
            None => conn.execute(
                "UPDATE properties SET fee = ?1 WHERE id = ?2",
                params![fee, property_id],
            )?,
        };
        if updated == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}
