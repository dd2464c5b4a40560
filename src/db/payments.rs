use crate::db::connection::Database;
use crate::domain::models::Payment;
use crate::errors::ServerError;
use rusqlite::Row;

fn payment_from_row(row: &Row) -> rusqlite::Result<Payment> {
    Ok(Payment {
        property_id: row.get(0)?,
        month: row.get(1)?,
        amount_due: row.get(2)?,
        amount_paid: row.get(3)?,
        date_paid: row.get(4)?,
    })
}

pub fn list_payments(db: &Database) -> Result<Vec<Payment>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            r#"
            SELECT property_id, month, amount_due, amount_paid, date_paid
            FROM payments
            ORDER BY date_paid, property_id
            "#,
        )?;
        let rows = stmt.query_map([], payment_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
}
