use crate::domain::models::{Payment, Property};
use crate::domain::reports::overall_totals;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

/// Writes the monthly collection report as a downloadable workbook.
/// `payments` must already be narrowed to the requested month.
pub fn export_monthly_report_xlsx(
    payments: &[Payment],
    properties: &[Property],
    month: &str,
) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = ["Property ID", "Location", "Owner", "Amount Due", "Amount Paid"];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, payment) in payments.iter().enumerate() {
        let r = (i + 1) as u32;
        let property = properties.iter().find(|p| p.id == payment.property_id);

        worksheet
            .write_string(r, 0, &payment.property_id)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write property id: {}", e)))?;

        let location = property.map(|p| p.location.as_str()).unwrap_or("");
        worksheet
            .write_string(r, 1, location)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write location: {}", e)))?;

        let owner = property.map(|p| p.owner.as_str()).unwrap_or("");
        worksheet
            .write_string(r, 2, owner)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write owner: {}", e)))?;

        worksheet
            .write_number(r, 3, payment.amount_due as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write amount due: {}", e)))?;

        worksheet
            .write_number(r, 4, payment.amount_paid as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write amount paid: {}", e)))?;
    }

    let totals = overall_totals(payments);
    let totals_row = (payments.len() + 1) as u32;

    worksheet
        .write_string(totals_row, 0, "Totals")
        .map_err(|e| ServerError::XlsxError(format!("Failed to write totals label: {}", e)))?;
    worksheet
        .write_number(totals_row, 3, totals.total_due as f64)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write total due: {}", e)))?;
    worksheet
        .write_number(totals_row, 4, totals.total_paid as f64)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write total paid: {}", e)))?;

    let percentage = match totals.collection_percentage() {
        Some(pct) => format!("{pct:.2}%"),
        None => "N/A".to_string(),
    };
    worksheet
        .write_string(totals_row + 1, 0, "Collection Percentage")
        .map_err(|e| ServerError::XlsxError(format!("Failed to write percentage label: {}", e)))?;
    worksheet
        .write_string(totals_row + 1, 1, &percentage)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write percentage: {}", e)))?;

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    xlsx_response(buffer, &format!("monthly_report_{month}.xlsx"))
}
