pub mod report_xlsx;

pub use report_xlsx::export_monthly_report_xlsx;
