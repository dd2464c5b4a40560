pub mod errors;
pub mod html;
pub mod json;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use html::{html_response, redirect};
pub use json::json_response;
pub use xlsx::xlsx_response;
