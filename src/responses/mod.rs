pub mod csv;
pub mod errors;
pub mod html;
pub mod json;

pub use errors::ResultResp;

pub use csv::csv_response;
pub use html::{html_response, redirect_response};
pub use json::json_response;
