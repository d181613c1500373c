pub mod errors;
pub mod html;
pub mod json;

pub use errors::{html_error_response, ResultResp};

pub use html::{css_response, html_response, redirect};
pub use json::{json_response, json_with_status};
