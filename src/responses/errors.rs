use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::warn;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    if status >= 500 {
        warn!(error = %err, "request failed");
    }

    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        // Internals stay in the log.
        ServerError::Internal(_) => "Internal Server Error".to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
