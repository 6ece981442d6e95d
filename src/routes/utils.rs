use std::fmt::Display;

use actix_web::HttpResponse;

use crate::types::ErrorResponse;

/// Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    tracing::event!(target: "backend", tracing::Level::INFO, "Rejected request: {}", error_message);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging. The message is echoed to the client.
pub fn response_500<T: Display>(e: T) -> HttpResponse {
    tracing::event!(target: "backend", tracing::Level::ERROR, "{}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: e.to_string(),
    })
}
