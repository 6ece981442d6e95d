mod create;
mod deactivate;
mod list;

use actix_web::{
    error::{InternalError, JsonPayloadError},
    web::{scope, JsonConfig, ServiceConfig},
    HttpRequest,
};

use super::utils::response_500;

/// Routes for `kuser` records. Expects `Data<dyn UserStore>` in app data.
pub fn user_routes(cfg: &mut ServiceConfig) {
    cfg.app_data(JsonConfig::default().error_handler(malformed_body_handler))
        .service(
            scope("/users")
                .service(list::list_users_endpoint)
                .service(create::create_user_endpoint),
        )
        .service(deactivate::deactivate_user_endpoint);
}

// Unparseable bodies are answered with 500, not 400, so existing clients keep
// seeing the status they already handle.
fn malformed_body_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = response_500(&err);
    InternalError::from_response(err, response).into()
}
