use actix_web::{get, web::Data, HttpResponse};

use crate::{db_adapters::UserStore, routes::utils::response_500, types::UserListResponse};

#[tracing::instrument(name = "Listing users", skip(store))]
#[get("")]
pub async fn list_users_endpoint(store: Data<dyn UserStore>) -> HttpResponse {
    match store.list_users().await {
        Ok(users) => HttpResponse::Ok().json(UserListResponse { data: users }),
        Err(e) => response_500(e),
    }
}
