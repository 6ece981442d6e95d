use actix_web::{
    put,
    web::{Data, Path},
    HttpResponse,
};

use crate::{db_adapters::UserStore, routes::utils::response_500, types::USER_DEACTIVATED_MESSAGE};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    phone: String,
}

#[tracing::instrument(name = "Deactivating a user", skip(store))]
#[put("/deactivate/{phone}")]
pub async fn deactivate_user_endpoint(
    store: Data<dyn UserStore>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match store.deactivate_user(&path_param.phone).await {
        Ok(()) => HttpResponse::Ok().json(USER_DEACTIVATED_MESSAGE),
        Err(e) => response_500(e),
    }
}
