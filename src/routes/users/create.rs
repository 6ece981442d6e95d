use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};

use crate::{
    db_adapters::{CreateUserParams, UserStore},
    routes::utils::{response_400, response_500},
    types::UserCreateRequest,
    utils::validation::validate_new_user,
};

#[tracing::instrument(name = "Creating a user", skip(store, req), fields(phone = %req.phone))]
#[post("")]
pub async fn create_user_endpoint(
    store: Data<dyn UserStore>,
    req: Json<UserCreateRequest>,
) -> HttpResponse {
    let req = req.into_inner();
    if let Err(e) = validate_new_user(&req) {
        return response_400(&e.to_string());
    }

    match store
        .create_user(CreateUserParams {
            firstname: req.firstname,
            lastname: req.lastname,
            phone: req.phone,
            address: req.addr,
        })
        .await
    {
        Ok(()) => HttpResponse::Created().finish(),
        Err(e) => response_500(e),
    }
}
