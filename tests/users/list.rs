use actix_web::{http, test};
use kuser_backend::{
    db_adapters::{StoreError, UserStore},
    types::{ErrorResponse, UserListResponse},
};

use crate::utils::{init_app, seed_user, Connections};

#[actix_web::test]
async fn happy_path() -> Result<(), StoreError> {
    let Connections { app, store } = init_app().await;
    seed_user(&store, "7408963464").await?;
    seed_user(&store, "9389474439").await?;
    store.deactivate_user("9389474439").await?;

    let req = test::TestRequest::get().uri("/users").to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: UserListResponse = test::read_body_json(res).await;
    assert_eq!(res.data.len(), 2);
    assert_eq!(res.data[0].firstname, "Savez");
    assert_eq!(res.data[0].lastname, "Siddiqui");
    assert_eq!(res.data[0].phone, "7408963464");
    assert_eq!(res.data[0].address, "some address");
    assert_eq!(res.data[0].active, true);
    assert_eq!(res.data[1].phone, "9389474439");
    assert_eq!(res.data[1].active, false);
    assert_eq!(res.data, store.list_users().await?);

    Ok(())
}

#[actix_web::test]
async fn serializes_wire_field_names() -> Result<(), StoreError> {
    let Connections { app, store } = init_app().await;
    seed_user(&store, "7408963464").await?;

    let req = test::TestRequest::get().uri("/users").to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        serde_json::json!({
            "data": [{
                "firstname": "Savez",
                "lastname": "Siddiqui",
                "phone": "7408963464",
                "addr": "some address",
                "active": true,
            }]
        })
    );

    Ok(())
}

#[actix_web::test]
async fn empty_list() -> Result<(), StoreError> {
    let Connections { app, .. } = init_app().await;

    let req = test::TestRequest::get().uri("/users").to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body, serde_json::json!({ "data": [] }));

    Ok(())
}

#[actix_web::test]
async fn internal_server_error_on_store_failure() -> Result<(), StoreError> {
    let Connections { app, store } = init_app().await;
    seed_user(&store, "7408963464").await?;
    store.fail_with("connection refused");

    let req = test::TestRequest::get().uri("/users").to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

    let res: ErrorResponse = test::read_body_json(res).await;
    assert_eq!(res.error, "connection refused");

    Ok(())
}
