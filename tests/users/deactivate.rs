use actix_web::{http, test};
use kuser_backend::db_adapters::{StoreError, UserStore};

use crate::utils::{init_app, seed_user, Connections};

#[actix_web::test]
async fn happy_path() -> Result<(), StoreError> {
    let Connections { app, store } = init_app().await;
    seed_user(&store, "7408963464").await?;
    seed_user(&store, "9389474439").await?;

    let req = test::TestRequest::put()
        .uri("/deactivate/7408963464")
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let res: String = test::read_body_json(res).await;
    assert_eq!(res, "User Deactivated");

    let users_in_store = store.list_users().await?;
    assert_eq!(users_in_store[0].phone, "7408963464");
    assert_eq!(users_in_store[0].active, false);
    assert_eq!(users_in_store[1].phone, "9389474439");
    assert_eq!(users_in_store[1].active, true);

    Ok(())
}

#[actix_web::test]
async fn ok_when_already_inactive() -> Result<(), StoreError> {
    let Connections { app, store } = init_app().await;
    seed_user(&store, "7408963464").await?;
    store.deactivate_user("7408963464").await?;

    let req = test::TestRequest::put()
        .uri("/deactivate/7408963464")
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let users_in_store = store.list_users().await?;
    assert_eq!(users_in_store[0].active, false);

    Ok(())
}

#[actix_web::test]
async fn ok_when_no_user_matches() -> Result<(), StoreError> {
    let Connections { app, store } = init_app().await;
    seed_user(&store, "7408963464").await?;

    let req = test::TestRequest::put()
        .uri("/deactivate/1111111111")
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let users_in_store = store.list_users().await?;
    assert_eq!(users_in_store.len(), 1);
    assert_eq!(users_in_store[0].active, true);

    Ok(())
}

#[actix_web::test]
async fn internal_server_error_on_store_failure() -> Result<(), StoreError> {
    let Connections { app, store } = init_app().await;
    seed_user(&store, "7408963464").await?;
    store.fail_with("connection refused");

    let req = test::TestRequest::put()
        .uri("/deactivate/7408963464")
        .to_request();

    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

    store.recover();
    let users_in_store = store.list_users().await?;
    assert_eq!(users_in_store[0].active, true);

    Ok(())
}
