mod common;

use axum::http::{Method, StatusCode};
use common::{get, send, test_app, test_app_with};
use serde_json::{json, Value};

async fn create_pen(app: &axum::Router) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/products/",
        Some(json!({"name": "Pen", "description": "Blue ink", "price": 150})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn create_then_read_back() {
    let app = test_app().await;
    let created = create_pen(&app).await;
    assert_eq!(
        created,
        json!({"id": 1, "name": "Pen", "description": "Blue ink", "price": 150})
    );

    let (status, body) = get(&app, "/products/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn list_returns_rows_in_id_order() {
    let app = test_app().await;
    let (status, body) = get(&app, "/products/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    create_pen(&app).await;
    send(
        &app,
        Method::POST,
        "/products/",
        Some(json!({"name": "Pencil", "description": "HB", "price": 40})),
    )
    .await;

    let (status, body) = get(&app, "/products/").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Pen", "Pencil"]);
    assert_eq!(body[1]["id"], json!(2));
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let (app, db) = test_app_with(true).await;
    let full = json!({"name": "X", "description": "Y", "price": 1});
    let cases = [
        (Method::GET, None),
        (Method::PUT, Some(full.clone())),
        (Method::PATCH, Some(json!({"price": 2}))),
        (Method::DELETE, None),
    ];
    for (method, body) in cases {
        let (status, err) = send(&app, method.clone(), "/products/42/", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", method);
        assert_eq!(err["error"]["code"], "not_found");
        assert_eq!(err["error"]["message"], "Product 42 not found!");
        assert_eq!(db.scoped_sessions().active_scopes(), 0);
    }

    // The failed lookups left nothing open: a write still goes through.
    let (status, _) = send(&app, Method::POST, "/products/", Some(full)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn patch_changes_only_given_fields() {
    let app = test_app().await;
    create_pen(&app).await;

    let (status, body) = send(&app, Method::PATCH, "/products/1/", Some(json!({"price": 175}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Pen", "description": "Blue ink", "price": 175})
    );

    let (status, body) = send(&app, Method::PATCH, "/products/1/", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 175);

    let (_, stored) = get(&app, "/products/1/").await;
    assert_eq!(stored["price"], 175);
    assert_eq!(stored["description"], "Blue ink");
}

#[tokio::test]
async fn put_replaces_every_field() {
    let app = test_app().await;
    create_pen(&app).await;

    let replacement = json!({"name": "Marker", "description": "Black", "price": 300});
    let (status, body) = send(&app, Method::PUT, "/products/1/", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Marker", "description": "Black", "price": 300})
    );

    let (status, err) = send(&app, Method::PUT, "/products/1/", Some(json!({"name": "Only"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["error"]["code"], "validation_error");

    let (_, stored) = get(&app, "/products/1/").await;
    assert_eq!(stored["name"], "Marker");
}

#[tokio::test]
async fn delete_removes_the_row() {
    let app = test_app().await;
    create_pen(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/products/1/", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = get(&app, "/products/1/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, "/products/1/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payloads_are_rejected() {
    let app = test_app().await;

    let (status, err) = send(
        &app,
        Method::POST,
        "/products/",
        Some(json!({"name": "Pen", "description": "Blue ink", "price": "cheap"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["error"]["code"], "validation_error");

    let (status, _) = send(&app, Method::POST, "/products/", Some(json!({"name": "Pen"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, err) = get(&app, "/products/abc/").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["error"]["code"], "validation_error");

    let (_, listed) = get(&app, "/products/").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn database_failure_is_a_server_error() {
    let (app, db) = test_app_with(false).await;
    let (status, err) = get(&app, "/products/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err["error"]["code"], "database_error");
    assert_eq!(db.scoped_sessions().active_scopes(), 0);

    // The failed transaction was rolled back and its connection returned to the pool.
    storefront_api::apply_migrations(db.pool(), db.backend()).await.unwrap();
    let (status, body) = get(&app, "/products/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn request_scopes_are_released() {
    let (app, db) = test_app_with(true).await;
    create_pen(&app).await;
    get(&app, "/products/1/").await;
    assert_eq!(db.scoped_sessions().active_scopes(), 0);
}
