//! End-to-end tests driving the router against a temp SQLite file

mod common;

use axum::http::{Method, StatusCode};
use common::{delete, get, post, put, send, test_app};
use serde_json::json;

#[tokio::test]
async fn user_lifecycle() {
    let (app, _dir) = test_app().await;

    let (status, body) = post(
        &app,
        "/users",
        json!({"name": "Ann", "email": "a@x.com", "password": "p"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "message": "User created!",
            "user": {"id": 1, "name": "Ann", "email": "a@x.com"}
        })
    );

    let (status, body) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Ann", "email": "a@x.com"}));

    let (status, body) = put(&app, "/users/1", json!({"name": "Anna"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated!");
    assert_eq!(body["user"]["name"], "Anna");
    assert_eq!(body["user"]["email"], "a@x.com");

    let (status, body) = delete(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User deleted!"}));

    let (status, body) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn password_is_never_returned() {
    let (app, _dir) = test_app().await;
    post(
        &app,
        "/users",
        json!({"name": "Ann", "email": "a@x.com", "password": "secret"}),
    )
    .await;

    let (_, list) = get(&app, "/users").await;
    assert_eq!(list, json!([{"id": 1, "name": "Ann", "email": "a@x.com"}]));

    let (_, updated) = put(&app, "/users/1", json!({"password": "other"})).await;
    assert!(updated["user"].get("password").is_none());
}

#[tokio::test]
async fn create_rejects_missing_or_falsy_fields() {
    let (app, _dir) = test_app().await;

    let cases = [
        ("/users", json!({"name": "Ann", "email": "a@x.com"})),
        ("/users", json!({"name": "", "email": "a@x.com", "password": "p"})),
        ("/clubs", json!({"name": "Readers", "description": null})),
        ("/books", json!({"title": "Dune", "author": "Herbert", "genre": "SF", "user_id": 0})),
        ("/memberships", json!({"user_id": 1, "club_id": 1})),
        ("/discussions", json!({"content": "Great", "book_id": 1, "club_id": 1})),
    ];

    for (uri, body) in cases {
        let (status, body) = post(&app, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"message": "Missing required fields"}), "{uri}");
    }

    let (_, users) = get(&app, "/users").await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn malformed_body_is_400() {
    let (app, _dir) = test_app().await;

    let (status, body) = post(&app, "/clubs", json!({"name": 5, "description": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));

    let (status, _) = send(&app, Method::POST, "/clubs", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let (app, _dir) = test_app().await;
    let user = json!({"name": "Ann", "email": "a@x.com", "password": "p"});

    let (status, _) = post(&app, "/users", user.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/users", user).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"message": "User conflicts with existing data"}));

    post(
        &app,
        "/users",
        json!({"name": "Bob", "email": "b@x.com", "password": "p"}),
    )
    .await;
    let (status, _) = put(&app, "/users/2", json!({"email": "a@x.com"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn empty_update_leaves_records_unchanged() {
    let (app, _dir) = test_app().await;
    post(&app, "/users", json!({"name": "Ann", "email": "a@x.com", "password": "p"})).await;
    post(&app, "/clubs", json!({"name": "Readers", "description": "Weekly"})).await;
    post(
        &app,
        "/books",
        json!({"title": "Dune", "author": "Herbert", "genre": "SF", "user_id": 1}),
    )
    .await;
    post(
        &app,
        "/discussions",
        json!({"content": "Spice", "date": "2025-01-30", "book_id": 1, "club_id": 1}),
    )
    .await;

    for uri in ["/users/1", "/clubs/1", "/books/1", "/discussions/1"] {
        let (_, before) = get(&app, uri).await;
        let (status, _) = put(&app, uri, json!({})).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        let (_, after) = get(&app, uri).await;
        assert_eq!(before, after, "{uri}");
    }
}

#[tokio::test]
async fn unknown_ids_are_404() {
    let (app, _dir) = test_app().await;

    for (uri, message) in [
        ("/users/99", "User not found"),
        ("/clubs/99", "Club not found"),
        ("/books/99", "Book not found"),
        ("/discussions/99", "Discussion not found"),
        ("/books/abc", "Book not found"),
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"message": message}));

        let (status, _) = put(&app, uri, json!({"name": "x"})).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");

        let (status, _) = delete(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn signed_or_oversized_ids_are_404() {
    let (app, _dir) = test_app().await;
    let (status, _) = post(&app, "/users", json!({"name": "Ann", "email": "a@x.com", "password": "p"})).await;
    assert_eq!(status, StatusCode::CREATED);

    for uri in ["/users/+1", "/users/-1", "/users/%201", "/users/99999999999999999999"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"message": "User not found"}), "{uri}");
    }

    let (status, _) = get(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn club_crud() {
    let (app, _dir) = test_app().await;

    let (status, body) = post(&app, "/clubs", json!({"name": "Readers", "description": "Weekly"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["club"], json!({"id": 1, "name": "Readers", "description": "Weekly"}));

    let (_, body) = put(&app, "/clubs/1", json!({"description": "Monthly"})).await;
    assert_eq!(body["club"], json!({"id": 1, "name": "Readers", "description": "Monthly"}));

    let (_, list) = get(&app, "/clubs").await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = delete(&app, "/clubs/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Club deleted!");
    let (status, _) = get(&app, "/clubs/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn book_round_trip_keeps_owner() {
    let (app, _dir) = test_app().await;
    post(&app, "/users", json!({"name": "Ann", "email": "a@x.com", "password": "p"})).await;

    let input = json!({"title": "Dune", "author": "Herbert", "genre": "SF", "user_id": 1});
    let (status, body) = post(&app, "/books", input).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Book created!");

    let (_, book) = get(&app, "/books/1").await;
    assert_eq!(
        book,
        json!({"id": 1, "title": "Dune", "author": "Herbert", "genre": "SF", "user_id": 1})
    );

    let (_, body) = put(&app, "/books/1", json!({"genre": "Science fiction"})).await;
    assert_eq!(body["book"]["genre"], "Science fiction");
    assert_eq!(body["book"]["title"], "Dune");

    let (status, _) = delete(&app, "/books/1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, "/books/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn memberships_list_member_names() {
    let (app, _dir) = test_app().await;
    post(&app, "/users", json!({"name": "Ann", "email": "a@x.com", "password": "p"})).await;
    post(&app, "/clubs", json!({"name": "Readers", "description": "Weekly"})).await;
    post(&app, "/clubs", json!({"name": "Writers", "description": "Daily"})).await;

    let (status, body) = post(
        &app,
        "/memberships",
        json!({"user_id": 1, "club_id": 2, "role": "member"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "message": "Membership created!",
            "membership": {"user_id": 1, "club_id": 2, "role": "member"}
        })
    );

    let (status, list) = get(&app, "/memberships").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        list,
        json!([{"user_id": 1, "club_id": 2, "role": "member", "member_name": "Ann"}])
    );
}

#[tokio::test]
async fn duplicate_membership_conflicts() {
    let (app, _dir) = test_app().await;
    let membership = json!({"user_id": 1, "club_id": 1, "role": "member"});

    let (status, _) = post(&app, "/memberships", membership.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/memberships", json!({"user_id": 1, "club_id": 1, "role": "owner"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"message": "Membership conflicts with existing data"}));
}

#[tokio::test]
async fn membership_has_no_item_routes() {
    let (app, _dir) = test_app().await;
    post(&app, "/memberships", json!({"user_id": 1, "club_id": 1, "role": "member"})).await;

    let (status, _) = get(&app, "/memberships/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_user_leaves_membership_without_name() {
    let (app, _dir) = test_app().await;
    post(&app, "/users", json!({"name": "Ann", "email": "a@x.com", "password": "p"})).await;
    post(&app, "/clubs", json!({"name": "Readers", "description": "Weekly"})).await;
    post(&app, "/memberships", json!({"user_id": 1, "club_id": 1, "role": "member"})).await;

    let (status, _) = delete(&app, "/users/1").await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get(&app, "/memberships").await;
    assert_eq!(list, json!([{"user_id": 1, "club_id": 1, "role": "member"}]));
}

#[tokio::test]
async fn discussion_crud_and_listing() {
    let (app, _dir) = test_app().await;
    post(&app, "/users", json!({"name": "Ann", "email": "a@x.com", "password": "p"})).await;
    post(&app, "/clubs", json!({"name": "Readers", "description": "Weekly"})).await;
    post(
        &app,
        "/books",
        json!({"title": "Dune", "author": "Herbert", "genre": "SF", "user_id": 1}),
    )
    .await;

    let input = json!({"content": "Spice", "date": "2025-01-30", "book_id": 1, "club_id": 1});
    let (status, body) = post(&app, "/discussions", input).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["discussion"],
        json!({"id": 1, "content": "Spice", "date": "2025-01-30", "book_id": 1, "club_id": 1})
    );

    let (_, list) = get(&app, "/discussions").await;
    assert_eq!(list[0]["user_name"], "Ann");

    let (_, body) = put(&app, "/discussions/1", json!({"date": "next week"})).await;
    assert_eq!(body["message"], "Discussion updated!");
    assert_eq!(body["discussion"]["date"], "next week");
    assert_eq!(body["discussion"]["content"], "Spice");

    let (status, body) = delete(&app, "/discussions/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Discussion deleted!"}));
    let (status, _) = get(&app, "/discussions/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _dir) = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
