mod common;

use axum::http::{StatusCode, header};
use common::{
    body_json, create_group, create_room, create_student, create_subject, get, setup_test_app,
};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_room_token_is_issued_for_existing_room(pool: PgPool) {
    let group_id = create_group(&pool, "IT-21").await;
    let student = create_student(&pool, "student1", group_id).await;
    let subject_id = create_subject(&pool, "Algebra").await;
    let room_id = create_room(&pool, subject_id, "Lecture").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(get(
            &format!("/api/get-token?room_id={room_id}"),
            Some(&student.cookie()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("learn_live_ACCESS_TOKEN="));

    let body = body_json(response).await;
    assert_eq!(body["room"], room_id.to_string());
    assert_eq!(
        body["identity"],
        format!("Test User (student1 ID: {})", student.id)
    );
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_room_token_for_unknown_room_is_not_found(pool: PgPool) {
    let group_id = create_group(&pool, "IT-21").await;
    let student = create_student(&pool, "student1", group_id).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(get("/api/get-token?room_id=9999", Some(&student.cookie())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Room not found");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_room_token_requires_integer_room_id(pool: PgPool) {
    let group_id = create_group(&pool, "IT-21").await;
    let student = create_student(&pool, "student1", group_id).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(get("/api/get-token?room_id=abc", Some(&student.cookie())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "room_id must be an integer");
}
