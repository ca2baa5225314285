mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_admin, create_group, create_professor, create_room, create_student,
    create_subject, delete, get, json_request, link, setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_admin_manages_subjects(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let app = setup_test_app(pool);
    let cookie = admin.cookie();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/add-subject",
            Some(&cookie),
            json!({ "subject_name": "Algebra" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["message"], "Inserting subject successful");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/add-subject",
            Some(&cookie),
            json!({ "subject_name": "Algebra" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "Subject already exists");

    let response = app
        .clone()
        .oneshot(get("/api/list-subjects", Some(&cookie)))
        .await
        .unwrap();
    let subjects = body_json(response).await;
    let subjects = subjects.as_array().unwrap();
    assert_eq!(subjects.len(), 1);
    let id = subjects[0]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-subject",
            Some(&cookie),
            json!({ "id": id, "subject_name": "Linear Algebra" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/delete-subject?id={id}"), Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Delete subject successful");

    let response = app
        .oneshot(delete(&format!("/api/delete-subject?id={id}"), Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_non_admin_cannot_add_subject(pool: PgPool) {
    let professor = create_professor(&pool, "prof1").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/add-subject",
            Some(&professor.cookie()),
            json!({ "subject_name": "Algebra" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["error"],
        "You do not have administrator privileges to add subjects"
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_group_listing_hides_reserved_groups(pool: PgPool) {
    let group_id = create_group(&pool, "IT-21").await;
    let student = create_student(&pool, "student1", group_id).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(get("/api/list-groups", Some(&student.cookie())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!([{ "id": group_id, "group_name": "IT-21" }]));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_students_of_group_exclude_staff(pool: PgPool) {
    let group_id = create_group(&pool, "IT-21").await;
    let student = create_student(&pool, "student1", group_id).await;
    let professor = create_professor(&pool, "prof1").await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(get(
            &format!("/api/list-students-of-a-group?group_id={group_id}"),
            Some(&professor.cookie()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["ID"], student.id);
    assert_eq!(students[0]["username"], "student1");

    let response = app
        .oneshot(get(
            &format!("/api/list-students-of-a-group?group_id={group_id}"),
            Some(&student.cookie()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_current_user_subjects_depend_on_role(pool: PgPool) {
    let group_id = create_group(&pool, "IT-21").await;
    let algebra = create_subject(&pool, "Algebra").await;
    let physics = create_subject(&pool, "Physics").await;
    link(&pool, "group_subject", ("group_id", group_id), ("subject_id", algebra)).await;

    let admin = create_admin(&pool, "admin1").await;
    let professor = create_professor(&pool, "prof1").await;
    let student = create_student(&pool, "student1", group_id).await;
    link(
        &pool,
        "professor_subject",
        ("professor_id", professor.id),
        ("subject_id", physics),
    )
    .await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(get("/api/list-current-user-subjects", Some(&student.cookie())))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        json!([{ "id": algebra, "subject_name": "Algebra" }])
    );

    let response = app
        .clone()
        .oneshot(get("/api/list-current-user-subjects", Some(&professor.cookie())))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        json!([{ "id": physics, "subject_name": "Physics" }])
    );

    let response = app
        .oneshot(get("/api/list-current-user-subjects", Some(&admin.cookie())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Admins don't have any subjects");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_room_names_are_unique_per_subject(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let algebra = create_subject(&pool, "Algebra").await;
    let physics = create_subject(&pool, "Physics").await;
    create_room(&pool, algebra, "Lecture").await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/add-room",
            Some(&admin.cookie()),
            json!({ "subject_id": algebra, "room_name": "Lecture" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/add-room",
            Some(&admin.cookie()),
            json!({ "subject_id": physics, "room_name": "Lecture" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(get(
            &format!("/api/list-rooms-of-a-subject?subject_id={physics}"),
            Some(&admin.cookie()),
        ))
        .await
        .unwrap();
    let rooms = body_json(response).await;
    assert_eq!(rooms.as_array().unwrap().len(), 1);
    assert_eq!(rooms[0]["room_name"], "Lecture");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_deleting_subject_cascades_to_rooms(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let algebra = create_subject(&pool, "Algebra").await;
    create_room(&pool, algebra, "Lecture").await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/delete-subject?id={algebra}"), Some(&admin.cookie())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/api/list-rooms", Some(&admin.cookie())))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_group_subject_relation_lifecycle(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let group_id = create_group(&pool, "IT-21").await;
    let algebra = create_subject(&pool, "Algebra").await;
    let physics = create_subject(&pool, "Physics").await;
    let app = setup_test_app(pool);
    let cookie = admin.cookie();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/add-groups-and-subjects-relation",
            Some(&cookie),
            json!({ "group_id": group_id, "subject_id": algebra }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/add-groups-and-subjects-relation",
            Some(&cookie),
            json!({ "group_id": group_id, "subject_id": 9999 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-groups-and-subjects-relation",
            Some(&cookie),
            json!({
                "old_group_id": group_id,
                "old_subject_id": algebra,
                "new_group_id": group_id,
                "new_subject_id": physics
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get(
            &format!("/api/list-subjects-of-a-group?group_id={group_id}"),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        json!([{
            "group_id": group_id,
            "group_name": "IT-21",
            "subject_id": physics,
            "subject_name": "Physics"
        }])
    );

    let response = app
        .clone()
        .oneshot(delete(
            &format!(
                "/api/delete-groups-and-subjects-relation?group_id={group_id}&subject_id={physics}"
            ),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(delete(
            &format!(
                "/api/delete-groups-and-subjects-relation?group_id={group_id}&subject_id={physics}"
            ),
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_professor_relations_are_grouped_per_professor(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let professor = create_professor(&pool, "prof1").await;
    let algebra = create_subject(&pool, "Algebra").await;
    let physics = create_subject(&pool, "Physics").await;
    for subject_id in [algebra, physics] {
        link(
            &pool,
            "professor_subject",
            ("professor_id", professor.id),
            ("subject_id", subject_id),
        )
        .await;
    }
    let app = setup_test_app(pool);

    let response = app
        .oneshot(get(
            "/api/list-professors-and-subjects-relations",
            Some(&admin.cookie()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let professors = body.as_array().unwrap();
    assert_eq!(professors.len(), 1);
    assert_eq!(professors[0]["professor_id"], professor.id);
    assert_eq!(professors[0]["firstName"], "User");
    assert_eq!(
        professors[0]["subjects"],
        json!([
            { "id": algebra, "subject_name": "Algebra" },
            { "id": physics, "subject_name": "Physics" }
        ])
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_professor_group_relation_can_be_added(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let professor = create_professor(&pool, "prof1").await;
    let group_id = create_group(&pool, "IT-21").await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/add-professors-and-groups-relation",
            Some(&admin.cookie()),
            json!({ "professor_id": professor.id, "group_id": group_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(get(
            &format!("/api/list-groups-of-a-professor?professor_id={}", professor.id),
            Some(&admin.cookie()),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body[0]["groups"], json!([{ "id": group_id, "group_name": "IT-21" }]));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_reserved_groups_cannot_be_changed(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let group_id = create_group(&pool, "IT-21").await;
    let app = setup_test_app(pool);
    let cookie = admin.cookie();
    let message = "The professors and administrators groups cannot be changed";

    for reserved in [1, 2] {
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/update-group",
                Some(&cookie),
                json!({ "id": reserved, "group_name": "Renamed" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["error"], message);

        let response = app
            .clone()
            .oneshot(delete(&format!("/api/delete-group?id={reserved}"), Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["error"], message);
    }

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-group",
            Some(&cookie),
            json!({ "id": group_id, "group_name": "IT-22" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(delete(&format!("/api/delete-group?id={group_id}"), Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_subjects_of_a_student_follow_their_group(pool: PgPool) {
    let professor = create_professor(&pool, "prof1").await;
    let group_id = create_group(&pool, "IT-21").await;
    let algebra = create_subject(&pool, "Algebra").await;
    create_subject(&pool, "Physics").await;
    link(&pool, "group_subject", ("group_id", group_id), ("subject_id", algebra)).await;
    let student = create_student(&pool, "student1", group_id).await;
    let app = setup_test_app(pool);
    let uri = format!("/api/list-subjects-of-a-student?student_id={}", student.id);

    let response = app
        .clone()
        .oneshot(get(&uri, Some(&professor.cookie())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{ "id": algebra, "subject_name": "Algebra" }])
    );

    let response = app
        .oneshot(get(&uri, Some(&student.cookie())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["error"],
        "You do not have administrator or professor privileges to view subjects of students"
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_admin_updates_and_deletes_rooms(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let student = create_student(&pool, "student1", create_group(&pool, "IT-21").await).await;
    let algebra = create_subject(&pool, "Algebra").await;
    let lecture = create_room(&pool, algebra, "Lecture").await;
    create_room(&pool, algebra, "Seminar").await;
    let app = setup_test_app(pool);
    let cookie = admin.cookie();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-room",
            Some(&student.cookie()),
            json!({ "id": lecture, "subject_id": algebra, "room_name": "Hall" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["error"],
        "You do not have administrator privileges to update room"
    );

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-room",
            Some(&cookie),
            json!({ "id": lecture, "subject_id": algebra, "room_name": "Seminar" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-room",
            Some(&cookie),
            json!({ "id": lecture + 100, "subject_id": algebra, "room_name": "Hall" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Room not found");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-room",
            Some(&cookie),
            json!({ "id": lecture, "subject_id": algebra, "room_name": "Hall" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Update room successful");

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/delete-room?id={lecture}"), Some(&student.cookie())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/delete-room?id={lecture}"), Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Delete room successful");

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/delete-room?id={lecture}"), Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(get(
            &format!("/api/list-rooms-of-a-subject?subject_id={algebra}"),
            Some(&cookie),
        ))
        .await
        .unwrap();
    let rooms = body_json(response).await;
    assert_eq!(rooms.as_array().unwrap().len(), 1);
    assert_eq!(rooms[0]["room_name"], "Seminar");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_groups_that_have_a_subject(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let it21 = create_group(&pool, "IT-21").await;
    let it22 = create_group(&pool, "IT-22").await;
    let algebra = create_subject(&pool, "Algebra").await;
    let physics = create_subject(&pool, "Physics").await;
    link(&pool, "group_subject", ("group_id", it21), ("subject_id", algebra)).await;
    link(&pool, "group_subject", ("group_id", it22), ("subject_id", algebra)).await;
    link(&pool, "group_subject", ("group_id", it22), ("subject_id", physics)).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(get(
            &format!("/api/list-groups-that-have-a-subject?subject_id={algebra}"),
            Some(&admin.cookie()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {
                "group_id": it21,
                "group_name": "IT-21",
                "subject_id": algebra,
                "subject_name": "Algebra"
            },
            {
                "group_id": it22,
                "group_name": "IT-22",
                "subject_id": algebra,
                "subject_name": "Algebra"
            }
        ])
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_professor_subject_relation_lifecycle(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let first = create_professor(&pool, "prof1").await;
    let second = create_professor(&pool, "prof2").await;
    let algebra = create_subject(&pool, "Algebra").await;
    let physics = create_subject(&pool, "Physics").await;
    for professor_id in [first.id, second.id] {
        link(
            &pool,
            "professor_subject",
            ("professor_id", professor_id),
            ("subject_id", algebra),
        )
        .await;
    }
    let app = setup_test_app(pool);
    let cookie = admin.cookie();

    let response = app
        .clone()
        .oneshot(get(
            &format!("/api/list-professors-that-have-a-subject?subject_id={algebra}"),
            Some(&first.cookie()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[1]["professor_id"], second.id);

    let update = json!({
        "professor_id": first.id,
        "subject_id": physics,
        "old_professor_id": first.id,
        "old_subject_id": algebra
    });

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-professors-and-subjects-relation",
            Some(&first.cookie()),
            update.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-professors-and-subjects-relation",
            Some(&cookie),
            update.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Updating professor subject relation successful"
    );

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-professors-and-subjects-relation",
            Some(&cookie),
            update,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Professor Subject relation not found"
    );

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-professors-and-subjects-relation",
            Some(&cookie),
            json!({
                "professor_id": first.id,
                "subject_id": physics,
                "old_professor_id": second.id,
                "old_subject_id": algebra
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["error"],
        "Professor Subject relation already exists"
    );

    let response = app
        .clone()
        .oneshot(get(
            &format!("/api/list-subjects-of-a-professor?professor_id={}", first.id),
            Some(&cookie),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(
        body[0]["subjects"],
        json!([{ "id": physics, "subject_name": "Physics" }])
    );

    let uri = format!(
        "/api/delete-professors-and-subjects-relation?professor_id={}&subject_id={physics}",
        first.id
    );
    let response = app
        .clone()
        .oneshot(delete(&uri, Some(&first.cookie())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.clone().oneshot(delete(&uri, Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Deleting professor subject relation successful"
    );

    let response = app.oneshot(delete(&uri, Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_professor_group_relation_lifecycle(pool: PgPool) {
    let admin = create_admin(&pool, "admin1").await;
    let first = create_professor(&pool, "prof1").await;
    let second = create_professor(&pool, "prof2").await;
    let it21 = create_group(&pool, "IT-21").await;
    let it22 = create_group(&pool, "IT-22").await;
    for professor_id in [first.id, second.id] {
        link(
            &pool,
            "professor_group",
            ("professor_id", professor_id),
            ("group_id", it21),
        )
        .await;
    }
    let app = setup_test_app(pool);
    let cookie = admin.cookie();

    let response = app
        .clone()
        .oneshot(get(
            &format!("/api/list-professors-that-have-a-group?group_id={it21}"),
            Some(&first.cookie()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["professor_id"], first.id);
    assert_eq!(body[0]["groups"], json!([{ "id": it21, "group_name": "IT-21" }]));

    let update = json!({
        "professor_id": first.id,
        "group_id": it22,
        "old_professor_id": first.id,
        "old_group_id": it21
    });

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-professors-and-groups-relation",
            Some(&first.cookie()),
            update.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["error"],
        "You do not have administrator privileges to update professor_group relation"
    );

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-professors-and-groups-relation",
            Some(&cookie),
            update.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Updating professor group relation successful"
    );

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-professors-and-groups-relation",
            Some(&cookie),
            update,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Professor Group relation not found"
    );

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/update-professors-and-groups-relation",
            Some(&cookie),
            json!({
                "professor_id": first.id,
                "group_id": it22,
                "old_professor_id": second.id,
                "old_group_id": it21
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["error"],
        "Professor Group relation already exists"
    );

    let uri = format!(
        "/api/delete-professors-and-groups-relation?professor_id={}&group_id={it22}",
        first.id
    );
    let response = app
        .clone()
        .oneshot(delete(&uri, Some(&first.cookie())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.clone().oneshot(delete(&uri, Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Deleting professor group relation successful"
    );

    let response = app
        .clone()
        .oneshot(delete(&uri, Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(get(
            &format!("/api/list-professors-that-have-a-group?group_id={it21}"),
            Some(&cookie),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["professor_id"], second.id);
}
