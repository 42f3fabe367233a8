use chrono::{Duration, Utc};
use database::entities::sessions;
use database::services::{
    comment::CommentService, course::CourseService, post::PostService, session::SessionService,
    user::UserService,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};

async fn setup() -> DatabaseConnection {
    let db = database::db::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    Migrator::up(&db, None).await.expect("migration failed");
    db
}

async fn seed_course(db: &DatabaseConnection) -> i32 {
    let subject = CourseService::create_subject(db, "CSCI".to_owned())
        .await
        .unwrap();
    CourseService::create(db, "CSCI 135".to_owned(), subject.id)
        .await
        .unwrap()
        .id
}

async fn seed_user(db: &DatabaseConnection, username: &str) -> i32 {
    UserService::create(
        db,
        username.to_owned(),
        format!("{username}@example.com"),
        "hash".to_owned(),
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn create_and_find_user() {
    let db = setup().await;
    let user = UserService::create(
        &db,
        "richie".to_owned(),
        "richie@example.com".to_owned(),
        "hash".to_owned(),
    )
    .await
    .unwrap();

    let by_username = UserService::find_by_username(&db, "richie").await.unwrap();
    assert_eq!(by_username.as_ref().map(|u| u.id), Some(user.id));

    let by_email = UserService::find_by_email(&db, "richie@example.com")
        .await
        .unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    assert!(UserService::find_by_username(&db, "nobody")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn duplicate_username_rejected_by_store() {
    let db = setup().await;
    seed_user(&db, "richie").await;

    let duplicate = UserService::create(
        &db,
        "richie".to_owned(),
        "other@example.com".to_owned(),
        "hash".to_owned(),
    )
    .await;

    assert!(duplicate.is_err());
}

#[tokio::test]
async fn posts_listed_newest_first_with_attribution() {
    let db = setup().await;
    let course_id = seed_course(&db).await;
    let user_id = seed_user(&db, "richie").await;

    PostService::create(
        &db,
        "first".to_owned(),
        "older post".to_owned(),
        user_id,
        course_id,
    )
    .await
    .unwrap();
    PostService::create(
        &db,
        "second".to_owned(),
        "newer post".to_owned(),
        user_id,
        course_id,
    )
    .await
    .unwrap();

    let (rows, total) = PostService::list_paginated(&db, 1, 20).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(rows[0].0.title, "second");
    assert_eq!(rows[1].0.title, "first");

    let (_, author, course) = &rows[0];
    assert_eq!(author.as_ref().map(|u| u.username.as_str()), Some("richie"));
    assert_eq!(course.as_ref().map(|c| c.name.as_str()), Some("CSCI 135"));
}

#[tokio::test]
async fn pagination_splits_listing() {
    let db = setup().await;
    let course_id = seed_course(&db).await;
    let user_id = seed_user(&db, "richie").await;

    for i in 0..5 {
        PostService::create(
            &db,
            format!("post {i}"),
            "body".to_owned(),
            user_id,
            course_id,
        )
        .await
        .unwrap();
    }

    let (page_one, total) = PostService::list_paginated(&db, 1, 2).await.unwrap();
    assert_eq!(total, 5);
    assert_eq!(page_one.len(), 2);
    assert_eq!(page_one[0].0.title, "post 4");

    let (page_three, _) = PostService::list_paginated(&db, 3, 2).await.unwrap();
    assert_eq!(page_three.len(), 1);
    assert_eq!(page_three[0].0.title, "post 0");
}

#[tokio::test]
async fn post_detail_includes_comments_in_order() {
    let db = setup().await;
    let course_id = seed_course(&db).await;
    let author_id = seed_user(&db, "richie").await;
    let commenter_id = seed_user(&db, "dana").await;

    let post = PostService::create(
        &db,
        "linked lists".to_owned(),
        "how do I return one?".to_owned(),
        author_id,
        course_id,
    )
    .await
    .unwrap();

    CommentService::create(&db, "first reply".to_owned(), commenter_id, post.id)
        .await
        .unwrap();
    CommentService::create(&db, "second reply".to_owned(), author_id, post.id)
        .await
        .unwrap();

    let detail = PostService::get_post_detail(&db, post.id)
        .await
        .unwrap()
        .expect("post should exist");

    let (found, author, course, comments) = detail;
    assert_eq!(found.id, post.id);
    assert_eq!(author.map(|u| u.username), Some("richie".to_owned()));
    assert_eq!(course.map(|c| c.name), Some("CSCI 135".to_owned()));
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].0.detail, "first reply");
    assert_eq!(
        comments[0].1.as_ref().map(|u| u.username.as_str()),
        Some("dana")
    );

    assert!(PostService::get_post_detail(&db, 9999)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn session_roundtrip_and_expiry() {
    let db = setup().await;
    let user_id = seed_user(&db, "richie").await;

    let session = SessionService::create(&db, user_id).await.unwrap();
    let resolved = SessionService::resolve(&db, &session.token).await.unwrap();
    assert_eq!(resolved.map(|u| u.id), Some(user_id));

    // An expired row is treated the same as an unknown token
    let stale = sessions::ActiveModel {
        token: Set("stale-token".to_owned()),
        user_id: Set(user_id),
        created_at: Set(Utc::now().naive_utc() - Duration::days(60)),
        expires_at: Set(Utc::now().naive_utc() - Duration::days(30)),
    };
    stale.insert(&db).await.unwrap();
    assert!(SessionService::resolve(&db, "stale-token")
        .await
        .unwrap()
        .is_none());

    SessionService::delete(&db, &session.token).await.unwrap();
    assert!(SessionService::resolve(&db, &session.token)
        .await
        .unwrap()
        .is_none());

    // Logout of an already-dropped session is not an error
    SessionService::delete(&db, &session.token).await.unwrap();
}

#[tokio::test]
async fn bookmarks_are_global() {
    let db = setup().await;

    CourseService::save_bookmark(&db, "CSCI 135".to_owned())
        .await
        .unwrap();
    CourseService::save_bookmark(&db, "CSCI 135".to_owned())
        .await
        .unwrap();

    let bookmarks = CourseService::list_bookmarks(&db).await.unwrap();
    assert_eq!(bookmarks.len(), 2);
    assert!(bookmarks.iter().all(|b| b.course == "CSCI 135"));
}
