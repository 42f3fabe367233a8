use crate::entities::{comments, courses, posts, users};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

pub type PostWithRefs = (posts::Model, Option<users::Model>, Option<courses::Model>);
pub type CommentWithAuthor = (comments::Model, Option<users::Model>);
pub type PostDetail = (
    posts::Model,
    Option<users::Model>,
    Option<courses::Model>,
    Vec<CommentWithAuthor>,
);

pub struct PostService;

impl PostService {
    pub async fn create(
        db: &DatabaseConnection,
        title: String,
        description: String,
        user_id: i32,
        course_id: i32,
    ) -> Result<posts::Model, DbErr> {
        posts::ActiveModel {
            title: Set(title),
            description: Set(description),
            user_id: Set(user_id),
            course_id: Set(course_id),
            post_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        post_id: i32,
    ) -> Result<Option<posts::Model>, DbErr> {
        posts::Entity::find_by_id(post_id).one(db).await
    }

    /// List posts newest-first with their authors and courses
    pub async fn list_paginated(
        db: &DatabaseConnection,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<PostWithRefs>, u64), DbErr> {
        // Insertion id breaks ties between posts created in the same instant
        let query = posts::Entity::find()
            .order_by_desc(posts::Column::PostTime)
            .order_by_desc(posts::Column::Id);

        let total_items = query.clone().count(db).await?;
        let paginator = query.paginate(db, per_page);
        let page_posts = paginator.fetch_page(page.max(1) - 1).await?; // SeaORM uses 0-based pages

        // Batch fetch referenced authors and courses, then associate in memory
        let user_ids: Vec<i32> = page_posts.iter().map(|p| p.user_id).collect();
        let users_by_id: HashMap<i32, users::Model> = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let course_ids: Vec<i32> = page_posts.iter().map(|p| p.course_id).collect();
        let courses_by_id: HashMap<i32, courses::Model> = courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let rows = page_posts
            .into_iter()
            .map(|post| {
                let author = users_by_id.get(&post.user_id).cloned();
                let course = courses_by_id.get(&post.course_id).cloned();
                (post, author, course)
            })
            .collect();

        Ok((rows, total_items))
    }

    /// Get a single post with its author, course, and comments (oldest first)
    pub async fn get_post_detail(
        db: &DatabaseConnection,
        post_id: i32,
    ) -> Result<Option<PostDetail>, DbErr> {
        let post = match posts::Entity::find_by_id(post_id).one(db).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let author = users::Entity::find_by_id(post.user_id).one(db).await?;
        let course = courses::Entity::find_by_id(post.course_id).one(db).await?;

        let comments = comments::Entity::find()
            .filter(comments::Column::PostId.eq(post_id))
            .order_by_asc(comments::Column::CommentTime)
            .order_by_asc(comments::Column::Id)
            .find_also_related(users::Entity)
            .all(db)
            .await?;

        Ok(Some((post, author, course, comments)))
    }

    pub async fn list_by_author(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<posts::Model>, DbErr> {
        posts::Entity::find()
            .filter(posts::Column::UserId.eq(user_id))
            .order_by_desc(posts::Column::PostTime)
            .order_by_desc(posts::Column::Id)
            .all(db)
            .await
    }
}
