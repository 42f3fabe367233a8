use crate::entities::comments;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CommentService;

impl CommentService {
    pub async fn create(
        db: &DatabaseConnection,
        detail: String,
        user_id: i32,
        post_id: i32,
    ) -> Result<comments::Model, DbErr> {
        comments::ActiveModel {
            detail: Set(detail),
            user_id: Set(user_id),
            post_id: Set(post_id),
            comment_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn list_by_author(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Vec<comments::Model>, DbErr> {
        comments::Entity::find()
            .filter(comments::Column::UserId.eq(user_id))
            .order_by_desc(comments::Column::CommentTime)
            .order_by_desc(comments::Column::Id)
            .all(db)
            .await
    }
}
