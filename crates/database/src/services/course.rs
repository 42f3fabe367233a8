use crate::entities::{courses, saved_courses, subjects};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct CourseService;

impl CourseService {
    /// All known courses with their subjects, for the search form's option list
    pub async fn list_with_subjects(
        db: &DatabaseConnection,
    ) -> Result<Vec<(courses::Model, Option<subjects::Model>)>, DbErr> {
        courses::Entity::find()
            .order_by_asc(courses::Column::Name)
            .find_also_related(subjects::Entity)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        course_id: i32,
    ) -> Result<Option<courses::Model>, DbErr> {
        courses::Entity::find_by_id(course_id).one(db).await
    }

    pub async fn create_subject(
        db: &DatabaseConnection,
        name: String,
    ) -> Result<subjects::Model, DbErr> {
        subjects::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn create(
        db: &DatabaseConnection,
        name: String,
        subject_id: i32,
    ) -> Result<courses::Model, DbErr> {
        courses::ActiveModel {
            name: Set(name),
            subject_id: Set(subject_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Record a bookmark. Only the course label is stored; the table has no
    /// user reference, so the bookmark list is global.
    pub async fn save_bookmark(
        db: &DatabaseConnection,
        course_label: String,
    ) -> Result<saved_courses::Model, DbErr> {
        saved_courses::ActiveModel {
            course: Set(course_label),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn list_bookmarks(
        db: &DatabaseConnection,
    ) -> Result<Vec<saved_courses::Model>, DbErr> {
        saved_courses::Entity::find()
            .order_by_asc(saved_courses::Column::Id)
            .all(db)
            .await
    }
}
