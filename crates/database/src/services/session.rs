use crate::entities::{sessions, users};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

pub struct SessionService;

impl SessionService {
    /// How long a login session stays valid
    const SESSION_TTL_DAYS: i64 = 30;

    /// Mint a fresh opaque token for the user
    pub async fn create(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<sessions::Model, DbErr> {
        let now = Utc::now().naive_utc();

        sessions::ActiveModel {
            token: Set(Uuid::new_v4().simple().to_string()),
            user_id: Set(user_id),
            created_at: Set(now),
            expires_at: Set(now + Duration::days(Self::SESSION_TTL_DAYS)),
        }
        .insert(db)
        .await
    }

    /// Resolve a token to its user. Expired rows are deleted on sight and
    /// treated the same as unknown tokens.
    pub async fn resolve(
        db: &DatabaseConnection,
        token: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        let session = match sessions::Entity::find_by_id(token.to_owned()).one(db).await? {
            Some(session) => session,
            None => return Ok(None),
        };

        if session.expires_at <= Utc::now().naive_utc() {
            sessions::Entity::delete_by_id(session.token).exec(db).await?;
            return Ok(None);
        }

        users::Entity::find_by_id(session.user_id).one(db).await
    }

    /// Drop a session. Unknown tokens are not an error, so logout is idempotent.
    pub async fn delete(db: &DatabaseConnection, token: &str) -> Result<(), DbErr> {
        sessions::Entity::delete_by_id(token.to_owned()).exec(db).await?;
        Ok(())
    }
}
