use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing orders by post_time descending
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_post_time")
                    .table(Posts::Table)
                    .col(Posts::PostTime)
                    .to_owned(),
            )
            .await?;

        // Index on posts.user_id for usercenter lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_user_id")
                    .table(Posts::Table)
                    .col(Posts::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on comments.post_id for detail page joins
        manager
            .create_index(
                Index::create()
                    .name("idx_comments_post_id")
                    .table(Comments::Table)
                    .col(Comments::PostId)
                    .to_owned(),
            )
            .await?;

        // Index on comments.user_id for usercenter lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_comments_user_id")
                    .table(Comments::Table)
                    .col(Comments::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on sessions.expires_at for the expiry sweep
        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_expires_at")
                    .table(Sessions::Table)
                    .col(Sessions::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_sessions_expires_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_comments_user_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_comments_post_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_posts_user_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_posts_post_time").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Posts {
    Table,
    PostTime,
    UserId,
}

#[derive(Iden)]
enum Comments {
    Table,
    PostId,
    UserId,
}

#[derive(Iden)]
enum Sessions {
    Table,
    ExpiresAt,
}
