//! PostgreSQL repository implementation for posts.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use scribe_core::domain::{Post, PostDraft};
use scribe_core::error::RepoError;
use scribe_core::ports::PostRepository;

use super::entity::post::Entity as PostEntity;
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find().all(&self.db).await.map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<Post, RepoError> {
        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        // Wholesale replacement of the mutable fields, never a merge.
        let mut active = existing.into_active_model();
        active.title = Set(draft.title);
        active.content = Set(draft.content);
        active.img_url = Set(draft.img_url);
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&self.db).await.map_err(map_db_err)?;

        Ok(updated.into())
    }
}
