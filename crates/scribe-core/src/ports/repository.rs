use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostDraft};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the durable store behind the blog API.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Every stored post. No pagination; order follows the backing store.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Replace `title`, `content` and `img_url` wholesale and refresh
    /// `updated_at`, returning the updated post. `RepoError::NotFound`
    /// if no post has `id`; the store is left unchanged in that case.
    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<Post, RepoError>;
}
