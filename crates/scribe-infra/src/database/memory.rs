//! In-memory post store - used as fallback when PostgreSQL is unavailable.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::{Post, PostDraft};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, PostRepository};

/// Post store backed by a Vec behind an async RwLock.
///
/// Listing preserves insertion order. Note: data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn replace(&self, id: Uuid, draft: PostDraft) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.title = draft.title;
        post.content = draft.content;
        post.img_url = draft.img_url;
        post.updated_at = Utc::now();

        Ok(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::domain::PLACEHOLDER_IMG_URL;

    fn draft(title: &str, content: &str, img_url: Option<&str>) -> PostDraft {
        PostDraft::new(title, content, img_url).unwrap()
    }

    #[tokio::test]
    async fn save_then_list_contains_post() {
        let repo = InMemoryPostRepository::new();
        let saved = repo
            .save(Post::new(draft("First", "Hello", Some("http://x.com/a.png"))))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, saved.id);
        assert_eq!(all[0].title, "First");
        assert_eq!(all[0].img_url, "http://x.com/a.png");
    }

    #[tokio::test]
    async fn replace_overwrites_all_fields() {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .save(Post::new(draft("Old", "Old body", Some("http://x.com/a.png"))))
            .await
            .unwrap();

        // Omitting the image resets it to the placeholder, not the old value
        let updated = repo
            .replace(post.id, draft("New", "New body", None))
            .await
            .unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "New body");
        assert_eq!(updated.img_url, PLACEHOLDER_IMG_URL);
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn replace_missing_id_leaves_store_unchanged() {
        let repo = InMemoryPostRepository::new();
        let post = repo
            .save(Post::new(draft("Keep", "Untouched", None)))
            .await
            .unwrap();

        let err = repo
            .replace(Uuid::new_v4(), draft("New", "New body", None))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Keep");
        assert_eq!(all[0].id, post.id);
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let repo = InMemoryPostRepository::new();
        let post = repo.save(Post::new(draft("Gone", "Soon", None))).await.unwrap();

        repo.delete(post.id).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());

        let err = repo.delete(post.id).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn round_trip_create_update_delete() {
        let repo = InMemoryPostRepository::new();

        let created = repo.save(Post::new(draft("Title", "Body", None))).await.unwrap();
        assert_eq!(repo.find_by_id(created.id).await.unwrap().unwrap().title, "Title");

        let updated = repo
            .replace(created.id, draft("Title 2", "Body 2", Some("http://x.com/b.jpg")))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);

        repo.delete(created.id).await.unwrap();
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
