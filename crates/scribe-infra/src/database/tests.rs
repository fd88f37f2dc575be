#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use scribe_core::domain::{PLACEHOLDER_IMG_URL, Post};
    use scribe_core::error::RepoError;
    use scribe_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            content: "Content".to_owned(),
            img_url: PLACEHOLDER_IMG_URL.to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let expected = model("Test Post");
        let post_id = expected.id;

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![expected]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
    }

    #[tokio::test]
    async fn test_list_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("First"), model("Second")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.list_all().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "First");
        assert_eq!(posts[1].title, "Second");
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let err = BaseRepository::<Post, _>::delete(&repo, uuid::Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
