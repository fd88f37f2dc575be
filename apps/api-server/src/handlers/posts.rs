//! Blog post handlers - create, list, update and delete.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use scribe_core::domain::{Post, PostDraft};
use scribe_core::error::{DomainError, RepoError};
use scribe_shared::dto::SavePostRequest;
use scribe_shared::{BlogResponse, MessageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Pull the required fields out of the request body. Missing or blank
/// `title`/`content` answers the contract's 400 before any store call.
fn draft_from_request(req: &SavePostRequest) -> AppResult<PostDraft> {
    let title = req.title.as_deref().unwrap_or("").trim();
    let content = req.content.as_deref().unwrap_or("").trim();

    if title.is_empty() || content.is_empty() {
        return Err(AppError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    Ok(PostDraft::new(title, content, req.img_url.as_deref())?)
}

/// POST /add
pub async fn add(
    state: web::Data<AppState>,
    body: web::Json<SavePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    tracing::debug!(?req, "Received blog data");

    let draft = draft_from_request(&req)?;

    let saved = state
        .posts
        .save(Post::new(draft))
        .await
        .map_err(|e| AppError::store("Internal server error", e))?;

    Ok(HttpResponse::Created().json(BlogResponse::new("Blog posted successfully", saved)))
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state
        .posts
        .list_all()
        .await
        .map_err(|e| AppError::store("Error fetching blogs", e))?;

    Ok(HttpResponse::Ok().json(blogs))
}

/// PUT /update/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<SavePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    tracing::debug!(%id, ?req, "Received update request");

    let draft = draft_from_request(&req)?;

    let updated = state.posts.replace(id, draft).await.map_err(|e| match e {
        RepoError::NotFound => DomainError::NotFound(id).into(),
        other => AppError::store("Internal server error", other),
    })?;

    Ok(HttpResponse::Ok().json(BlogResponse::new("Blog updated successfully", updated)))
}

/// DELETE /delete/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => DomainError::NotFound(id).into(),
        other => AppError::store("Error deleting blog", other),
    })?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog deleted successfully")))
}
