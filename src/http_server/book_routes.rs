//! Book HTTP Routes
//!
//! CRUD endpoints for the books collection.
//!
//! Every mutating handler holds the store's write lock across both the
//! in-memory change and the persist, so each write to disk reflects all
//! mutations that completed before it.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{Form, FromRequest, Path, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::sync::RwLock;

use crate::id::generate_id;
use crate::store::{Book, BookFields, BookStore};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    pub store: RwLock<BookStore>,
}

impl BookState {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}

// ==================
// Request Body
// ==================

/// Book fields from a JSON or url-encoded form body
///
/// The form decoder is picked when the content type says so; everything else
/// goes through the JSON extractor and its rejections.
pub struct BookBody(pub BookFields);

#[async_trait]
impl<S> FromRequest<S> for BookBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
            .unwrap_or(false);

        if is_form {
            let Form(fields) = Form::<BookFields>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(fields))
        } else {
            let Json(fields) = Json::<BookFields>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(fields))
        }
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(state): State<Arc<BookState>>) -> Response {
    let store = state.store.read().await;
    Json(store.all()).into_response()
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let store = state.store.read().await;
    let book = store.find_by_id(&id).ok_or(ApiError::NotFound)?;
    Ok(Json(book).into_response())
}

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    BookBody(fields): BookBody,
) -> ApiResult<Json<Book>> {
    let book = Book::new(generate_id(), fields);

    let mut store = state.store.write().await;
    store.append(book.clone());
    store.persist().await?;

    tracing::debug!(id = %book.id, "book created");
    Ok(Json(book))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
    BookBody(fields): BookBody,
) -> ApiResult<Json<Book>> {
    let mut store = state.store.write().await;
    let book = store
        .update_fields(&id, fields)
        .cloned()
        .ok_or(ApiError::NotFound)?;
    store.persist().await?;

    tracing::debug!(id = %book.id, "book updated");
    Ok(Json(book))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let mut store = state.store.write().await;
    store.remove_by_id(&id).ok_or(ApiError::NotFound)?;
    store.persist().await?;

    tracing::debug!(id = %id, "book deleted");
    Ok(StatusCode::OK)
}
