use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::use_cases::books::create_book::CreateBook;
use crate::application::use_cases::books::delete_book::DeleteBook;
use crate::application::use_cases::books::get_book::GetBook;
use crate::application::use_cases::books::list_books::ListBooks;
use crate::application::use_cases::books::update_book::UpdateBook;
use crate::bootstrap::app_context::AppContext;
use crate::domain::books::book as domain;
use crate::presentation::http::response::{
    ApiError, ApiResponse, BookEnvelope, BookListEnvelope, MessageEnvelope,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i64,
    #[schema(example = "1984")]
    pub title: String,
    #[schema(example = "George Orwell")]
    pub author: String,
    #[schema(example = "A dystopian novel")]
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<domain::Book> for Book {
    fn from(b: domain::Book) -> Self {
        Book {
            id: b.id,
            title: b.title,
            author: b.author,
            description: b.description,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookRequest {
    #[schema(example = "Test Book")]
    pub title: String,
    #[schema(example = "Test Author")]
    pub author: String,
    #[schema(example = "Test Desc")]
    pub description: String,
}

impl From<BookRequest> for domain::BookDraft {
    fn from(req: BookRequest) -> Self {
        domain::BookDraft::new(req.title, req.author, req.description)
    }
}

fn parse_book_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest("Invalid book ID".into()))
}

fn validated_draft(
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<domain::BookDraft, ApiError> {
    let Json(req) = payload?;
    let draft = domain::BookDraft::from(req);
    draft.validate()?;
    Ok(draft)
}

#[utoipa::path(get, path = "/books", tag = "Books",
    responses(
        (status = 200, body = BookListEnvelope),
        (status = 500, body = MessageEnvelope)
    ))]
pub async fn list_books(
    State(ctx): State<AppContext>,
) -> Result<Json<BookListEnvelope>, ApiError> {
    let repo = ctx.book_repo();
    let uc = ListBooks {
        repo: repo.as_ref(),
    };
    let books = uc.execute().await?;
    Ok(ApiResponse::ok(books.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/books", tag = "Books", request_body = BookRequest,
    responses(
        (status = 200, body = BookEnvelope),
        (status = 400, body = MessageEnvelope),
        (status = 500, body = MessageEnvelope)
    ))]
pub async fn create_book(
    State(ctx): State<AppContext>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookEnvelope>, ApiError> {
    let draft = validated_draft(payload)?;
    let repo = ctx.book_repo();
    let uc = CreateBook {
        repo: repo.as_ref(),
    };
    let book = uc.execute(&draft).await?;
    tracing::debug!(book_id = book.id, "book_created");
    Ok(ApiResponse::ok(book.into()))
}

#[utoipa::path(get, path = "/books/{id}", tag = "Books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, body = BookEnvelope),
        (status = 400, body = MessageEnvelope),
        (status = 404, body = MessageEnvelope),
        (status = 500, body = MessageEnvelope)
    ))]
pub async fn get_book(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<BookEnvelope>, ApiError> {
    let id = parse_book_id(&id)?;
    let repo = ctx.book_repo();
    let uc = GetBook {
        repo: repo.as_ref(),
    };
    let book = uc.execute(id).await?;
    Ok(ApiResponse::ok(book.into()))
}

#[utoipa::path(put, path = "/books/{id}", tag = "Books", request_body = BookRequest,
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, body = BookEnvelope),
        (status = 400, body = MessageEnvelope),
        (status = 404, body = MessageEnvelope),
        (status = 500, body = MessageEnvelope)
    ))]
pub async fn update_book(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookEnvelope>, ApiError> {
    let id = parse_book_id(&id)?;
    let draft = validated_draft(payload)?;
    let repo = ctx.book_repo();
    let uc = UpdateBook {
        repo: repo.as_ref(),
    };
    let book = uc.execute(id, &draft).await?;
    tracing::debug!(book_id = book.id, "book_updated");
    Ok(ApiResponse::ok(book.into()))
}

#[utoipa::path(delete, path = "/books/{id}", tag = "Books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, body = MessageEnvelope),
        (status = 400, body = MessageEnvelope),
        (status = 404, body = MessageEnvelope),
        (status = 500, body = MessageEnvelope)
    ))]
pub async fn delete_book(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageEnvelope>, ApiError> {
    let id = parse_book_id(&id)?;
    let repo = ctx.book_repo();
    let uc = DeleteBook {
        repo: repo.as_ref(),
    };
    uc.execute(id).await?;
    tracing::debug!(book_id = id, "book_deleted");
    Ok(MessageEnvelope::message("Book deleted successfully"))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(ctx)
}
