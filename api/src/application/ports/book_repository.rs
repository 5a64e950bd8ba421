use async_trait::async_trait;

use crate::domain::books::book::{Book, BookDraft};

#[derive(thiserror::Error, Debug)]
pub enum BookRepositoryError {
    #[error("book {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Unexpected(anyhow::Error),
}

impl BookRepositoryError {
    pub fn unexpected(err: impl Into<anyhow::Error>) -> Self {
        Self::Unexpected(err.into())
    }
}

pub type BookResult<T> = Result<T, BookRepositoryError>;

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn list(&self) -> BookResult<Vec<Book>>;

    // id and timestamps are assigned by the store
    async fn create(&self, draft: &BookDraft) -> BookResult<Book>;

    async fn get_by_id(&self, id: i64) -> BookResult<Book>;

    // Rewrites title/author/description and refreshes updated_at; created_at is left untouched
    async fn update(&self, id: i64, draft: &BookDraft) -> BookResult<Book>;

    async fn delete(&self, id: i64) -> BookResult<()>;
}
