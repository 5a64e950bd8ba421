use crate::application::ports::book_repository::{BookRepository, BookResult};
use crate::domain::books::book::{Book, BookDraft};

pub struct CreateBook<'a, R: BookRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BookRepository + ?Sized> CreateBook<'a, R> {
    pub async fn execute(&self, draft: &BookDraft) -> BookResult<Book> {
        self.repo.create(draft).await
    }
}
