use crate::application::ports::book_repository::{BookRepository, BookResult};
use crate::domain::books::book::{Book, BookDraft};

pub struct UpdateBook<'a, R: BookRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BookRepository + ?Sized> UpdateBook<'a, R> {
    pub async fn execute(&self, id: i64, draft: &BookDraft) -> BookResult<Book> {
        self.repo.update(id, draft).await
    }
}
