use crate::application::ports::book_repository::{BookRepository, BookResult};
use crate::domain::books::book::Book;

pub struct GetBook<'a, R: BookRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BookRepository + ?Sized> GetBook<'a, R> {
    pub async fn execute(&self, id: i64) -> BookResult<Book> {
        self.repo.get_by_id(id).await
    }
}
