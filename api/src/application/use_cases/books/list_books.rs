use crate::application::ports::book_repository::{BookRepository, BookResult};
use crate::domain::books::book::Book;

pub struct ListBooks<'a, R: BookRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BookRepository + ?Sized> ListBooks<'a, R> {
    pub async fn execute(&self) -> BookResult<Vec<Book>> {
        self.repo.list().await
    }
}
