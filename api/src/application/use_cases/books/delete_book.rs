use crate::application::ports::book_repository::{BookRepository, BookResult};

pub struct DeleteBook<'a, R: BookRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BookRepository + ?Sized> DeleteBook<'a, R> {
    pub async fn execute(&self, id: i64) -> BookResult<()> {
        self.repo.delete(id).await
    }
}
