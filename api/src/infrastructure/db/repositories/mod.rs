pub mod book_repository_sqlx;
