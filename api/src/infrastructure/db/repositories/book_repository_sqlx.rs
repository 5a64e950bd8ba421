use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::book_repository::{
    BookRepository, BookRepositoryError, BookResult,
};
use crate::domain::books::book::{Book, BookDraft};
use crate::infrastructure::db::PgPool;

pub struct SqlxBookRepository {
    pub pool: PgPool,
}

impl SqlxBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_book(r: PgRow) -> Book {
    Book {
        id: r.get("id"),
        title: r.get("title"),
        author: r.get("author"),
        description: r.get("description"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl BookRepository for SqlxBookRepository {
    async fn list(&self) -> BookResult<Vec<Book>> {
        let rows = sqlx::query(
            r#"SELECT id, title, author, description, created_at, updated_at
               FROM books
               ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(BookRepositoryError::unexpected)?;
        Ok(rows.into_iter().map(map_book).collect())
    }

    async fn create(&self, draft: &BookDraft) -> BookResult<Book> {
        let row = sqlx::query(
            r#"INSERT INTO books (title, author, description)
               VALUES ($1, $2, $3)
               RETURNING id, title, author, description, created_at, updated_at"#,
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await
        .map_err(BookRepositoryError::unexpected)?;
        Ok(map_book(row))
    }

    async fn get_by_id(&self, id: i64) -> BookResult<Book> {
        let row = sqlx::query(
            r#"SELECT id, title, author, description, created_at, updated_at
               FROM books WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(BookRepositoryError::unexpected)?;
        row.map(map_book).ok_or(BookRepositoryError::NotFound(id))
    }

    async fn update(&self, id: i64, draft: &BookDraft) -> BookResult<Book> {
        let row = sqlx::query(
            r#"UPDATE books
               SET title = $1, author = $2, description = $3, updated_at = now()
               WHERE id = $4
               RETURNING id, title, author, description, created_at, updated_at"#,
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(&draft.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(BookRepositoryError::unexpected)?;
        row.map(map_book).ok_or(BookRepositoryError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> BookResult<()> {
        let res = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(BookRepositoryError::unexpected)?;
        if res.rows_affected() == 0 {
            return Err(BookRepositoryError::NotFound(id));
        }
        Ok(())
    }
}
