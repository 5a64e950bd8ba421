use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Client-editable fields of a book. Identifier and timestamps are owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct BookDraft {
    #[validate(length(min = 3, max = 100, message = "title must be 3 to 100 characters"))]
    pub title: String,
    #[validate(length(min = 3, max = 100, message = "author must be 3 to 100 characters"))]
    pub author: String,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "description is required and must be at most 1000 characters"
    ))]
    pub description: String,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            description: description.into(),
        }
    }
}
