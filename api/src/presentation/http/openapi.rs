use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
        paths(
            crate::presentation::http::books::list_books,
            crate::presentation::http::books::create_book,
            crate::presentation::http::books::get_book,
            crate::presentation::http::books::update_book,
            crate::presentation::http::books::delete_book,
            crate::presentation::http::health::health,
        ),
        components(schemas(
            crate::presentation::http::books::Book,
            crate::presentation::http::books::BookRequest,
            crate::presentation::http::response::FieldError,
            crate::presentation::http::response::BookEnvelope,
            crate::presentation::http::response::BookListEnvelope,
            crate::presentation::http::response::MessageEnvelope,
            crate::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Books", description = "Book records management"),
            (name = "Health", description = "System health checks")
        )
    )]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let mut paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        paths.sort();
        assert_eq!(paths, vec!["/books", "/books/{id}", "/health"]);
    }
}
