use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub isbn: String,
    pub book: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, book: BookDto) -> Self {
        Self {
            isbn: isbn.to_string(),
            book,
        }
    }

    // the isbn in the body is ignored, the one from the path is stored
    pub fn build_book(self) -> BookDto {
        let isbn = self.isbn;
        self.book.with_isbn(isbn.as_str())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub isbn: String,
}

impl UpdateBookCommandResponse {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }

    pub fn message(&self) -> String {
        format!("Book updated successfully with ISBN: {}", self.isbn)
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        if self.catalog_service.find_book_by_isbn(req.isbn.as_str()).await?.is_none() {
            return Err(CommandError::not_found(format!("book not found for ISBN: {}", req.isbn).as_str()));
        }
        let book = req.build_book();
        self.catalog_service.save_book(&book).await.map_err(CommandError::from)
            .map(|saved| UpdateBookCommandResponse::new(saved.isbn.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::books::dto::BookDto;
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn build_service() -> Arc<dyn CatalogService> {
        Arc::from(factory::create_catalog_service(&Configuration::new(RepositoryStore::Memory)).await)
    }

    fn parse_book(value: serde_json::Value) -> BookDto {
        serde_json::from_value(value).expect("should parse book")
    }

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = build_service().await;
        let update_cmd = UpdateBookCommand::new(svc.clone());

        let _ = svc.save_book(&parse_book(json!({"isbn": "978-0", "title": "A"}))).await.expect("should add book");
        let req = UpdateBookCommandRequest::new("978-0", parse_book(json!({"isbn": "ignored", "title": "B"})));
        let res = update_cmd.execute(req).await.expect("should update book");
        assert_eq!("Book updated successfully with ISBN: 978-0", res.message());

        let loaded = svc.find_book_by_isbn("978-0").await.expect("should query book");
        assert_eq!(Some(parse_book(json!({"isbn": "978-0", "title": "B"}))), loaded);
        assert!(svc.find_book_by_isbn("ignored").await.expect("should query book").is_none());
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let svc = build_service().await;
        let update_cmd = UpdateBookCommand::new(svc.clone());

        let req = UpdateBookCommandRequest::new("missing", parse_book(json!({"isbn": "missing", "title": "B"})));
        let res = update_cmd.execute(req).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        assert!(svc.find_all_books().await.expect("should list books").is_empty());
    }
}
