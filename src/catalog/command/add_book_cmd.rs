use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) book: BookDto,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub isbn: String,
}

impl AddBookCommandResponse {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }

    pub fn message(&self) -> String {
        format!("Book created successfully with ISBN: {}", self.isbn)
    }
}

// Existence check and write are separate calls, so two concurrent adds of the
// same isbn can both pass the check; the later write wins.
#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.book;
        if book.has_blank_isbn() {
            return Err(CommandError::validation("book isbn is required", Some("isbn".to_string())));
        }
        if self.catalog_service.find_book_by_isbn(book.isbn.as_str()).await?.is_some() {
            return Err(CommandError::duplicate_key(
                format!("book already exists with ISBN: {}", book.isbn).as_str()));
        }
        self.catalog_service.save_book(&book).await.map_err(CommandError::from)
            .map(|saved| AddBookCommandResponse::new(saved.isbn.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn build_service() -> Arc<dyn CatalogService> {
        Arc::from(factory::create_catalog_service(&Configuration::new(RepositoryStore::Memory)).await)
    }

    fn request(value: serde_json::Value) -> AddBookCommandRequest {
        serde_json::from_value(value).expect("should parse request")
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let svc = build_service().await;
        let cmd = AddBookCommand::new(svc.clone());

        let res = cmd.execute(request(json!({"isbn": "978-0", "title": "A"})))
            .await.expect("should add book");
        assert_eq!("Book created successfully with ISBN: 978-0", res.message());

        let loaded = svc.find_book_by_isbn("978-0").await.expect("should query book");
        assert_eq!(Some(json!({"isbn": "978-0", "title": "A"})), loaded.map(|b| serde_json::to_value(b).expect("should serialize")));
    }

    #[tokio::test]
    async fn test_should_reject_blank_isbn() {
        let svc = build_service().await;
        let cmd = AddBookCommand::new(svc.clone());

        for body in [json!({"title": "A"}), json!({"isbn": ""}), json!({"isbn": "   "})] {
            let res = cmd.execute(request(body)).await;
            assert!(matches!(res, Err(CommandError::Validation { .. })));
        }
        assert!(svc.find_all_books().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_isbn() {
        let svc = build_service().await;
        let cmd = AddBookCommand::new(svc.clone());

        let _ = cmd.execute(request(json!({"isbn": "978-0", "title": "A"}))).await.expect("should add book");
        let res = cmd.execute(request(json!({"isbn": "978-0", "title": "B"}))).await;
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));

        let loaded = svc.find_book_by_isbn("978-0").await.expect("should query book").expect("should exist");
        assert_eq!(Some(&json!("A")), loaded.attributes.get("title"));
    }
}
