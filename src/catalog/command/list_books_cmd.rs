use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.find_all_books().await
            .map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::books::dto::BookDto;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn build_service() -> Arc<dyn CatalogService> {
        Arc::from(factory::create_catalog_service(&Configuration::new(RepositoryStore::Memory)).await)
    }

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = build_service().await;
        let list_cmd = ListBooksCommand::new(svc.clone());

        let res = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert!(res.books.is_empty());

        let book: BookDto = serde_json::from_value(json!({"isbn": "978-0", "title": "A"})).expect("should parse book");
        let _ = svc.save_book(&book).await.expect("should add book");
        let res = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert_eq!(vec![book], res.books);
        assert_eq!(json!([{"isbn": "978-0", "title": "A"}]), serde_json::to_value(&res).expect("should serialize"));
    }
}
