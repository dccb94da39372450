use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub isbn: String,
}

impl RemoveBookCommandResponse {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }

    pub fn message(&self) -> String {
        format!("Book deleted successfully with ISBN: {}", self.isbn)
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        if self.catalog_service.find_book_by_isbn(req.isbn.as_str()).await?.is_none() {
            return Err(CommandError::not_found(format!("book not found for ISBN: {}", req.isbn).as_str()));
        }
        self.catalog_service.remove_book(req.isbn.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new(req.isbn.as_str()))
    }
}
