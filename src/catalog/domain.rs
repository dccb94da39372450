pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// CatalogService exposes books to the handlers without tying them to the store.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
    async fn save_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<()>;
}
