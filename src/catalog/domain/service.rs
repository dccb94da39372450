use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.list_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        self.book_repository.get(isbn).await.map(|b| b.as_ref().map(BookDto::from))
    }

    async fn save_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.upsert(&BookEntity::from(book)).await?;
        Ok(book.clone())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        self.book_repository.delete(isbn).await.map(|_| ())
    }
}
