use async_trait::async_trait;
use dashmap::DashMap;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in process memory, keyed by isbn. Contents are
// lost on shutdown.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: DashMap<String, BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn list_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn get(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        Ok(self.books.get(id).map(|entry| entry.value().clone()))
    }

    async fn upsert(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.books.insert(entity.id(), entity.clone());
        Ok(1)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        Ok(self.books.remove(id).map(|_| 1).unwrap_or(0))
    }
}

impl BookRepository for MemoryBookRepository {}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::repository::Repository;

    fn attributes(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("isbn", attributes(json!({"title": "test book"})));
        let size = books_repo.upsert(&book).await.expect("should create book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(Some(book), loaded);
    }

    #[tokio::test]
    async fn test_should_return_none_for_missing_book() {
        let books_repo = MemoryBookRepository::new();
        let loaded = books_repo.get("missing").await.expect("should query book");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_should_replace_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("isbn", attributes(json!({"title": "test book", "author": "someone"})));
        let _ = books_repo.upsert(&book).await.expect("should create book");

        let replaced = BookEntity::new("isbn", attributes(json!({"title": "new title"})));
        let _ = books_repo.upsert(&replaced).await.expect("should update book");

        let loaded = books_repo.get("isbn").await.expect("should return book").expect("should exist");
        assert_eq!(replaced, loaded);
        assert!(!loaded.attributes.contains_key("author"));
        assert_eq!(1, books_repo.list_all().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_list_books() {
        let books_repo = MemoryBookRepository::new();
        assert!(books_repo.list_all().await.expect("should list books").is_empty());
        for i in 0..50 {
            let book = BookEntity::new(format!("isbn_{}", i).as_str(), attributes(json!({"title": format!("title_{}", i / 10)})));
            let _ = books_repo.upsert(&book).await.expect("should create book");
        }
        let res = books_repo.list_all().await.expect("should list books");
        assert_eq!(50, res.len());
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("isbn", attributes(json!({"title": "test book"})));
        let _ = books_repo.upsert(&book).await.expect("should create book");

        let deleted = books_repo.delete(book.isbn.as_str()).await.expect("should delete book");
        assert_eq!(1, deleted);
        let deleted = books_repo.delete(book.isbn.as_str()).await.expect("should delete missing book");
        assert_eq!(0, deleted);

        let loaded = books_repo.get(book.isbn.as_str()).await.expect("should query book");
        assert!(loaded.is_none());
    }
}
