use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{item_to_value, parse_item};

pub(crate) const ISBN_KEY: &str = "isbn";

const SCAN_PAGE_SIZE: i32 = 500;

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    // The HTTP surface is not paginated, so the scan follows LastEvaluatedKey to the end.
    async fn list_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let res = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(false)
                .set_exclusive_start_key(exclusive_start_key.take())
                .limit(SCAN_PAGE_SIZE)
                .send()
                .await?;
            for item in res.items().unwrap_or_default() {
                records.push(map_to_book(item)?);
            }
            match res.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        Ok(records)
    }

    async fn get(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let res = self.client
            .get_item()
            .table_name(table_name)
            .key(ISBN_KEY, AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await?;
        res.item().map(map_to_book).transpose()
    }

    async fn upsert(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key(ISBN_KEY, AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }
}

impl BookRepository for DDBBookRepository {}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> LibraryResult<BookEntity> {
    serde_json::from_value(item_to_value(map)).map_err(LibraryError::from)
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use aws_sdk_dynamodb::Client;
    use lazy_static::lazy_static;
    use serde_json::{json, Map, Value};

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::ddb_book_repository::{DDBBookRepository, ISBN_KEY};
    use crate::core::domain::Configuration;
    use crate::core::repository::{Repository, RepositoryStore};
    use crate::utils::ddb::{build_db_client, create_table, delete_table};

    // each test uses its own isbn prefix, the table is shared
    lazy_static! {
        static ref CLIENT: AsyncOnce<Client> = AsyncOnce::new(async {
                let client = build_db_client(&Configuration::new(RepositoryStore::LocalDynamoDB)).await;
                let _ = delete_table(&client, "books_repo_test").await;
                let _ = create_table(&client, "books_repo_test", ISBN_KEY).await;
                client
            });
    }

    fn attributes(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_create_get_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books_repo_test");
        let book = BookEntity::new("get_isbn", attributes(json!({"title": "test book", "pages": 12, "tags": ["a"]})));
        let size = books_repo.upsert(&book).await.expect("should create book");
        assert_eq!(1, size);

        let loaded = books_repo.get(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(Some(book), loaded);
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_create_update_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books_repo_test");
        let book = BookEntity::new("update_isbn", attributes(json!({"title": "test book", "author": "someone"})));
        let _ = books_repo.upsert(&book).await.expect("should create book");

        let replaced = BookEntity::new("update_isbn", attributes(json!({"title": "new title"})));
        let size = books_repo.upsert(&replaced).await.expect("should update book");
        assert_eq!(1, size);

        let loaded = books_repo.get("update_isbn").await.expect("should return book").expect("should exist");
        assert_eq!(replaced, loaded);
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_create_scan_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books_repo_test");
        for i in 0..50 {
            let book = BookEntity::new(format!("scan_isbn_{}", i).as_str(),
                                       attributes(json!({"title": format!("title_{}", i / 10)})));
            let _ = books_repo.upsert(&book).await.expect("should create book");
        }
        let res = books_repo.list_all().await.expect("should return books");
        assert_eq!(50, res.iter().filter(|b| b.isbn.starts_with("scan_isbn_")).count());
    }

    #[tokio::test]
    #[ignore = "requires DynamoDB Local on localhost:8000"]
    async fn test_should_create_delete_books() {
        let books_repo = DDBBookRepository::new(CLIENT.get().await.clone(), "books_repo_test");
        let book = BookEntity::new("delete_isbn", attributes(json!({"title": "test book"})));
        let _ = books_repo.upsert(&book).await.expect("should create book");

        let deleted = books_repo.delete(book.isbn.as_str()).await.expect("should delete book");
        assert_eq!(1, deleted);

        let loaded = books_repo.get(book.isbn.as_str()).await.expect("should query book");
        assert!(loaded.is_none());
    }
}
