use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// Repository is the storage collaborator: plain key-value semantics over entities,
// with no ordering or transaction guarantees beyond a single call.
#[async_trait]
pub trait Repository<Entity: Identifiable>: Sync + Send {
    // all stored entities, in no particular order
    async fn list_all(&self) -> LibraryResult<Vec<Entity>>;

    // get an entity, None when the id is not stored
    async fn get(&self, id: &str) -> LibraryResult<Option<Entity>>;

    // inserts the entity or fully replaces the one stored under the same id
    async fn upsert(&self, entity: &Entity) -> LibraryResult<usize>;

    // delete an entity, deleting a missing id is not an error
    async fn delete(&self, id: &str) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Memory,
    DynamoDB,
    LocalDynamoDB,
}

impl FromStr for RepositoryStore {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(RepositoryStore::Memory),
            "dynamodb" => Ok(RepositoryStore::DynamoDB),
            "local-dynamodb" => Ok(RepositoryStore::LocalDynamoDB),
            other => Err(LibraryError::validation(
                format!("unknown repository store {}", other).as_str(), Some("BOOKS_STORE".to_string()))),
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::Memory => write!(f, "memory"),
            RepositoryStore::DynamoDB => write!(f, "dynamodb"),
            RepositoryStore::LocalDynamoDB => write!(f, "local-dynamodb"),
        }
    }
}
