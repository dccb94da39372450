use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;

// BookDto is the data transfer object for the catalog service and the HTTP payloads.
// A missing isbn deserializes as empty so that validation, not parsing, rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    #[serde(default)]
    pub isbn: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl BookDto {
    // the path isbn is authoritative for updates
    pub fn with_isbn(self, isbn: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            ..self
        }
    }
}

impl Book for BookDto {
    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            attributes: other.attributes.clone(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            attributes: other.attributes.clone(),
        }
    }
}
