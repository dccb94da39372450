use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::core::domain::Identifiable;

// BookEntity is the persisted form of a book. Apart from the isbn key it keeps
// whatever descriptive fields (title, author, ...) the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub isbn: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl BookEntity {
    pub fn new(isbn: &str, attributes: Map<String, Value>) -> Self {
        Self {
            isbn: isbn.to_string(),
            attributes,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
