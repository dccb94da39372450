use tracing::info;
use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::{DDBBookRepository, ISBN_KEY};
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, create_table};

pub(crate) async fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    match config.store {
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config).await;
            Box::new(DDBBookRepository::new(client, config.table_name.as_str()))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config).await;
            if let Err(err) = create_table(&client, config.table_name.as_str(), ISBN_KEY).await {
                // most often the table is already there
                info!("skipped creating {} table: {}", config.table_name, err);
            }
            Box::new(DDBBookRepository::new(client, config.table_name.as_str()))
        }
    }
}
