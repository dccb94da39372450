use std::sync::Arc;
use axum::http::StatusCode;
use tracing::{error, warn};
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

// AppState is built once at startup; the store behind the service lives as long
// as the router does.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> AppState {
        AppState {
            catalog_service: Arc::from(catalog_service),
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    warn!("rejected request body: {}", err);
    (StatusCode::BAD_REQUEST, format!("invalid book: {}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Database { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::DuplicateKey { .. } => {
                StatusCode::CONFLICT
            }
            CommandError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CommandError::Runtime { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::Serialization { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        if status.is_server_error() {
            error!("request failed: {:?}", err);
        } else {
            warn!("request rejected: {}", err);
        }
        (status, err.to_string())
    }
}
