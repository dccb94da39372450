use axum::{
    body::HttpBody,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    BoxError, Router,
};
use serde_json::Value;
use tracing::info;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::middleware::{cors_layer, trace_layer};

const ISBN_PATH_PREFIX: &str = "id:";

// Generic over the request body so the same routes serve both the HTTP listener
// and the Lambda runtime.
pub(crate) fn build_router<B>(state: AppState) -> Router<(), B>
    where
        B: HttpBody + Send + 'static,
        B::Data: Send,
        B::Error: Into<BoxError>,
{
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:key",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .layer(cors_layer())
        .layer(trace_layer())
        .with_state(state)
}

// books are addressed as /books/id:{isbn}; a blank isbn names no book
fn isbn_from_path(key: &str) -> Result<&str, ServerError> {
    key.strip_prefix(ISBN_PATH_PREFIX)
        .filter(|isbn| !isbn.trim().is_empty())
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("no book resource at {}", key)))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Response, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service).execute(ListBooksCommandRequest::default()).await?;
    if res.books.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(res).into_response())
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, String), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog_service).execute(req).await?;
    info!("added book {}", res.isbn);
    Ok((StatusCode::CREATED, res.message()))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(key): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(isbn_from_path(key.as_str())?);
    let res = GetBookCommand::new(state.catalog_service).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(key): Path<String>,
    json: Json<Value>) -> Result<String, ServerError> {
    let isbn = isbn_from_path(key.as_str())?;
    let book: BookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = UpdateBookCommand::new(state.catalog_service).execute(UpdateBookCommandRequest::new(isbn, book)).await?;
    info!("updated book {}", res.isbn);
    Ok(res.message())
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(key): Path<String>) -> Result<String, ServerError> {
    let req = RemoveBookCommandRequest::new(isbn_from_path(key.as_str())?);
    let res = RemoveBookCommand::new(state.catalog_service).execute(req).await?;
    info!("removed book {}", res.isbn);
    Ok(res.message())
}
