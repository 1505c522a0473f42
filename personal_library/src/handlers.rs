use std::sync::Arc;

use actix_web::web::{Bytes, Data};
use actix_web::{Error, HttpRequest, HttpResponse};
use paperclip::actix::{api_v2_operation, web};

use crate::api::messages::{
    COMPLETE_DELETE_SUCCESSFUL, COULD_NOT_CREATE_BOOK, COULD_NOT_DELETE_ANY_BOOKS,
    COULD_NOT_FIND_ANY_BOOKS, DELETE_SUCCESSFUL, MISSING_COMMENT, MISSING_TITLE, NO_BOOK_EXISTS,
};
use crate::api::{parse_book_id, NewBookFields, NewCommentFields};
use crate::books_repository::{BookRepository, BookRepositoryError};
use crate::request_fields::{read_fields, required};

/// All answers of the books api are 200, failures carry a fixed text
fn plain_text(message: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}

/// Logs failures other than a missing book before they are collapsed into a message
fn log_failure(operation: &str, err: &BookRepositoryError) {
    if !matches!(err, BookRepositoryError::NotFound(_)) {
        tracing::error!("{} failed {}", operation, err);
    }
}

#[api_v2_operation]
pub async fn health() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().finish())
}

#[api_v2_operation]
pub async fn get_all_books(
    books_repository: Data<Arc<dyn BookRepository>>,
) -> Result<HttpResponse, Error> {
    Ok(match books_repository.list_books().await {
        Ok(books) => HttpResponse::Ok().json(books),
        Err(err) => {
            log_failure("Get all books", &err);
            plain_text(COULD_NOT_FIND_ANY_BOOKS)
        }
    })
}

#[api_v2_operation]
pub async fn add_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    request: HttpRequest,
    body: Bytes,
) -> Result<HttpResponse, Error> {
    let fields: NewBookFields = read_fields(&request, &body);
    let Some(title) = required(fields.title) else {
        return Ok(plain_text(MISSING_TITLE));
    };

    Ok(match books_repository.add_book(title).await {
        Ok(book) => HttpResponse::Ok().json(book.created()),
        Err(err) => {
            log_failure("Add book", &err);
            plain_text(COULD_NOT_CREATE_BOOK)
        }
    })
}

#[api_v2_operation]
pub async fn delete_all_books(
    books_repository: Data<Arc<dyn BookRepository>>,
) -> Result<HttpResponse, Error> {
    Ok(match books_repository.delete_all_books().await {
        Ok(removed) => {
            tracing::info!("Deleted {} books", removed);
            plain_text(COMPLETE_DELETE_SUCCESSFUL)
        }
        Err(err) => {
            log_failure("Delete all books", &err);
            plain_text(COULD_NOT_DELETE_ANY_BOOKS)
        }
    })
}

#[api_v2_operation]
pub async fn get_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let Some(book_id) = parse_book_id(&book_id) else {
        return Ok(plain_text(NO_BOOK_EXISTS));
    };

    Ok(match books_repository.get_book(book_id).await {
        Ok(book) => HttpResponse::Ok().json(book),
        Err(err) => {
            log_failure("Get book", &err);
            plain_text(NO_BOOK_EXISTS)
        }
    })
}

#[api_v2_operation]
pub async fn add_comment(
    books_repository: Data<Arc<dyn BookRepository>>,
    book_id: web::Path<String>,
    request: HttpRequest,
    body: Bytes,
) -> Result<HttpResponse, Error> {
    let fields: NewCommentFields = read_fields(&request, &body);
    let Some(comment) = required(fields.comment) else {
        return Ok(plain_text(MISSING_COMMENT));
    };
    let Some(book_id) = parse_book_id(&book_id) else {
        return Ok(plain_text(NO_BOOK_EXISTS));
    };

    Ok(match books_repository.add_comment(book_id, comment).await {
        Ok(book) => HttpResponse::Ok().json(book),
        Err(err) => {
            log_failure("Add comment", &err);
            plain_text(NO_BOOK_EXISTS)
        }
    })
}

#[api_v2_operation]
pub async fn delete_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let Some(book_id) = parse_book_id(&book_id) else {
        return Ok(plain_text(NO_BOOK_EXISTS));
    };

    Ok(match books_repository.delete_book(book_id).await {
        Ok(true) => plain_text(DELETE_SUCCESSFUL),
        Ok(false) => plain_text(NO_BOOK_EXISTS),
        Err(err) => {
            log_failure("Delete book", &err);
            plain_text(NO_BOOK_EXISTS)
        }
    })
}
