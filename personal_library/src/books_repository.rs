pub use in_memory_books_repository::InMemoryBookRepository;
pub use postgres_books_repository::{PostgresBooksRepository, PostgresBooksRepositoryConfig};

use crate::api::{Book, BookId, BookSummary};

mod in_memory_books_repository;
mod postgres_books_repository;

#[derive(thiserror::Error, Debug)]
pub enum BookRepositoryError {
    #[error("Book {0} not found")]
    NotFound(BookId),

    #[error("Failed to deserialize book: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("DatabaseFailure failure {0}")]
    DatabaseFailure(#[from] tokio_postgres::Error),

    #[error("Other error {0}")]
    Other(String),
}

#[async_trait::async_trait]
pub trait BookRepository: Send + Sync {
    /// Adds book with given title and no comments, returns the stored book
    async fn add_book(&self, title: String) -> Result<Book, BookRepositoryError>;
    /// Lists all books in the repository ordered by id
    async fn list_books(&self) -> Result<Vec<BookSummary>, BookRepositoryError>;
    /// Retrieves book with all of its comments
    async fn get_book(&self, book_id: BookId) -> Result<Book, BookRepositoryError>;
    /// Appends comment and increments comment count in one atomic operation,
    /// returns the book after the update
    async fn add_comment(
        &self,
        book_id: BookId,
        comment: String,
    ) -> Result<Book, BookRepositoryError>;
    /// Deletes book, returns true if book was removed and false if it was not found
    async fn delete_book(&self, book_id: BookId) -> Result<bool, BookRepositoryError>;
    /// Deletes every book, returns number of removed books
    async fn delete_all_books(&self) -> Result<u64, BookRepositoryError>;
}
