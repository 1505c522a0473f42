use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use crate::api::{Book, BookDocument, BookId, BookSummary};
use crate::books_repository::{BookRepository, BookRepositoryError};

pub struct InMemoryBookRepository {
    book_sequence_generator: AtomicI32,
    books: parking_lot::RwLock<BTreeMap<BookId, BookDocument>>,
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self {
            // Postgres SERIAL starts at 1 as well
            book_sequence_generator: AtomicI32::new(1),
            books: Default::default(),
        }
    }
}

#[async_trait::async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn add_book(&self, title: String) -> Result<Book, BookRepositoryError> {
        let id = self.book_sequence_generator.fetch_add(1, Ordering::Relaxed);
        let document = BookDocument::new(title);
        self.books.write().insert(id, document.clone());
        Ok(document.into_book(id))
    }

    async fn list_books(&self) -> Result<Vec<BookSummary>, BookRepositoryError> {
        Ok(self
            .books
            .read()
            .iter()
            .map(|(&book_id, document)| document.summary(book_id))
            .collect())
    }

    async fn get_book(&self, book_id: BookId) -> Result<Book, BookRepositoryError> {
        self.books
            .read()
            .get(&book_id)
            .cloned()
            .map(|document| document.into_book(book_id))
            .ok_or(BookRepositoryError::NotFound(book_id))
    }

    async fn add_comment(
        &self,
        book_id: BookId,
        comment: String,
    ) -> Result<Book, BookRepositoryError> {
        let mut locked_books = self.books.write();
        let document = locked_books
            .get_mut(&book_id)
            .ok_or(BookRepositoryError::NotFound(book_id))?;
        document.push_comment(comment);
        Ok(document.clone().into_book(book_id))
    }

    async fn delete_book(&self, book_id: BookId) -> Result<bool, BookRepositoryError> {
        Ok(self.books.write().remove(&book_id).is_some())
    }

    async fn delete_all_books(&self) -> Result<u64, BookRepositoryError> {
        let mut locked_books = self.books.write();
        let removed = locked_books.len() as u64;
        locked_books.clear();
        Ok(removed)
    }
}
