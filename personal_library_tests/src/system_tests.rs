use personal_library::api::messages::{
    COMPLETE_DELETE_SUCCESSFUL, DELETE_SUCCESSFUL, MISSING_COMMENT, MISSING_TITLE, NO_BOOK_EXISTS,
};
use personal_library::client::{LibraryClient, LibraryResponse};

const LIBRARY_URL: &str = "http://127.0.0.1:8080";

#[tokio::test]
/// Walks through every endpoint of a running library service
/// Creates a book
/// Lists books
/// Gets the book, comments it, deletes it
/// Finishes with bulk delete
async fn personal_library_e2e_test() {
    let client = LibraryClient::new(LIBRARY_URL).expect("Failed to create client");

    // ADD BOOK
    let created = client
        .add_book("Harry Potter")
        .await
        .expect("Failed to add book")
        .into_json()
        .expect("Book not created");
    assert_eq!(created.title, "Harry Potter");
    let book_id = created.id.to_string();

    let missing_title = client.add_book("").await.expect("Failed to add book");
    assert_eq!(missing_title.message(), Some(MISSING_TITLE));

    // LIST BOOKS
    let books = client
        .list_books()
        .await
        .expect("Failed to list books")
        .into_json()
        .expect("Books not listed");
    assert!(books
        .iter()
        .any(|book| book.id == created.id && book.title == "Harry Potter"));

    // GET BOOK
    let book = client
        .get_book(&book_id)
        .await
        .expect("Failed to get book")
        .into_json()
        .expect("Book not found");
    assert_eq!(book.id, created.id);
    assert_eq!(book.title, "Harry Potter");
    assert!(book.comments.is_empty());
    assert_eq!(book.commentcount, 0);

    let not_found = client.get_book("abc").await.expect("Failed to get book");
    assert_eq!(not_found.message(), Some(NO_BOOK_EXISTS));

    // ADD COMMENT
    let commented = client
        .add_comment(&book_id, "Hello")
        .await
        .expect("Failed to add comment")
        .into_json()
        .expect("Comment not added");
    assert_eq!(commented.id, created.id);
    assert_eq!(commented.comments, vec!["Hello".to_string()]);
    assert_eq!(commented.commentcount, 1);

    let missing_comment = client
        .add_comment(&book_id, "")
        .await
        .expect("Failed to add comment");
    assert_eq!(missing_comment.message(), Some(MISSING_COMMENT));

    let unchanged = client
        .get_book(&book_id)
        .await
        .expect("Failed to get book");
    assert_eq!(unchanged, LibraryResponse::Json(commented));

    let not_found = client
        .add_comment("abc", "Hello")
        .await
        .expect("Failed to add comment");
    assert_eq!(not_found.message(), Some(NO_BOOK_EXISTS));

    // DELETE BOOK
    let deleted = client
        .delete_book(&book_id)
        .await
        .expect("Failed to delete book");
    assert_eq!(deleted.message(), Some(DELETE_SUCCESSFUL));

    let not_found = client.get_book(&book_id).await.expect("Failed to get book");
    assert_eq!(not_found.message(), Some(NO_BOOK_EXISTS));

    let not_found = client
        .delete_book("abc")
        .await
        .expect("Failed to delete book");
    assert_eq!(not_found.message(), Some(NO_BOOK_EXISTS));

    // DELETE ALL
    client.add_book("title1").await.expect("Failed to add book");
    let deleted_all = client
        .delete_all_books()
        .await
        .expect("Failed to delete books");
    assert_eq!(deleted_all.message(), Some(COMPLETE_DELETE_SUCCESSFUL));

    let deleted_all = client
        .delete_all_books()
        .await
        .expect("Failed to delete books");
    assert_eq!(deleted_all.message(), Some(COMPLETE_DELETE_SUCCESSFUL));
}
