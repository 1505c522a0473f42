use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Deserializer, Serialize};

pub type BookId = i32;

/// Fixed plain text bodies returned by the service.
/// Every one of them is sent with status 200, the body is the only discriminator.
pub mod messages {
    pub const COULD_NOT_FIND_ANY_BOOKS: &str = "could not find any books";
    pub const MISSING_TITLE: &str = "missing required field title";
    pub const COULD_NOT_CREATE_BOOK: &str = "could not create book";
    pub const COMPLETE_DELETE_SUCCESSFUL: &str = "complete delete successful";
    pub const COULD_NOT_DELETE_ANY_BOOKS: &str = "could not delete any books";
    pub const NO_BOOK_EXISTS: &str = "no book exists";
    pub const MISSING_COMMENT: &str = "missing required field comment";
    pub const DELETE_SUCCESSFUL: &str = "delete successful";
}

/// Parses identifier taken from the path, text that is not a valid id yields None.
/// Only the canonical form is accepted so `+1` or `01` do not reach book 1.
pub fn parse_book_id(raw: &str) -> Option<BookId> {
    raw.parse()
        .ok()
        .filter(|book_id: &BookId| book_id.to_string() == raw)
}

/// Any scalar a client may put into a text field
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarField {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

/// Reads a text field that clients may also send as number or boolean.
/// Falsy scalars (`0`, `false`) count as not sent, like empty text does.
fn scalar_as_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(
        Option::<ScalarField>::deserialize(deserializer)?.and_then(|value| match value {
            ScalarField::Text(text) => Some(text),
            ScalarField::Integer(0) | ScalarField::Flag(false) => None,
            ScalarField::Float(number) if number == 0.0 || number.is_nan() => None,
            ScalarField::Integer(number) => Some(number.to_string()),
            ScalarField::Float(number) => Some(number.to_string()),
            ScalarField::Flag(flag) => Some(flag.to_string()),
        }),
    )
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Book as it is persisted in the store
pub struct BookDocument {
    pub title: String,
    #[serde(default)]
    pub commentcount: u32,
    #[serde(default)]
    pub comments: Vec<String>,
}

impl BookDocument {
    pub fn new(title: String) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }

    /// Appends comment and bumps the counter, both fields always change together
    pub fn push_comment(&mut self, comment: String) {
        self.comments.push(comment);
        self.commentcount += 1;
    }

    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            comments: self.comments,
            commentcount: self.commentcount,
        }
    }

    pub fn summary(&self, id: BookId) -> BookSummary {
        BookSummary {
            id,
            title: self.title.clone(),
            commentcount: self.commentcount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Full book with all of its comments
pub struct Book {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
    pub comments: Vec<String>,
    pub commentcount: u32,
}

impl Book {
    pub fn created(&self) -> CreatedBook {
        CreatedBook {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Entry of the books listing, comments are not included
pub struct BookSummary {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
    pub commentcount: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Response to book creation
pub struct CreatedBook {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct NewBookFields {
    #[serde(
        default,
        deserialize_with = "scalar_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct NewCommentFields {
    #[serde(
        default,
        deserialize_with = "scalar_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub comment: Option<String>,
}
