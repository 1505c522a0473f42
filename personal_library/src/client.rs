use anyhow::{bail, Context};
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;

use crate::api::{Book, BookSummary, CreatedBook, NewBookFields, NewCommentFields};

/// Service answers 200 for both outcomes, json body means success
/// and plain text carries one of the fixed messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryResponse<T> {
    Json(T),
    Message(String),
}

impl<T> LibraryResponse<T> {
    /// Returns the json payload, fails with the message otherwise
    pub fn into_json(self) -> anyhow::Result<T> {
        match self {
            LibraryResponse::Json(value) => Ok(value),
            LibraryResponse::Message(message) => bail!("Unexpected message {}", message),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LibraryResponse::Json(_) => None,
            LibraryResponse::Message(message) => Some(message),
        }
    }
}

async fn read_response<T: DeserializeOwned>(
    response: Response,
) -> anyhow::Result<LibraryResponse<T>> {
    if !response.status().is_success() {
        bail!("Unexpected status {}", response.status())
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or_default();

    if is_json {
        Ok(LibraryResponse::Json(
            response.json().await.context("Failed to parse json body")?,
        ))
    } else {
        Ok(LibraryResponse::Message(
            response.text().await.context("Failed to read body")?,
        ))
    }
}

pub struct LibraryClient {
    url: String,
    client: ClientWithMiddleware,
}

impl LibraryClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let client = ClientBuilder::new(reqwest_client)
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// Calls GET /api/books endpoint
    pub async fn list_books(&self) -> anyhow::Result<LibraryResponse<Vec<BookSummary>>> {
        let response = self
            .client
            .get(format!("{}/api/books", self.url))
            .send()
            .await?;
        read_response(response).await
    }

    /// Calls POST /api/books endpoint, title is sent as urlencoded form
    pub async fn add_book(&self, title: &str) -> anyhow::Result<LibraryResponse<CreatedBook>> {
        let response = self
            .client
            .post(format!("{}/api/books", self.url))
            .form(&NewBookFields {
                title: Some(title.to_string()),
            })
            .send()
            .await?;
        read_response(response).await
    }

    /// Calls DELETE /api/books endpoint
    pub async fn delete_all_books(&self) -> anyhow::Result<LibraryResponse<()>> {
        let response = self
            .client
            .delete(format!("{}/api/books", self.url))
            .send()
            .await?;
        read_response(response).await
    }

    /// Calls GET /api/books/{book_id} endpoint
    /// Id is taken as text so that invalid ids can be sent as well
    pub async fn get_book(&self, book_id: &str) -> anyhow::Result<LibraryResponse<Book>> {
        let response = self
            .client
            .get(format!("{}/api/books/{}", self.url, book_id))
            .send()
            .await?;
        read_response(response).await
    }

    /// Calls POST /api/books/{book_id} endpoint
    pub async fn add_comment(
        &self,
        book_id: &str,
        comment: &str,
    ) -> anyhow::Result<LibraryResponse<Book>> {
        let response = self
            .client
            .post(format!("{}/api/books/{}", self.url, book_id))
            .form(&NewCommentFields {
                comment: Some(comment.to_string()),
            })
            .send()
            .await?;
        read_response(response).await
    }

    /// Calls DELETE /api/books/{book_id} endpoint
    pub async fn delete_book(&self, book_id: &str) -> anyhow::Result<LibraryResponse<()>> {
        let response = self
            .client
            .delete(format!("{}/api/books/{}", self.url, book_id))
            .send()
            .await?;
        read_response(response).await
    }
}
