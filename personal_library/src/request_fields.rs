use actix_web::{HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;

/// Decodes body fields sent either as urlencoded form or as json.
/// Body that cannot be decoded is treated as one carrying no fields,
/// so that handlers can answer with their own missing field message.
pub fn read_fields<T: DeserializeOwned + Default>(request: &HttpRequest, body: &[u8]) -> T {
    // Parsed mime has type and subtype lowercased
    let is_json = request
        .mime_type()
        .ok()
        .flatten()
        .map(|mime| mime.essence_str() == "application/json")
        .unwrap_or_default();

    let decoded = if is_json {
        serde_json::from_slice(body).map_err(anyhow::Error::from)
    } else {
        serde_urlencoded::from_bytes(body).map_err(anyhow::Error::from)
    };

    decoded.unwrap_or_else(|err| {
        tracing::warn!("Failed to decode request body {}", err);
        T::default()
    })
}

/// Returns the value only if it was sent and is not empty
pub fn required(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod request_fields_tests {
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test::TestRequest;

    use crate::api::{NewBookFields, NewCommentFields};
    use crate::request_fields::{read_fields, required};

    #[test]
    fn test_reads_urlencoded_form() {
        let request = TestRequest::default()
            .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .to_http_request();
        let fields: NewBookFields = read_fields(&request, b"title=Harry+Potter");
        assert_eq!(fields.title.as_deref(), Some("Harry Potter"));
    }

    #[test]
    fn test_reads_json() {
        let request = TestRequest::default()
            .insert_header((CONTENT_TYPE, "application/json"))
            .to_http_request();
        let fields: NewCommentFields = read_fields(&request, br#"{"comment":"Hello"}"#);
        assert_eq!(fields.comment.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_reads_json_with_mixed_case_content_type() {
        let request = TestRequest::default()
            .insert_header((CONTENT_TYPE, "Application/JSON; charset=UTF-8"))
            .to_http_request();
        let fields: NewBookFields = read_fields(&request, br#"{"title":"Dune"}"#);
        assert_eq!(fields.title.as_deref(), Some("Dune"));
    }

    #[test]
    fn test_reads_scalar_fields_as_text() {
        let request = TestRequest::default()
            .insert_header((CONTENT_TYPE, "application/json"))
            .to_http_request();
        let fields: NewBookFields = read_fields(&request, br#"{"title":123}"#);
        assert_eq!(fields.title.as_deref(), Some("123"));

        let fields: NewCommentFields = read_fields(&request, br#"{"comment":true}"#);
        assert_eq!(fields.comment.as_deref(), Some("true"));

        let fields: NewCommentFields = read_fields(&request, br#"{"comment":0}"#);
        assert_eq!(fields.comment, None);

        let fields: NewCommentFields = read_fields(&request, br#"{"comment":null}"#);
        assert_eq!(fields.comment, None);
    }

    #[test]
    fn test_undecodable_body_has_no_fields() {
        let request = TestRequest::default()
            .insert_header((CONTENT_TYPE, "application/json"))
            .to_http_request();
        let fields: NewCommentFields = read_fields(&request, b"comment=");
        assert_eq!(fields, NewCommentFields::default());

        let request = TestRequest::default().to_http_request();
        let fields: NewBookFields = read_fields(&request, b"");
        assert_eq!(fields, NewBookFields::default());
    }

    #[test]
    fn test_required_rejects_empty() {
        assert_eq!(required(None), None);
        assert_eq!(required(Some(String::new())), None);
        assert_eq!(required(Some(" ".to_string())), Some(" ".to_string()));
    }
}
