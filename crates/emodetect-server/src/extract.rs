//! Pulling the text to analyze out of an incoming request
//!
//! POST: form field first (urlencoded or multipart), then the JSON body's
//! `text` member.
//! GET (and anything else routed here): the `text` query parameter.
//! Whatever is found is trimmed; nothing found means the empty string.

use axum::body::{Body, Bytes};
use axum::extract::{FromRequest, Multipart};
use axum::http::{header::CONTENT_TYPE, HeaderMap, Method, Request, Uri};
use serde_json::Value;
use tracing::debug;

/// Name of the form field, JSON member and query parameter
pub const TEXT_FIELD: &str = "text";

/// Extract and trim the text to analyze
pub async fn extract_text(method: &Method, uri: &Uri, headers: &HeaderMap, body: Bytes) -> String {
    let raw = if *method == Method::POST {
        post_text(headers, body).await
    } else {
        uri.query()
            .and_then(|query| form_field(query.as_bytes(), TEXT_FIELD))
    };

    raw.map(|text| text.trim().to_string()).unwrap_or_default()
}

async fn post_text(headers: &HeaderMap, body: Bytes) -> Option<String> {
    let media_type = media_type(headers)?;

    let text = match media_type.as_str() {
        "application/x-www-form-urlencoded" => form_field(&body, TEXT_FIELD),
        "multipart/form-data" => multipart_field(headers, body.clone(), TEXT_FIELD).await,
        _ => None,
    };
    if let Some(text) = text.filter(|text| !text.trim().is_empty()) {
        return Some(text);
    }

    if is_json(&media_type) {
        return json_text(&body);
    }

    None
}

/// Lowercased media type without parameters
fn media_type(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let essence = value.split(';').next()?.trim();
    Some(essence.to_ascii_lowercase())
}

fn is_json(media_type: &str) -> bool {
    media_type == "application/json"
        || (media_type.starts_with("application/") && media_type.ends_with("+json"))
}

/// First value of `name` in an `application/x-www-form-urlencoded` payload
fn form_field(input: &[u8], name: &str) -> Option<String> {
    url::form_urlencoded::parse(input)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// First non-file part named `name` in a `multipart/form-data` payload
async fn multipart_field(headers: &HeaderMap, body: Bytes, name: &str) -> Option<String> {
    let request = Request::builder()
        .method(Method::POST)
        .header(CONTENT_TYPE, headers.get(CONTENT_TYPE)?)
        .body(Body::from(body))
        .ok()?;

    let mut multipart = match Multipart::from_request(request, &()).await {
        Ok(multipart) => multipart,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable multipart body");
            return None;
        }
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return None,
            Err(error) => {
                debug!(%error, "Malformed multipart body");
                return None;
            }
        };
        if field.name() == Some(name) && field.file_name().is_none() {
            return field.text().await.ok();
        }
    }
}

/// String member `text` of a top-level JSON object
fn json_text(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get(TEXT_FIELD)?.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    async fn post(content_type: &str, body: &str) -> String {
        let uri: Uri = "/emotionDetector".parse().unwrap();
        let body = Bytes::copy_from_slice(body.as_bytes());
        extract_text(&Method::POST, &uri, &headers(content_type), body).await
    }

    async fn get(uri: &str) -> String {
        let uri: Uri = uri.parse().unwrap();
        extract_text(&Method::GET, &uri, &HeaderMap::new(), Bytes::new()).await
    }

    const BOUNDARY: &str = "emodetect-boundary";

    fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
        let mut body = String::new();
        for (name, file_name, value) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match file_name {
                Some(file_name) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                     Content-Type: text/plain\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n"
                )),
            }
            body.push_str(&format!("\r\n{value}\r\n"));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    #[tokio::test]
    async fn test_query_parameter() {
        assert_eq!(get("/emotionDetector?text=I+love+my+life").await, "I love my life");
        assert_eq!(get("/emotionDetector?text=%20%20padded%20").await, "padded");
        assert_eq!(get("/emotionDetector?text=first&text=second").await, "first");
    }

    #[tokio::test]
    async fn test_query_missing() {
        assert_eq!(get("/emotionDetector").await, "");
        assert_eq!(get("/emotionDetector?other=value").await, "");
    }

    #[tokio::test]
    async fn test_form_field() {
        assert_eq!(
            post("application/x-www-form-urlencoded", "text=I+am+glad+this+happened").await,
            "I am glad this happened"
        );
        assert_eq!(
            post(
                "application/x-www-form-urlencoded; charset=UTF-8",
                "lang=en&text=%E2%9C%93+done"
            )
            .await,
            "\u{2713} done"
        );
    }

    #[tokio::test]
    async fn test_multipart_field() {
        let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
        let body = multipart_body(&[("lang", None, "en"), ("text", None, "  I am glad this happened ")]);
        assert_eq!(post(&content_type, &body).await, "I am glad this happened");
    }

    #[tokio::test]
    async fn test_multipart_skips_file_parts() {
        let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
        let body = multipart_body(&[("text", Some("notes.txt"), "from a file")]);
        assert_eq!(post(&content_type, &body).await, "");

        let body = multipart_body(&[("text", Some("notes.txt"), "from a file"), ("text", None, "typed")]);
        assert_eq!(post(&content_type, &body).await, "typed");
    }

    #[tokio::test]
    async fn test_multipart_unreadable() {
        assert_eq!(post("multipart/form-data", "text=hello").await, "");
        let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
        assert_eq!(post(&content_type, "not a multipart body").await, "");
    }

    #[tokio::test]
    async fn test_json_body() {
        assert_eq!(
            post("application/json", r#"{"text": "  I think I am having fun  "}"#).await,
            "I think I am having fun"
        );
        assert_eq!(post("application/vnd.api+json", r#"{"text": "vendor"}"#).await, "vendor");
    }

    #[tokio::test]
    async fn test_json_body_without_usable_text() {
        assert_eq!(post("application/json", r#"{"text": 42}"#).await, "");
        assert_eq!(post("application/json", r#"{"message": "hi"}"#).await, "");
        assert_eq!(post("application/json", r#"["text"]"#).await, "");
        assert_eq!(post("application/json", "{broken").await, "");
    }

    #[tokio::test]
    async fn test_post_ignores_query_and_other_content_types() {
        let uri: Uri = "/emotionDetector?text=from+query".parse().unwrap();
        let text = extract_text(&Method::POST, &uri, &headers("text/plain"), Bytes::from_static(b"raw words"))
            .await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_post_without_content_type() {
        let uri: Uri = "/emotionDetector".parse().unwrap();
        let text = extract_text(&Method::POST, &uri, &HeaderMap::new(), Bytes::from_static(b"text=hello"))
            .await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_whitespace_only_becomes_empty() {
        assert_eq!(post("application/x-www-form-urlencoded", "text=+%09+%0A").await, "");
        assert_eq!(post("application/json", r#"{"text": "   "}"#).await, "");
        assert_eq!(get("/emotionDetector?text=%20%20%20").await, "");
    }
}
