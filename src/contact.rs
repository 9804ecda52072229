//! Contact-form delivery.
//!
//! One POST with a JSON body to the configured mail endpoint. No retries:
//! a failure is terminal for the attempt and the sender decides whether to
//! try again.
//!
//! The error split matters for what the user sees. A non-success HTTP
//! response is a *server-reported* failure and carries the endpoint's own
//! `message` field when it sent one; a network failure gets the generic
//! try-again-later wording. The two must stay distinguishable.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// HTTP request timeout for the submission POST.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback when a failing endpoint sends no usable message body.
const GENERIC_SERVER_ERROR: &str = "Something went wrong.";

#[derive(Error, Debug)]
pub enum SubmitError {
    /// The request never completed (DNS, connect, timeout, TLS).
    #[error("Failed to send message. Please try again later.")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("Error: {message}")]
    Server { status: u16, message: String },
}

/// The contact-form payload, serialized exactly as the endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Error body shape the endpoint uses: `{"message": "..."}`. Anything else
/// collapses to the generic wording.
#[derive(Deserialize)]
struct ServerReply {
    #[serde(default)]
    message: Option<String>,
}

/// Submit `message` to `endpoint`. Success is a 2xx status; the body of a
/// successful response is ignored.
pub fn submit(endpoint: &str, message: &Message) -> Result<(), SubmitError> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client.post(endpoint).json(message).send()?;

    if response.status().is_success() {
        return Ok(());
    }

    let status = response.status().as_u16();
    let message = response
        .json::<ServerReply>()
        .ok()
        .and_then(|reply| reply.message)
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
    Err(SubmitError::Server { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_with_expected_field_names() {
        let msg = Message {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "A question about a post.".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["subject"], "Hello");
        assert_eq!(json["message"], "A question about a post.");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn server_error_displays_its_message() {
        let err = SubmitError::Server {
            status: 400,
            message: "Missing required fields".to_string(),
        };
        assert_eq!(err.to_string(), "Error: Missing required fields");
    }

    #[test]
    fn server_reply_without_message_field_parses() {
        let reply: ServerReply = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert!(reply.message.is_none());
    }

    #[test]
    fn server_reply_with_message_field_parses() {
        let reply: ServerReply = serde_json::from_str(r#"{"message": "Rate limited"}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Rate limited"));
    }
}
