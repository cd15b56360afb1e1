//! Integration tests for the SubmissionClient using mockito for HTTP mocking.

use contact_form::domain::{EmailAddress, FieldCase, PersonName, PhoneNumber};
use contact_form::{AsyncSubmissionClient, ContactSubmission, SubmissionClient, SubmissionTransport, TransportError};
use mockito::{Matcher, Server};

fn submission(message: &str) -> ContactSubmission {
    ContactSubmission {
        name: PersonName::new("Al").unwrap(),
        email: EmailAddress::new("al@example.com").unwrap(),
        phone: PhoneNumber::new("+14155552671", None).unwrap(),
        message: message.to_string(),
    }
}

fn part(key: &str, value_pattern: &str) -> Matcher {
    Matcher::Regex(format!(
        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
        key, value_pattern
    ))
}

#[test]
fn test_dispatch_posts_all_four_fields() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/macros/s/abc/exec")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            part("Name", "Al"),
            part("Email", r"al@example\.com"),
            part("Phone", r"\+14155552671"),
            part("Message", ""),
        ]))
        .with_status(200)
        .create();

    let client = SubmissionClient::with_endpoint(
        format!("{}/macros/s/abc/exec", server.url()),
        FieldCase::Capitalized,
    );
    let result = client.dispatch(&submission(""));

    mock.assert();
    assert!(result.is_ok());
    assert_eq!(client.metrics().submissions_dispatched(), 1);
}

#[test]
fn test_dispatch_lowercase_keys() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/exec")
        .match_body(Matcher::AllOf(vec![
            part("name", "Al"),
            part("message", "hello there"),
        ]))
        .with_status(200)
        .create();

    let client =
        SubmissionClient::with_endpoint(format!("{}/exec", server.url()), FieldCase::Lowercase);
    client.dispatch(&submission("hello there")).unwrap();

    mock.assert();
}

#[test]
fn test_error_status_is_opaque() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/exec")
        .with_status(500)
        .with_body("Script function not found: doPost")
        .create();

    let client =
        SubmissionClient::with_endpoint(format!("{}/exec", server.url()), FieldCase::Capitalized);
    let result = client.dispatch(&submission("hi"));

    mock.assert();
    assert!(result.is_ok(), "HTTP status must not surface: {:?}", result);
    assert_eq!(client.metrics().transport_failures(), 0);
}

#[test]
fn test_exactly_one_request_per_dispatch() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/exec")
        .with_status(503)
        .expect(1)
        .create();

    let client =
        SubmissionClient::with_endpoint(format!("{}/exec", server.url()), FieldCase::Capitalized);
    client.dispatch(&submission("")).unwrap();

    mock.assert();
}

#[test]
fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1
    let client = SubmissionClient::with_endpoint(
        "http://127.0.0.1:1/exec".to_string(),
        FieldCase::Capitalized,
    );
    let result = client.dispatch(&submission(""));

    assert!(matches!(result, Err(TransportError::ConnectionFailed(_))), "got {:?}", result);
    assert_eq!(client.metrics().transport_failures(), 1);
    assert_eq!(client.metrics().submissions_dispatched(), 0);
}

#[test]
fn test_unresolvable_host_is_transport_error() {
    let client = SubmissionClient::with_endpoint(
        "http://contact-form.invalid/exec".to_string(),
        FieldCase::Capitalized,
    );
    assert!(client.dispatch(&submission("")).is_err());
}

#[tokio::test]
async fn test_async_client_dispatch() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/exec")
        .match_body(part("Phone", r"\+14155552671"))
        .with_status(200)
        .create_async()
        .await;

    let client = AsyncSubmissionClient::new(SubmissionClient::with_endpoint(
        format!("{}/exec", server.url()),
        FieldCase::Capitalized,
    ));
    let result = client.dispatch(&submission("")).await;

    mock.assert_async().await;
    assert!(result.is_ok());
}
