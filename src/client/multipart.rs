//! `multipart/form-data` encoding of a submission (RFC 7578).

use crate::domain::FieldCase;
use crate::form::ContactSubmission;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static BOUNDARY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// An encoded multipart body together with its `Content-Type` header value.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    /// Encode every payload field of a submission, one text part per field.
    pub fn encode(submission: &ContactSubmission, case: FieldCase) -> Self {
        let entries: Vec<(&str, &str)> = submission.entries(case).collect();
        let boundary = choose_boundary(&entries);

        let mut body = Vec::new();
        for (key, value) in &entries {
            body.extend_from_slice(b"--");
            body.extend_from_slice(boundary.as_bytes());
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", key).as_bytes(),
            );
            body.extend_from_slice(value.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(b"--");
        body.extend_from_slice(boundary.as_bytes());
        body.extend_from_slice(b"--\r\n");

        Self { boundary, body }
    }

    /// Value for the `Content-Type` request header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }
}

/// Pick a boundary that does not occur in any field value.
fn choose_boundary(entries: &[(&str, &str)]) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    loop {
        let seq = BOUNDARY_COUNTER.fetch_add(1, Ordering::Relaxed);
        let candidate = format!("----ContactFormBoundary{:x}{:x}", nanos, seq);
        if entries.iter().all(|(_, value)| !value.contains(&candidate)) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmailAddress, PersonName, PhoneNumber};

    fn submission(message: &str) -> ContactSubmission {
        ContactSubmission {
            name: PersonName::new("Al").unwrap(),
            email: EmailAddress::new("al@example.com").unwrap(),
            phone: PhoneNumber::new("+14155552671", None).unwrap(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_encodes_all_four_parts() {
        let encoded = MultipartBody::encode(&submission(""), FieldCase::Capitalized);
        let body = String::from_utf8(encoded.as_bytes().to_vec()).unwrap();
        let boundary = encoded.boundary();

        let expected = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"Name\"\r\n\r\nAl\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"Email\"\r\n\r\nal@example.com\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"Phone\"\r\n\r\n+14155552671\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"Message\"\r\n\r\n\r\n\
             --{b}--\r\n",
            b = boundary
        );
        assert_eq!(body, expected);
    }

    #[test]
    fn test_content_type_names_boundary() {
        let encoded = MultipartBody::encode(&submission("hi"), FieldCase::Lowercase);
        assert_eq!(
            encoded.content_type(),
            format!("multipart/form-data; boundary={}", encoded.boundary())
        );
    }

    #[test]
    fn test_boundaries_are_unique() {
        let first = MultipartBody::encode(&submission("hi"), FieldCase::Capitalized);
        let second = MultipartBody::encode(&submission("hi"), FieldCase::Capitalized);
        assert_ne!(first.boundary(), second.boundary());
    }
}
