// Responsible for all communication with the authoritative course API.

use crate::domain::course::CourseRecord;
use crate::domain::resolve::{CourseSource, SourceError};
use crate::infra::config;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

/// Response envelope of `GET {base}/courses/{identifier}`.
#[derive(Debug, Deserialize)]
struct CourseEnvelope {
    success: bool,
    #[serde(default)]
    course: Option<JsonValue>,
    #[serde(default)]
    message: Option<String>,
}

/// Single-attempt HTTP client for the remote course API.
#[derive(Clone)]
pub struct RemoteCourseClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RemoteCourseClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid remote API base URL {:?}: {}", base_url, e))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow::anyhow!("Remote API base URL {} cannot be a base", base_url));
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    /// Builds a client from `REMOTE_API_BASE_URL` / `REMOTE_API_TIMEOUT_SECS`.
    /// Returns `None` when no base URL is configured.
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        match config::remote_api_base_url() {
            Some(url) => Ok(Some(Self::new(&url, config::remote_api_timeout()?)?)),
            None => Ok(None),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/courses/{identifier}` with the identifier percent-encoded as one segment.
    pub fn course_url(&self, identifier: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("courses").push(identifier);
        }
        url
    }
}

/// Interprets a response body. `course: null` (or an empty object) is a miss.
///
/// The API addresses courses by the requested identifier, so a payload that carries
/// neither `id` nor `slug` is keyed by `identifier`.
pub fn parse_envelope(
    identifier: &str,
    body: &[u8],
) -> Result<Option<CourseRecord>, SourceError> {
    let envelope: CourseEnvelope = serde_json::from_slice(body)
        .map_err(|e| SourceError::Format(format!("Invalid course envelope: {}", e)))?;

    if !envelope.success {
        return Err(SourceError::Format(format!(
            "Remote API reported failure: {}",
            envelope.message.as_deref().unwrap_or("no message")
        )));
    }

    let payload = match envelope.course {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(v) => v,
    };

    let mut record: CourseRecord = serde_json::from_value(payload)
        .map_err(|e| SourceError::Format(format!("Invalid course payload: {}", e)))?;

    if record.is_blank() {
        return Ok(None);
    }
    if !record.has_key() {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(SourceError::Format(
                "Course payload has neither id nor slug".to_string(),
            ));
        }
        debug!(identifier, "Course payload has no key; using the requested identifier");
        record.id = Some(identifier.to_string());
    }
    Ok(Some(record))
}

#[async_trait]
impl CourseSource for RemoteCourseClient {
    fn name(&self) -> &str {
        "remote-api"
    }

    async fn fetch(&self, identifier: &str) -> Result<Option<CourseRecord>, SourceError> {
        if identifier.trim().is_empty() {
            return Ok(None);
        }

        let url = self.course_url(identifier);
        debug!(%url, "Querying remote course API");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Transport(format!("HTTP {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        parse_envelope(identifier, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_url_encodes_identifier_as_one_segment() {
        let client = RemoteCourseClient::new("https://api.example.com/v1/", None).unwrap();
        assert_eq!(
            client.course_url("web-dev-101").as_str(),
            "https://api.example.com/v1/courses/web-dev-101"
        );
        assert_eq!(
            client.course_url("a/b c").as_str(),
            "https://api.example.com/v1/courses/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(RemoteCourseClient::new("mailto:someone@example.com", None).is_err());
        assert!(RemoteCourseClient::new("not a url", None).is_err());
    }

    #[test]
    fn success_envelope_yields_record() {
        let body = br#"{"success":true,"course":{"id":"c-7","slug":"web-dev","title":"Web Development","lectures":[]}}"#;
        let record = parse_envelope("web-dev", body).unwrap().unwrap();
        assert_eq!(record.title, "Web Development");
        assert_eq!(record.id.as_deref(), Some("c-7"));
        assert!(record.lectures.is_empty());
    }

    #[test]
    fn keyless_course_is_keyed_by_requested_identifier() {
        let body = br#"{"success":true,"course":{"title":"Web Development","lectures":[]}}"#;
        let record = parse_envelope("web-dev-101", body).unwrap().unwrap();
        assert_eq!(record.title, "Web Development");
        assert_eq!(record.id.as_deref(), Some("web-dev-101"));
        assert_eq!(record.slug, None);
        assert!(record.lectures.is_empty());

        let slug_only = br#"{"success":true,"course":{"slug":"web-dev","title":"Web Development"}}"#;
        let record = parse_envelope("web-dev-101", slug_only).unwrap().unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.slug.as_deref(), Some("web-dev"));
    }

    #[test]
    fn string_typed_display_attributes_do_not_reject_the_course() {
        let body = br#"{"success":true,"course":{"id":"c1","title":"Excel","rating":"4.8","ratingCount":"1200","price":{"amount":10}}}"#;
        let record = parse_envelope("c1", body).unwrap().unwrap();
        assert_eq!(record.display_rating(), 4.8);
        assert_eq!(record.display_rating_count(), 1200);
        assert_eq!(record.display_price(), crate::domain::course::DEFAULT_PRICE);
    }

    #[test]
    fn absent_or_empty_course_is_a_miss() {
        assert_eq!(parse_envelope("x", br#"{"success":true,"course":null}"#).unwrap(), None);
        assert_eq!(parse_envelope("x", br#"{"success":true}"#).unwrap(), None);
        assert_eq!(parse_envelope("x", br#"{"success":true,"course":{}}"#).unwrap(), None);
    }

    #[test]
    fn malformed_bodies_are_format_errors() {
        let bodies: [&[u8]; 4] = [
            b"<html>oops</html>",
            br#"{"success":false,"message":"boom"}"#,
            br#"{"success":true,"course":{"id":"x","lectures":"nope"}}"#,
            br#"{"success":true,"course":{"id":"x","title":7}}"#,
        ];
        for body in bodies {
            match parse_envelope("x", body) {
                Err(SourceError::Format(_)) => {}
                other => panic!("expected format error for {:?}, got {:?}", body, other),
            }
        }
    }
}
