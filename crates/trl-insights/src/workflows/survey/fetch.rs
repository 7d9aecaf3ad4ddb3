use super::SurveySnapshot;
use crate::config::FormApiConfig;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, info};

/// Failure talking to the upstream form API. Messages are surfaced verbatim
/// to API callers.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("form API {0} is not configured")]
    MissingConfiguration(&'static str),
    #[error("form API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("form API responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("form API returned an unreadable page: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct FormCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for FormCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for the paged `entries` endpoint of the intake form.
#[derive(Debug, Clone)]
pub struct FormApiClient {
    http: reqwest::Client,
    entries_url: String,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
struct EntriesPage {
    #[serde(default)]
    total_count: Option<Value>,
    #[serde(default)]
    entries: Vec<Map<String, Value>>,
}

impl FormApiClient {
    pub fn new(entries_url: impl Into<String>, page_size: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            entries_url: entries_url.into(),
            page_size: page_size.max(1),
        }
    }

    pub fn from_config(config: &FormApiConfig) -> Result<(Self, FormCredentials), FetchError> {
        let url = config
            .url
            .clone()
            .ok_or(FetchError::MissingConfiguration("URL (TRL_FORM_API_URL)"))?;
        let username = config
            .username
            .clone()
            .ok_or(FetchError::MissingConfiguration("user (TRL_FORM_API_USER)"))?;
        let password = config
            .password
            .clone()
            .ok_or(FetchError::MissingConfiguration("key (TRL_FORM_API_KEY)"))?;

        Ok((
            Self::new(url, config.page_size),
            FormCredentials { username, password },
        ))
    }

    /// Pull every entry, page by page. The first failure aborts the fetch.
    pub async fn fetch_snapshot(
        &self,
        credentials: &FormCredentials,
    ) -> Result<SurveySnapshot, FetchError> {
        let mut entries = Vec::new();
        let mut page = 1u32;

        loop {
            let response = self
                .http
                .get(&self.entries_url)
                .basic_auth(&credentials.username, Some(&credentials.password))
                .query(&[
                    ("paging[page_size]", self.page_size.to_string()),
                    ("paging[current_page]", page.to_string()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(FetchError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = response.text().await?;
            let batch: EntriesPage = serde_json::from_str(&body)?;
            let expected = batch.total_count.as_ref().and_then(count_value);
            let received = batch.entries.len();
            debug!(page, received, "fetched form entries page");
            entries.extend(batch.entries);

            let exhausted = received < self.page_size as usize
                || expected.is_some_and(|total| entries.len() >= total);
            if received == 0 || exhausted {
                break;
            }
            page += 1;
        }

        info!(entries = entries.len(), "form API snapshot fetched");
        Ok(entries_to_snapshot(entries))
    }
}

fn count_value(value: &Value) -> Option<usize> {
    match value {
        Value::Number(number) => number.as_u64().map(|count| count as usize),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

/// Flatten JSON entries into a table. Columns keep first-seen order so the
/// snapshot on disk mirrors the form layout.
pub(crate) fn entries_to_snapshot(entries: Vec<Map<String, Value>>) -> SurveySnapshot {
    let mut headers: Vec<String> = Vec::new();
    for entry in &entries {
        for key in entry.keys() {
            if !headers.iter().any(|header| header == key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = entries
        .iter()
        .map(|entry| {
            headers
                .iter()
                .map(|header| entry.get(header).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    SurveySnapshot::new(headers, rows)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn entry(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("entry fixtures must be objects"),
        }
    }

    fn credentials() -> FormCredentials {
        FormCredentials {
            username: "admin".to_string(),
            password: "app-password".to_string(),
        }
    }

    #[test]
    fn entries_flatten_with_union_of_columns() {
        let snapshot = entries_to_snapshot(vec![
            entry(json!({ "id": "1", "1": "Solar Dryer", "14": 5 })),
            entry(json!({ "id": "2", "1": "Water Sensor", "15": "Si", "14": null })),
        ]);

        assert_eq!(snapshot.headers(), ["id", "1", "14", "15"]);
        assert_eq!(snapshot.len(), 2);

        let mut buffer = Vec::new();
        snapshot.write_csv(&mut buffer).expect("csv writes");
        let csv = String::from_utf8(buffer).expect("utf8");
        assert!(csv.contains("1,Solar Dryer,5,"));
        assert!(csv.contains("2,Water Sensor,,Si"));
    }

    #[test]
    fn credentials_debug_is_redacted() {
        let rendered = format!("{:?}", credentials());
        assert!(!rendered.contains("app-password"));
    }

    #[test]
    fn from_config_requires_url_and_credentials() {
        let config = FormApiConfig {
            url: None,
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            page_size: 50,
        };
        let err = FormApiClient::from_config(&config).expect_err("url missing");
        assert!(matches!(err, FetchError::MissingConfiguration(_)));
    }

    #[tokio::test]
    async fn fetch_walks_pages_until_total_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("paging[current_page]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": "3",
                "entries": [
                    { "1": "Alpha", "14": "2" },
                    { "1": "Beta", "14": "5" }
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("paging[current_page]", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 3,
                "entries": [ { "1": "Gamma", "14": "9" } ]
            })))
            .mount(&server)
            .await;

        let client = FormApiClient::new(format!("{}/entries", server.uri()), 2);
        let snapshot = client
            .fetch_snapshot(&credentials())
            .await
            .expect("fetch succeeds");

        assert_eq!(snapshot.len(), 3);
    }

    #[tokio::test]
    async fn fetch_surfaces_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
            .mount(&server)
            .await;

        let client = FormApiClient::new(format!("{}/entries", server.uri()), 10);
        let err = client
            .fetch_snapshot(&credentials())
            .await
            .expect_err("unauthorized");

        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid credentials");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_rejects_non_json_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = FormApiClient::new(format!("{}/entries", server.uri()), 10);
        let err = client
            .fetch_snapshot(&credentials())
            .await
            .expect_err("html body");

        assert!(matches!(err, FetchError::Decode(_)));
    }
}
