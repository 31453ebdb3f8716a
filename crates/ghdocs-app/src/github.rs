// Rust guideline compliant 2026-02-09

//! REST client for GitHub-compatible hosts.

use crate::content::decode_content;
use crate::error::{AppError, Result};
use crate::pagination::Pager;
use crate::source::{DocSource, IssueQuery};
use async_trait::async_trait;
use ghdocs_core::{Config, ContentEntry, Error as CoreError, FileContent, Issue, IssueComment, IssueState};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const API_VERSION: &str = "2022-11-28";
const RETRY_BACKOFF_MS: u64 = 250;

/// `DocSource` backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Url,
    owner: String,
    repo: String,
    branch: String,
    per_page: u32,
    max_pages: u32,
    max_retries: u32,
}

#[derive(Debug, Deserialize)]
struct FileResponse {
    name: String,
    path: String,
    #[serde(default)]
    sha: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GithubClient {
    /// Creates a client for the repository named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API base URL or token is malformed, or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|err| {
            CoreError::InvalidConfig(format!(
                "Invalid api_base_url '{}': {}",
                config.api_base_url, err
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::InvalidConfig(format!(
                "api_base_url '{}' cannot carry a path",
                config.api_base_url
            ))
            .into());
        }

        let http = Client::builder()
            .default_headers(default_headers(config.token.as_deref())?)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            branch: config.branch.clone(),
            per_page: config.per_page,
            max_pages: config.max_pages,
            max_retries: config.max_retries,
        })
    }

    /// Builds a URL under `repos/{owner}/{repo}/`.
    fn repo_endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut path = vec!["repos", self.owner.as_str(), self.repo.as_str()];
        path.extend_from_slice(segments);
        self.endpoint(&path)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Core(CoreError::InvalidConfig(
                    "api_base_url cannot carry a path".to_string(),
                ))
            })?
            .pop_if_empty()
            .extend(segments.iter().filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    fn contents_endpoint(&self, path: &str) -> Result<Url> {
        let mut segments = vec!["contents"];
        segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
        let mut url = self.repo_endpoint(&segments)?;
        url.query_pairs_mut().append_pair("ref", &self.branch);
        Ok(url)
    }

    /// Sends a GET request, retrying transient failures.
    async fn send(&self, url: &Url) -> Result<reqwest::Response> {
        let mut attempt = 0;
        loop {
            tracing::debug!(url = %url, attempt, "GET");
            let outcome = match self.http.get(url.clone()).send().await {
                Ok(response) => check_status(url, response).await,
                Err(err) => Err(AppError::from(err)),
            };

            match outcome {
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(url = %url, attempt, error = %err, "retrying request");
                    tokio::time::sleep(Duration::from_millis(RETRY_BACKOFF_MS * u64::from(attempt)))
                        .await;
                }
                other => return other,
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let response = self.send(url).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches pages until `limit` kept items are collected or the listing ends.
    ///
    /// `items_key` selects the array inside a wrapper object (search results).
    async fn paginate<T, F>(
        &self,
        url: Url,
        items_key: Option<&str>,
        limit: usize,
        keep: F,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let mut pager = Pager::new(self.per_page, self.max_pages);
        let mut items = Vec::new();

        while let Some(page) = pager.next_page() {
            let mut page_url = url.clone();
            page_url
                .query_pairs_mut()
                .append_pair("per_page", &pager.per_page().to_string())
                .append_pair("page", &page.to_string());

            let response = self.send(&page_url).await?;
            let link = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let body: Value = serde_json::from_str(&response.text().await?)?;
            let batch = match items_key {
                Some(key) => body.get(key).cloned().unwrap_or(Value::Array(Vec::new())),
                None => body,
            };
            let batch: Vec<T> = serde_json::from_value(batch)?;

            pager.record(batch.len(), link.as_deref());
            items.extend(batch.into_iter().filter(|item| keep(item)));
            if items.len() >= limit {
                items.truncate(limit);
                break;
            }
        }

        tracing::debug!(url = %url, count = items.len(), "paginated listing complete");
        Ok(items)
    }
}

#[async_trait]
impl DocSource for GithubClient {
    async fn list_directory(&self, path: &str) -> Result<Vec<ContentEntry>> {
        let url = self.contents_endpoint(path)?;
        let body: Value = self.get_json(&url).await?;
        if !body.is_array() {
            return Err(AppError::InvalidInput(format!("'{}' is not a directory", path)));
        }
        Ok(serde_json::from_value(body)?)
    }

    async fn fetch_file(&self, path: &str) -> Result<FileContent> {
        let url = self.contents_endpoint(path)?;
        let body: Value = self.get_json(&url).await?;
        if body.is_array() {
            return Err(AppError::InvalidInput(format!("'{}' is a directory", path)));
        }

        let file: FileResponse = serde_json::from_value(body)?;
        if file.kind != "file" {
            return Err(AppError::InvalidInput(format!(
                "'{}' is a {}, not a file",
                path, file.kind
            )));
        }

        let content = decode_content(
            &file.path,
            file.encoding.as_deref(),
            file.content.as_deref().unwrap_or_default(),
        )?;

        Ok(FileContent {
            name: file.name,
            path: file.path,
            sha: file.sha,
            content,
            html_url: file.html_url,
        })
    }

    async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<Issue>> {
        let mut url = self.repo_endpoint(&["issues"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("state", query.state.as_str());
            if !query.labels.is_empty() {
                pairs.append_pair("labels", &query.labels.join(","));
            }
        }
        self.paginate(url, None, query.effective_limit(), |issue: &Issue| {
            !issue.is_pull_request()
        })
        .await
    }

    async fn get_issue(&self, number: u64) -> Result<Issue> {
        let number_segment = number.to_string();
        let url = self.repo_endpoint(&["issues", &number_segment])?;
        let issue: Issue = self.get_json(&url).await?;
        if issue.is_pull_request() {
            return Err(AppError::RemoteNotFound(format!(
                "#{} is a pull request, not an issue",
                number
            )));
        }
        Ok(issue)
    }

    async fn list_issue_comments(&self, number: u64) -> Result<Vec<IssueComment>> {
        let number_segment = number.to_string();
        let url = self.repo_endpoint(&["issues", &number_segment, "comments"])?;
        let limit = (self.per_page as usize).saturating_mul(self.max_pages as usize);
        self.paginate(url, None, limit, |_: &IssueComment| true).await
    }

    async fn search_issues(&self, text: &str, query: &IssueQuery) -> Result<Vec<Issue>> {
        let mut url = self.endpoint(&["search", "issues"])?;
        let q = build_search_query(&self.owner, &self.repo, text, query);
        url.query_pairs_mut().append_pair("q", &q);
        self.paginate(url, Some("items"), query.effective_limit(), |issue: &Issue| {
            !issue.is_pull_request()
        })
        .await
    }
}

/// Builds the `q` parameter of an issue search scoped to one repository.
#[must_use]
pub fn build_search_query(owner: &str, repo: &str, text: &str, query: &IssueQuery) -> String {
    let mut q = format!("{} repo:{}/{} is:issue", text.trim(), owner, repo);
    match query.state {
        IssueState::Open => q.push_str(" state:open"),
        IssueState::Closed => q.push_str(" state:closed"),
        IssueState::All => {}
    }
    for label in &query.labels {
        q.push_str(&format!(" label:\"{}\"", label));
    }
    q
}

fn default_headers(token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
    headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("ghdocs/", env!("CARGO_PKG_VERSION"))),
    );
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim())).map_err(|_| {
            CoreError::InvalidConfig("token contains characters not allowed in a header".to_string())
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

/// Turns non-success statuses into errors.
async fn check_status(url: &Url, response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::RemoteNotFound(url.path().to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
    Err(AppError::Remote {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GithubClient {
        GithubClient::new(&Config::default()).expect("client")
    }

    #[test]
    fn test_contents_endpoint() {
        let url = client().contents_endpoint("docs/_docs/04_reference").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/gruntwork-io/terragrunt/contents/docs/_docs/04_reference?ref=main"
        );
    }

    #[test]
    fn test_contents_endpoint_escapes_segments() {
        let url = client().contents_endpoint("/docs/with space/").unwrap();
        assert!(url.path().ends_with("/contents/docs/with%20space"));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = Config {
            api_base_url: "https://ghe.example.com/api/v3/".to_string(),
            ..Config::default()
        };
        let client = GithubClient::new(&config).unwrap();
        let url = client.endpoint(&["search", "issues"]).unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/search/issues");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let config = Config {
            api_base_url: "not a url".to_string(),
            ..Config::default()
        };
        let err = GithubClient::new(&config).unwrap_err();
        assert_eq!(err.code(), crate::ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_build_search_query() {
        let query = IssueQuery {
            state: IssueState::Closed,
            labels: vec!["bug".to_string(), "good first issue".to_string()],
            limit: 10,
        };
        let q = build_search_query("acme", "docs", "  cache miss ", &query);
        assert_eq!(
            q,
            "cache miss repo:acme/docs is:issue state:closed label:\"bug\" label:\"good first issue\""
        );

        let all = IssueQuery {
            state: IssueState::All,
            ..IssueQuery::default()
        };
        assert_eq!(build_search_query("a", "b", "x", &all), "x repo:a/b is:issue");
    }

    #[test]
    fn test_default_headers() {
        let headers = default_headers(Some("ghp_abc")).unwrap();
        assert_eq!(headers[ACCEPT], "application/vnd.github+json");
        assert_eq!(headers[AUTHORIZATION], "Bearer ghp_abc");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert!(headers[USER_AGENT].to_str().unwrap().starts_with("ghdocs/"));

        let anonymous = default_headers(None).unwrap();
        assert!(anonymous.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_token_with_newline_rejected() {
        assert!(default_headers(Some("bad\ntoken")).is_err());
    }
}
