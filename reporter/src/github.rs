use crate::error::ReporterError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, Url};
use serde::Serialize;
use std::str::FromStr;

/// Default GitHub REST API endpoint.
pub const GITHUB_API_URL: &str = "https://api.github.com";

const PATH: &str = "/repos";
const USER_AGENT: &str = "bench-reporter";
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoId {
    type Err = ReporterError;

    // Segments past `owner/name` are ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split('/');
        match (parts.next(), parts.next()) {
            (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(ReporterError::InvalidRepository(value.to_string())),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CreateComment<'a> {
    pub body: &'a str,
}

/// Minimal GitHub REST client scoped to a single repository.
#[derive(Debug)]
pub struct GitHubClient {
    pub api_url: Url,
    repository: RepoId,
    client: Client,
}

impl GitHubClient {
    /// Builds a client for one repository. The token, when present, is sent
    /// as a bearer `Authorization` header on every request.
    pub fn new(
        api_url: &str,
        repository: RepoId,
        token: Option<&str>,
    ) -> Result<Self, ReporterError> {
        let api_url = Url::parse(api_url).map_err(|_| ReporterError::CannotParseUrl)?;
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        if let Some(token) = token {
            let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ReporterError::InvalidToken)?;
            authorization.set_sensitive(true);
            headers.insert(AUTHORIZATION, authorization);
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            api_url,
            repository,
            client,
        })
    }

    /// Posts a comment on the given issue. Any non-success status is an error
    /// carrying the status code and the response body.
    pub async fn create_issue_comment(
        &self,
        issue_number: u64,
        body: &str,
    ) -> Result<(), ReporterError> {
        let url = self.get_url(&get_comments_path(&self.repository, issue_number))?;
        let response = self
            .client
            .post(url)
            .json(&CreateComment { body })
            .send()
            .await?;
        Self::handle_response(response).await?;
        Ok(())
    }

    pub fn get_url(&self, path: &str) -> Result<Url, ReporterError> {
        self.api_url
            .join(path)
            .map_err(|_| ReporterError::CannotParseUrl)
    }

    async fn handle_response(response: Response) -> Result<Response, ReporterError> {
        let status = response.status();
        match status.is_success() {
            true => Ok(response),
            false => Err(ReporterError::ApiRequest {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

fn get_comments_path(repository: &RepoId, issue_number: u64) -> String {
    format!(
        "{PATH}/{}/{}/issues/{issue_number}/comments",
        repository.owner, repository.name
    )
}
