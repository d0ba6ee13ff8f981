//! GitHub Gist API client

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{Result, SyncError};

pub const GIST_FILE_NAME: &str = "review_tasks.json";
pub const GIST_DESCRIPTION: &str = "Obsidian review tasks (auto-generated)";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct GistPayload<'a> {
    description: &'a str,
    public: bool,
    files: HashMap<&'a str, GistFile<'a>>,
}

#[derive(Debug, Serialize)]
struct GistFile<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct GistResponse {
    id: Option<String>,
}

/// Creates or updates the single-file secret gist holding the snapshot
pub struct GistClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GistClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("review-sync/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Update `gist_id` when given, otherwise create a new gist. Returns the gist ID.
    pub async fn upsert(&self, gist_id: Option<&str>, content: &str) -> Result<String> {
        let payload = GistPayload {
            description: GIST_DESCRIPTION,
            public: false,
            files: HashMap::from([(GIST_FILE_NAME, GistFile { content })]),
        };

        match gist_id {
            Some(id) => self.update(id, &payload).await,
            None => self.create(&payload).await,
        }
    }

    async fn create(&self, payload: &GistPayload<'_>) -> Result<String> {
        let url = format!("{}/gists", self.base_url);
        debug!("Creating gist via POST {}", url);

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(payload)
            .send()
            .await?;

        let body: GistResponse = check_status(response).await?.json().await?;
        let id = body
            .id
            .ok_or_else(|| SyncError::InvalidResponse("created gist has no id".to_string()))?;
        info!("Created gist {}", id);
        Ok(id)
    }

    async fn update(&self, gist_id: &str, payload: &GistPayload<'_>) -> Result<String> {
        let url = format!("{}/gists/{}", self.base_url, gist_id);
        debug!("Updating gist via PATCH {}", url);

        let response = self
            .http
            .patch(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(payload)
            .send()
            .await?;

        let body: GistResponse = check_status(response).await?.json().await?;
        let id = body.id.unwrap_or_else(|| gist_id.to_string());
        info!("Updated gist {}", id);
        Ok(id)
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(rejected(status, body))
}

fn rejected(status: StatusCode, body: String) -> SyncError {
    SyncError::RemoteRejected {
        status: status.as_u16(),
        body,
    }
}
