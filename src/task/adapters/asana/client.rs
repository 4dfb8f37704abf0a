//! `reqwest`-backed implementation of the tracker port for Asana.

use super::models::{DataEnvelope, ErrorEnvelope, PageEnvelope, UpdateTaskRequest};
use crate::config::AsanaConfig;
use crate::task::{
    domain::{FieldGid, FieldValue, TaskGid, TaskRecord},
    ports::{TaskTracker, TrackerError, TrackerResult},
};
use async_trait::async_trait;
use reqwest::{
    Client, RequestBuilder, Response,
    header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Task fields requested on every fetch.
pub const OPT_FIELDS: &str = "name,completed,due_on,start_on,custom_fields";

/// Page size used for collection requests.
const PAGE_LIMIT: &str = "100";

/// Features opted out of through the `Asana-Disable` header.
const DISABLED_FEATURES: &str = "new_goal_memberships,new_user_task_lists";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Asana REST client implementing [`TaskTracker`].
#[derive(Debug, Clone)]
pub struct AsanaTaskTracker {
    client: Client,
    base_url: String,
}

impl AsanaTaskTracker {
    /// Creates a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Unknown`] when the token cannot be used as a
    /// header value or the HTTP client cannot be built.
    pub fn new(config: &AsanaConfig) -> TrackerResult<Self> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.access_token()))
            .map_err(TrackerError::unknown)?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(
            HeaderName::from_static("asana-disable"),
            HeaderValue::from_static(DISABLED_FEATURES),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.client_name())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TrackerError::unknown)?;

        Ok(Self {
            client,
            base_url: config.base_url().to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn fetch_all(&self, path: &str, filters: &[(&str, &str)]) -> TrackerResult<Vec<TaskRecord>> {
        let mut tasks = Vec::new();
        let mut offset: Option<String> = None;
        loop {
            let mut request = self
                .client
                .get(self.url(path))
                .query(filters)
                .query(&[("opt_fields", OPT_FIELDS), ("limit", PAGE_LIMIT)]);
            if let Some(token) = offset.as_deref() {
                request = request.query(&[("offset", token)]);
            }

            let page: PageEnvelope = decode(send(request).await?).await?;
            debug!(path, count = page.data.len(), "fetched page");
            tasks.extend(page.data);
            match page.next_page {
                Some(next) => offset = Some(next.offset),
                None => break,
            }
        }
        Ok(tasks)
    }
}

async fn send(request: RequestBuilder) -> TrackerResult<Response> {
    let response = request.send().await.map_err(|err| {
        let status = err.status().map(|status| status.as_u16());
        TrackerError::service(status, err.to_string())
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .and_then(|envelope| envelope.summary())
        .unwrap_or(body);
    Err(TrackerError::service(Some(status.as_u16()), message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> TrackerResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|err| TrackerError::service(None, err.to_string()))?;
    serde_json::from_slice(&bytes).map_err(TrackerError::unknown)
}

#[async_trait]
impl TaskTracker for AsanaTaskTracker {
    async fn project_tasks(&self, project: &str) -> TrackerResult<Vec<TaskRecord>> {
        self.fetch_all("/tasks", &[("project", project), ("completed_since", "now")])
            .await
    }

    async fn task(&self, task: &TaskGid) -> TrackerResult<TaskRecord> {
        let request = self
            .client
            .get(self.url(&format!("/tasks/{task}")))
            .query(&[("opt_fields", OPT_FIELDS)]);
        let envelope: DataEnvelope<TaskRecord> = decode(send(request).await?).await?;
        Ok(envelope.data)
    }

    async fn section_tasks(&self, section: &str) -> TrackerResult<Vec<TaskRecord>> {
        self.fetch_all(&format!("/sections/{section}/tasks"), &[])
            .await
    }

    async fn update_custom_field(
        &self,
        task: &TaskGid,
        field: &FieldGid,
        value: FieldValue,
    ) -> TrackerResult<()> {
        let body = UpdateTaskRequest::single_field(field.as_str(), value.to_json());
        let request = self
            .client
            .put(self.url(&format!("/tasks/{task}")))
            .json(&body);
        send(request).await?;
        Ok(())
    }
}
