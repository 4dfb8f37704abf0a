//! Runtime configuration passed explicitly into services and adapters.

use crate::task::domain::{FieldGid, TaskDomainError};

/// Default Asana REST API root.
pub const DEFAULT_ASANA_BASE_URL: &str = "https://app.asana.com/api/1.0";

/// Default client name reported to Asana.
pub const DEFAULT_CLIENT_NAME: &str = "asana-todo-updater";

/// Custom field identifiers the pipelines read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    /// Date field holding when the task was opened.
    pub open_date: FieldGid,
    /// Enum field holding the impact rating.
    pub impact: FieldGid,
    /// Enum field holding the size estimate.
    pub size: FieldGid,
    /// Number field receiving the urgency score.
    pub urgency: FieldGid,
    /// Number field holding the section order key.
    pub order: FieldGid,
}

impl FieldConfig {
    /// Builds the configuration from raw identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyFieldGid`] when any identifier is
    /// empty.
    pub fn from_raw(
        open_date: &str,
        impact: &str,
        size: &str,
        urgency: &str,
        order: &str,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            open_date: FieldGid::new(open_date)?,
            impact: FieldGid::new(impact)?,
            size: FieldGid::new(size)?,
            urgency: FieldGid::new(urgency)?,
            order: FieldGid::new(order)?,
        })
    }
}

/// Connection settings for the Asana adapter.
#[derive(Clone, PartialEq, Eq)]
pub struct AsanaConfig {
    access_token: String,
    base_url: String,
    client_name: String,
}

impl AsanaConfig {
    /// Creates settings for the public Asana API.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_ASANA_BASE_URL.to_owned(),
            client_name: DEFAULT_CLIENT_NAME.to_owned(),
        }
    }

    /// Overrides the API root, e.g. to point at a test server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Overrides the client name sent as the user agent.
    #[must_use]
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    /// Returns the personal access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the API root without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the client name.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }
}

impl std::fmt::Debug for AsanaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsanaConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("client_name", &self.client_name)
            .finish()
    }
}
