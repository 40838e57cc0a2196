//! Remote user list: the record type and the one-shot HTTP loader.

mod dto;

use reqwest::{Client, Url, header};
use tracing::{debug, info};

use crate::error::LoadError;

pub use dto::parse_users;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/?results=30";

const USER_AGENT: &str = concat!("user-search/", env!("CARGO_PKG_VERSION"));

/// One user as shown in the list. `id` is unique within a loaded list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub thumbnail_url: String,
}

impl UserRecord {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fetches the user list from a single endpoint.
///
/// No timeout and no retries: a hung request keeps the caller waiting.
pub struct UserLoader {
    client: Client,
    endpoint: Url,
}

impl UserLoader {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, LoadError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue the GET, wait for the whole body and decode it.
    pub async fn load(&self) -> Result<Vec<UserRecord>, LoadError> {
        debug!(endpoint = %self.endpoint, "requesting user list");
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(LoadError::new(format!("unexpected status {status}")));
        }

        let users = parse_users(&body)?;
        info!(count = users.len(), bytes = body.len(), "user list loaded");
        Ok(users)
    }
}
