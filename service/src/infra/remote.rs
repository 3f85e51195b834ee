//! Remote HTTP catalog [`Source`].

use serde::Deserialize;
use tracerr::Traced;

use crate::domain::Item;

use super::{source, LoadSnapshot, Snapshot, Source};

/// [`Source`] fetching the catalog [`Snapshot`] from another instance's
/// `GET /items/available` endpoint.
///
/// A failed fetch surfaces as a [`source::Error`] and is never retried
/// automatically.
#[derive(Clone, Debug)]
pub struct Remote {
    /// Base URL of the remote instance.
    base_url: String,

    /// HTTP client to fetch with.
    client: reqwest::Client,
}

impl Remote {
    /// Creates a new [`Remote`] source fetching from the provided base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            _ = base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

/// Response shape of the remote `GET /items/available` endpoint.
#[derive(Debug, Deserialize)]
struct Response {
    /// [`Item`]s the remote instance reported.
    items: Vec<Item>,
}

impl Source<LoadSnapshot> for Remote {
    type Ok = Snapshot;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        _: LoadSnapshot,
    ) -> Result<Self::Ok, Self::Err> {
        let url = format!("{}/items/available", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                tracerr::new!(source::Error::Unreachable(e.into()))
            })?
            .error_for_status()
            .map_err(|e| {
                tracerr::new!(source::Error::Malformed(e.into()))
            })?;

        let Response { items } = response.json().await.map_err(|e| {
            tracerr::new!(source::Error::Malformed(e.into()))
        })?;

        tracing::debug!(
            count = items.len(),
            url,
            "fetched remote catalog snapshot",
        );

        Ok(items.into())
    }
}
