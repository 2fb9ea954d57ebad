#![forbid(unsafe_code)]

//! HTTP transport speaking the origin server's protocol.
//!
//! Screens resolve via `GET {base}/screen?screenName={route}`. Payload
//! submissions go to `GET {base}{route}` with each collected
//! [`ComponentPayload`] serialized to JSON and attached as a query item
//! keyed by its component id — an odd encoding, but it is what the
//! deployed service expects.

use async_trait::async_trait;
use sdui_schema::{ChangeSet, ComponentPayload, ViewNode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::TransportError;
use crate::transport::Transport;

/// [`Transport`] implementation over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base: Url,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport against `base`, e.g. `http://localhost:3000`.
    pub fn new(base: &str) -> Result<Self, TransportError> {
        let base = Url::parse(base).map_err(|err| TransportError::request(base, err))?;
        Ok(Self {
            base,
            client: reqwest::Client::new(),
        })
    }

    fn screen_url(&self, route: &str) -> Result<Url, TransportError> {
        let mut url = self
            .base
            .join("/screen")
            .map_err(|err| TransportError::request(route, err))?;
        url.query_pairs_mut().append_pair("screenName", route);
        Ok(url)
    }

    fn submit_url(
        &self,
        route: &str,
        payload: &[ComponentPayload],
    ) -> Result<Url, TransportError> {
        let mut url = self
            .base
            .join(route)
            .map_err(|err| TransportError::request(route, err))?;
        {
            let mut pairs = url.query_pairs_mut();
            for component in payload {
                let json = serde_json::to_string(component)
                    .map_err(|err| TransportError::decode(route, err))?;
                pairs.append_pair(&component.id, &json);
            }
        }
        Ok(url)
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        route: &str,
        url: Url,
    ) -> Result<R, TransportError> {
        debug!(route, %url, "issuing request");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| TransportError::request(route, err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                route: route.to_owned(),
                status: status.as_u16(),
            });
        }
        response
            .json()
            .await
            .map_err(|err| TransportError::decode(route, err))
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn fetch_screen(&self, route: &str) -> Result<ViewNode, TransportError> {
        let url = self.screen_url(route)?;
        self.get_json(route, url).await
    }

    async fn submit_for_changes(
        &self,
        route: &str,
        payload: &[ComponentPayload],
    ) -> Result<ChangeSet, TransportError> {
        let url = self.submit_url(route, payload)?;
        self.get_json(route, url).await
    }

    async fn submit_for_screen(
        &self,
        route: &str,
        payload: &[ComponentPayload],
    ) -> Result<ViewNode, TransportError> {
        let url = self.submit_url(route, payload)?;
        self.get_json(route, url).await
    }
}
