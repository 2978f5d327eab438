//! HTTP client for the events service.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{EventsApi, RemoteError, RemoteResult};
use crate::config::ClientConfig;
use crate::event::{EventId, NewUserEvent, UserEvent};

/// HTTP client for `{base_url}/events`.
#[derive(Clone)]
pub struct EventsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RemoteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(EventsClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> RemoteResult<Self> {
        Self::new(&config.server_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.base_url)
    }

    fn event_url(&self, id: EventId) -> String {
        format!("{}/events/{}", self.base_url, id)
    }
}

impl EventsApi for EventsClient {
    async fn list_events(&self) -> RemoteResult<Vec<UserEvent>> {
        let resp = send(self.http.get(self.events_url())).await?;
        read_json(resp).await
    }

    async fn create_event(&self, event: &NewUserEvent) -> RemoteResult<UserEvent> {
        let resp = send(self.http.post(self.events_url()).json(event)).await?;
        read_json(resp).await
    }

    async fn delete_event(&self, id: EventId) -> RemoteResult<()> {
        send(self.http.delete(self.event_url(id))).await?;
        Ok(())
    }

    async fn update_event(&self, event: &UserEvent) -> RemoteResult<UserEvent> {
        let resp = send(self.http.put(self.event_url(event.id)).json(event)).await?;
        read_json(resp).await
    }
}

/// Send the request and reject any non-2xx response.
async fn send(req: RequestBuilder) -> RemoteResult<Response> {
    let resp = req
        .send()
        .await
        .map_err(|e| RemoteError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status));
    }

    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> RemoteResult<T> {
    let body = resp
        .bytes()
        .await
        .map_err(|e| RemoteError::Transport(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| RemoteError::Decode(e.to_string()))
}
