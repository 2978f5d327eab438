//! Remote `/events` service.
//!
//! `EventsApi` is the seam the async operations are written against;
//! `EventsClient` is the HTTP implementation.

mod client;

pub use client::EventsClient;

use std::future::Future;

use reqwest::StatusCode;
use thiserror::Error;

use crate::event::{EventId, NewUserEvent, UserEvent};

/// Ways a call to the events service can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Server returned {0}")]
    Status(StatusCode),

    /// The response body was not the JSON we expected.
    #[error("Malformed response: {0}")]
    Decode(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// CRUD operations on the events collection.
pub trait EventsApi {
    /// GET /events
    fn list_events(&self) -> impl Future<Output = RemoteResult<Vec<UserEvent>>> + Send;

    /// POST /events
    fn create_event(
        &self,
        event: &NewUserEvent,
    ) -> impl Future<Output = RemoteResult<UserEvent>> + Send;

    /// DELETE /events/{id}
    fn delete_event(&self, id: EventId) -> impl Future<Output = RemoteResult<()>> + Send;

    /// PUT /events/{id}
    fn update_event(
        &self,
        event: &UserEvent,
    ) -> impl Future<Output = RemoteResult<UserEvent>> + Send;
}
