//! Async operations that keep the event collection in sync with the server.
//!
//! Each one dispatches a request action, makes one call to the events
//! service and dispatches the matching success or failure action. Errors
//! never escape: they are logged and turned into a failure action.

use chrono::Utc;

use super::UserEventsAction;
use crate::event::{EventId, NewUserEvent, UserEvent, iso_timestamp};
use crate::recorder::select_date_start;
use crate::remote::{EventsApi, RemoteError};
use crate::store::Dispatch;

/// Error carried by `LoadFailure`.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load events";

/// Fetch every event and replace the collection with them.
///
/// Returns whether the load succeeded.
pub async fn load_user_events<D, A>(store: &D, api: &A) -> bool
where
    D: Dispatch,
    A: EventsApi,
{
    store.dispatch(UserEventsAction::LoadRequest.into());

    match api.list_events().await {
        Ok(events) => {
            tracing::debug!(count = events.len(), "loaded events");
            store.dispatch(UserEventsAction::LoadSuccess { events }.into());
            true
        }
        Err(e) => {
            tracing::warn!("loading events failed: {e}");
            store.dispatch(
                UserEventsAction::LoadFailure {
                    error: LOAD_FAILURE_MESSAGE.to_string(),
                }
                .into(),
            );
            false
        }
    }
}

/// Persist the current recording as a new event ending now.
///
/// The start is whatever the recorder holds at the time of the call, which
/// is an empty string when no session is active.
pub async fn create_user_event<D, A>(store: &D, api: &A, title: &str) -> Option<UserEvent>
where
    D: Dispatch,
    A: EventsApi,
{
    store.dispatch(UserEventsAction::CreateRequest.into());

    let new_event = NewUserEvent {
        title: title.to_string(),
        date_start: select_date_start(&store.get_state()).to_string(),
        date_end: iso_timestamp(Utc::now()),
    };

    match api.create_event(&new_event).await {
        Ok(event) => {
            tracing::debug!(id = event.id, "created event");
            store.dispatch(
                UserEventsAction::CreateSuccess {
                    event: event.clone(),
                }
                .into(),
            );
            Some(event)
        }
        Err(e) => {
            tracing::warn!("creating event failed: {e}");
            store.dispatch(UserEventsAction::CreateFailure.into());
            None
        }
    }
}

/// Delete an event by id.
///
/// A non-2xx answer dispatches nothing at all: the event simply stays in
/// the collection. Only transport and decoding errors produce
/// `DeleteFailure`. Returns whether `DeleteSuccess` was dispatched.
pub async fn delete_user_event<D, A>(store: &D, api: &A, id: EventId) -> bool
where
    D: Dispatch,
    A: EventsApi,
{
    store.dispatch(UserEventsAction::DeleteRequest.into());

    match api.delete_event(id).await {
        Ok(()) => {
            tracing::debug!(id, "deleted event");
            store.dispatch(UserEventsAction::DeleteSuccess { id }.into());
            true
        }
        Err(RemoteError::Status(status)) => {
            tracing::warn!(id, %status, "server refused delete");
            false
        }
        Err(e) => {
            tracing::warn!(id, "deleting event failed: {e}");
            store.dispatch(UserEventsAction::DeleteFailure.into());
            false
        }
    }
}

/// Replace an event on the server and store what it echoes back.
pub async fn update_user_event<D, A>(store: &D, api: &A, event: &UserEvent) -> Option<UserEvent>
where
    D: Dispatch,
    A: EventsApi,
{
    store.dispatch(UserEventsAction::UpdateRequest.into());

    match api.update_event(event).await {
        Ok(updated) => {
            tracing::debug!(id = updated.id, "updated event");
            store.dispatch(
                UserEventsAction::UpdateSuccess {
                    event: updated.clone(),
                }
                .into(),
            );
            Some(updated)
        }
        Err(e) => {
            tracing::warn!(id = event.id, "updating event failed: {e}");
            store.dispatch(UserEventsAction::UpdateFailure.into());
            None
        }
    }
}
