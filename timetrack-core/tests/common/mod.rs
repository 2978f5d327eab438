#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use reqwest::StatusCode;
use timetrack_core::event::{EventId, NewUserEvent, UserEvent};
use timetrack_core::remote::{EventsApi, RemoteError, RemoteResult};
use timetrack_core::store::{Action, Dispatch, Store, Subscription};

pub fn event(id: EventId, title: &str) -> UserEvent {
    UserEvent {
        id,
        title: title.to_string(),
        date_start: "2025-02-01T10:00:00.000Z".to_string(),
        date_end: "2025-02-01T12:00:00.000Z".to_string(),
    }
}

/// Collect every action dispatched to `store` while the subscription lives.
pub fn record_actions(store: &Store) -> (Subscription, Arc<Mutex<Vec<Action>>>) {
    let actions: Arc<Mutex<Vec<Action>>> = Arc::default();
    let sink = Arc::clone(&actions);
    let sub = store.subscribe(move |action, _| sink.lock().unwrap().push(action.clone()));
    (sub, actions)
}

pub fn dispatched(actions: &Arc<Mutex<Vec<Action>>>) -> Vec<Action> {
    actions.lock().unwrap().clone()
}

#[derive(Default)]
struct Inner {
    events: Vec<UserEvent>,
    next_id: EventId,
    fail_with: Option<RemoteError>,
    created: Vec<NewUserEvent>,
    calls: usize,
}

/// In-memory stand-in for the events service.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<Inner>>,
}

impl FakeApi {
    pub fn with_events(events: Vec<UserEvent>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        FakeApi {
            inner: Arc::new(Mutex::new(Inner {
                events,
                next_id,
                ..Inner::default()
            })),
        }
    }

    /// Make every following call fail with `error`.
    pub fn fail_with(&self, error: RemoteError) {
        self.inner.lock().unwrap().fail_with = Some(error);
    }

    pub fn created(&self) -> Vec<NewUserEvent> {
        self.inner.lock().unwrap().created.clone()
    }

    pub fn server_events(&self) -> Vec<UserEvent> {
        self.inner.lock().unwrap().events.clone()
    }

    pub fn calls(&self) -> usize {
        self.inner.lock().unwrap().calls
    }

    fn begin(&self) -> RemoteResult<std::sync::MutexGuard<'_, Inner>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls += 1;
        if let Some(e) = inner.fail_with.clone() {
            return Err(e);
        }
        Ok(inner)
    }
}

impl EventsApi for FakeApi {
    async fn list_events(&self) -> RemoteResult<Vec<UserEvent>> {
        Ok(self.begin()?.events.clone())
    }

    async fn create_event(&self, new_event: &NewUserEvent) -> RemoteResult<UserEvent> {
        let mut inner = self.begin()?;
        let event = UserEvent {
            id: inner.next_id.max(1),
            title: new_event.title.clone(),
            date_start: new_event.date_start.clone(),
            date_end: new_event.date_end.clone(),
        };
        inner.next_id = event.id + 1;
        inner.created.push(new_event.clone());
        inner.events.push(event.clone());
        Ok(event)
    }

    async fn delete_event(&self, id: EventId) -> RemoteResult<()> {
        let mut inner = self.begin()?;
        let before = inner.events.len();
        inner.events.retain(|e| e.id != id);
        if inner.events.len() == before {
            return Err(RemoteError::Status(StatusCode::NOT_FOUND));
        }
        Ok(())
    }

    async fn update_event(&self, event: &UserEvent) -> RemoteResult<UserEvent> {
        let mut inner = self.begin()?;
        match inner.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => {
                *existing = event.clone();
                Ok(event.clone())
            }
            None => Err(RemoteError::Status(StatusCode::NOT_FOUND)),
        }
    }
}

/// Load `events` into a fresh store through the normal success path.
pub fn store_with(events: Vec<UserEvent>) -> Store {
    let store = Store::new();
    store.dispatch(timetrack_core::user_events::UserEventsAction::LoadSuccess { events }.into());
    store
}
