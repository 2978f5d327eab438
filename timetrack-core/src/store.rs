//! Central state container.
//!
//! Every action goes through `root_reducer`, which hands it to both the
//! recorder and the user-events reducer. Each reducer ignores the actions
//! that are not its own, so the combined state only changes where it should.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::recorder::{self, RecorderAction, RecorderState};
use crate::user_events::{self, UserEventsAction, UserEventsState};

/// Everything that can be dispatched to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Recorder(RecorderAction),
    UserEvents(UserEventsAction),
}

impl From<RecorderAction> for Action {
    fn from(action: RecorderAction) -> Self {
        Action::Recorder(action)
    }
}

impl From<UserEventsAction> for Action {
    fn from(action: UserEventsAction) -> Self {
        Action::UserEvents(action)
    }
}

/// Combined application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub recorder: RecorderState,
    pub user_events: UserEventsState,
}

pub fn root_reducer(state: RootState, action: &Action) -> RootState {
    RootState {
        recorder: recorder::reducer(state.recorder, action),
        user_events: user_events::reducer(state.user_events, action),
    }
}

/// The two handles an async operation gets: one to dispatch, one to read.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
    fn get_state(&self) -> RootState;
}

type Listener = Arc<dyn Fn(&Action, &RootState) + Send + Sync>;

#[derive(Default)]
struct Inner {
    state: RootState,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Cloneable handle to the shared state container.
///
/// Clones refer to the same state; pass one to every consumer instead of
/// reaching for a global.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: RootState) -> Self {
        Store {
            inner: Arc::new(Mutex::new(Inner {
                state,
                ..Inner::default()
            })),
        }
    }

    /// Register a listener called after every dispatch with the action and
    /// the resulting state. The listener stays registered until the returned
    /// `Subscription` is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Action, &RootState) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Reducers are pure, so a panic in a listener cannot leave the state
        // half-updated.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatch");

        let (state, listeners) = {
            let mut inner = self.lock();
            let current = std::mem::take(&mut inner.state);
            inner.state = root_reducer(current, &action);
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.state.clone(), listeners)
        };

        // Listeners run outside the lock so they may dispatch themselves.
        for listener in listeners {
            listener(&action, &state);
        }
    }

    fn get_state(&self) -> RootState {
        self.lock().state.clone()
    }
}

/// Keeps a store listener registered. Dropping it unsubscribes.
pub struct Subscription {
    store: Weak<Mutex<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
