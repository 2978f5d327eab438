//! The intents a front-end calls, bundled with the state they act on.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;

use crate::config::ClientConfig;
use crate::event::{EventId, UserEvent};
use crate::recorder::{self, Elapsed, Ticker};
use crate::remote::EventsApi;
use crate::store::{Dispatch, RootState, Store};
use crate::user_events;

/// Recorder and calendar in one place.
///
/// While a session is recording the tracker owns a `Ticker`; `stop` cancels
/// it and dropping the tracker cancels it too.
pub struct TimeTracker<A> {
    store: Store,
    api: A,
    tick_period: Duration,
    placeholder_title: String,
    ticker: Option<Ticker>,
}

impl<A: EventsApi> TimeTracker<A> {
    pub fn new(store: Store, api: A, config: &ClientConfig) -> Self {
        TimeTracker {
            store,
            api,
            tick_period: config.tick_period(),
            placeholder_title: config.placeholder_title.clone(),
            ticker: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn snapshot(&self) -> RootState {
        self.store.get_state()
    }

    pub fn events(&self) -> Vec<UserEvent> {
        user_events::select_user_events_array(&self.snapshot())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn is_recording(&self) -> bool {
        recorder::is_recording(&self.snapshot())
    }

    /// Time since the session started, zero while idle.
    pub fn elapsed(&self) -> Elapsed {
        Elapsed::since(recorder::select_date_start(&self.snapshot()), Utc::now())
    }

    /// Redraw notifications for the running session, if any.
    pub fn redraws(&self) -> Option<watch::Receiver<u64>> {
        self.ticker.as_ref().map(Ticker::subscribe)
    }

    /// Start a session and its redraw ticker. Must be called inside a tokio
    /// runtime.
    pub fn start(&mut self) {
        self.store.dispatch(recorder::start().into());
        // Replacing an old ticker drops, and so cancels, it.
        self.ticker = Some(Ticker::start(self.tick_period));
        let state = self.snapshot();
        tracing::info!(
            date_start = recorder::select_date_start(&state),
            "recording started"
        );
    }

    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.store.dispatch(recorder::stop().into());
        tracing::info!("recording stopped");
    }

    /// Start when idle, stop when recording. Returns whether a session is
    /// now active.
    pub fn toggle(&mut self) -> bool {
        if self.is_recording() {
            self.stop();
            false
        } else {
            self.start();
            true
        }
    }

    pub async fn load(&self) -> bool {
        user_events::load_user_events(&self.store, &self.api).await
    }

    /// Save the current session as an event titled with the configured
    /// placeholder. The recorder keeps running; call `stop` afterwards.
    pub async fn create_from_current_recording(&self) -> Option<UserEvent> {
        user_events::create_user_event(&self.store, &self.api, &self.placeholder_title).await
    }

    pub async fn delete_by_id(&self, id: EventId) -> bool {
        user_events::delete_user_event(&self.store, &self.api, id).await
    }

    pub async fn update_event(&self, event: &UserEvent) -> Option<UserEvent> {
        user_events::update_user_event(&self.store, &self.api, event).await
    }
}
