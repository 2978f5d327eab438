//! Normalized collection of user events.
//!
//! Events live in `by_ids`; `all_ids` keeps their order (load order, then
//! creation order). Both are only ever changed by the success actions of the
//! remote operations in `thunks`.

mod thunks;

pub use thunks::{
    LOAD_FAILURE_MESSAGE, create_user_event, delete_user_event, load_user_events,
    update_user_event,
};

use std::collections::HashMap;

use crate::event::{EventId, UserEvent};
use crate::store::{Action, RootState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserEventsState {
    pub by_ids: HashMap<EventId, UserEvent>,
    pub all_ids: Vec<EventId>,
}

/// Request/success/failure outcomes of the four remote operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEventsAction {
    LoadRequest,
    LoadSuccess { events: Vec<UserEvent> },
    LoadFailure { error: String },

    CreateRequest,
    CreateSuccess { event: UserEvent },
    CreateFailure,

    DeleteRequest,
    DeleteSuccess { id: EventId },
    DeleteFailure,

    UpdateRequest,
    UpdateSuccess { event: UserEvent },
    UpdateFailure,
}

pub fn reducer(state: UserEventsState, action: &Action) -> UserEventsState {
    let Action::UserEvents(action) = action else {
        return state;
    };

    match action {
        UserEventsAction::LoadSuccess { events } => {
            // A repeated id keeps its first position and its last value.
            let mut loaded = UserEventsState::default();
            for event in events {
                if loaded.by_ids.insert(event.id, event.clone()).is_none() {
                    loaded.all_ids.push(event.id);
                }
            }
            loaded
        }
        UserEventsAction::CreateSuccess { event } => {
            let mut state = state;
            if state.by_ids.insert(event.id, event.clone()).is_none() {
                state.all_ids.push(event.id);
            }
            state
        }
        UserEventsAction::DeleteSuccess { id } => {
            let mut state = state;
            state.all_ids.retain(|existing| existing != id);
            state.by_ids.remove(id);
            state
        }
        UserEventsAction::UpdateSuccess { event } => {
            let mut state = state;
            if let Some(existing) = state.by_ids.get_mut(&event.id) {
                *existing = event.clone();
            }
            state
        }
        _ => state,
    }
}

pub fn select_user_events_state(state: &RootState) -> &UserEventsState {
    &state.user_events
}

/// All events in `all_ids` order.
pub fn select_user_events_array(state: &RootState) -> Vec<&UserEvent> {
    let user_events = select_user_events_state(state);
    user_events
        .all_ids
        .iter()
        .filter_map(|id| user_events.by_ids.get(id))
        .collect()
}

pub fn select_user_event(state: &RootState, id: EventId) -> Option<&UserEvent> {
    select_user_events_state(state).by_ids.get(&id)
}
