//! Core library for timetrack.
//!
//! A small state container in the shape of a reducer/dispatch store:
//! - `recorder` tracks the active timing session
//! - `user_events` holds the normalized event collection and the async
//!   operations that keep it in sync with the remote `/events` service
//! - `store` routes actions through both reducers
//! - `tracker` bundles the store, the remote client and the redraw ticker
//!   behind the intents a front-end calls

pub mod config;
pub mod error;
pub mod event;
pub mod recorder;
pub mod remote;
pub mod store;
pub mod tracker;
pub mod user_events;

pub use error::{TimetrackError, TimetrackResult};
pub use event::{NewUserEvent, UserEvent};
pub use store::{Action, Dispatch, RootState, Store};
pub use tracker::TimeTracker;
