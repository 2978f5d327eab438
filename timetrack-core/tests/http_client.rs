//! `EventsClient` against an in-process events service.

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::get;
use axum::{Json, Router};
use common::{dispatched, event, record_actions};
use timetrack_core::event::{NewUserEvent, UserEvent};
use timetrack_core::remote::{EventsApi, EventsClient, RemoteError};
use timetrack_core::store::{Action, Dispatch, Store};
use timetrack_core::user_events::{
    UserEventsAction, delete_user_event, load_user_events,
};

#[derive(Clone, Default)]
struct ServerState {
    events: Arc<Mutex<Vec<UserEvent>>>,
    content_types: Arc<Mutex<Vec<String>>>,
}

impl ServerState {
    fn with_events(events: Vec<UserEvent>) -> Self {
        ServerState {
            events: Arc::new(Mutex::new(events)),
            ..ServerState::default()
        }
    }

    fn record_content_type(&self, headers: &HeaderMap) {
        let value = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        self.content_types.lock().unwrap().push(value);
    }
}

async fn list_events(State(state): State<ServerState>) -> Json<Vec<UserEvent>> {
    Json(state.events.lock().unwrap().clone())
}

async fn create_event(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(new_event): Json<NewUserEvent>,
) -> Json<UserEvent> {
    state.record_content_type(&headers);
    let mut events = state.events.lock().unwrap();
    let id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
    let event = UserEvent {
        id,
        title: new_event.title,
        date_start: new_event.date_start,
        date_end: new_event.date_end,
    };
    events.push(event.clone());
    Json(event)
}

async fn delete_event(State(state): State<ServerState>, Path(id): Path<u64>) -> StatusCode {
    let mut events = state.events.lock().unwrap();
    let before = events.len();
    events.retain(|e| e.id != id);
    if events.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

async fn update_event(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(event): Json<UserEvent>,
) -> Result<Json<UserEvent>, StatusCode> {
    state.record_content_type(&headers);
    let mut events = state.events.lock().unwrap();
    let existing = events
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *existing = event.clone();
    Ok(Json(event))
}

fn events_router(state: ServerState) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", axum::routing::put(update_event).delete(delete_event))
        .with_state(state)
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> EventsClient {
    EventsClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_list_events() {
    let state = ServerState::with_events(vec![event(1, "a"), event(2, "b")]);
    let base_url = serve(events_router(state)).await;

    let events = client(&base_url).list_events().await.unwrap();

    assert_eq!(events, vec![event(1, "a"), event(2, "b")]);
}

#[tokio::test]
async fn test_create_event_posts_json() {
    let state = ServerState::with_events(vec![event(1, "a")]);
    let base_url = serve(events_router(state.clone())).await;

    let new_event = NewUserEvent {
        title: "No title".to_string(),
        date_start: "2025-02-01T10:00:00.000Z".to_string(),
        date_end: "2025-02-01T10:30:00.000Z".to_string(),
    };
    let created = client(&base_url).create_event(&new_event).await.unwrap();

    assert_eq!(created.id, 2);
    assert_eq!(created.title, "No title");
    assert_eq!(created.date_end, "2025-02-01T10:30:00.000Z");
    assert_eq!(
        state.content_types.lock().unwrap().as_slice(),
        ["application/json"]
    );
}

#[tokio::test]
async fn test_update_event_puts_json() {
    let state = ServerState::with_events(vec![event(1, "a")]);
    let base_url = serve(events_router(state.clone())).await;

    let mut renamed = event(1, "a");
    renamed.title = "renamed".to_string();
    let updated = client(&base_url).update_event(&renamed).await.unwrap();

    assert_eq!(updated, renamed);
    assert_eq!(state.events.lock().unwrap()[0].title, "renamed");
    assert_eq!(
        state.content_types.lock().unwrap().as_slice(),
        ["application/json"]
    );
}

#[tokio::test]
async fn test_delete_event() {
    let state = ServerState::with_events(vec![event(1, "a"), event(2, "b")]);
    let base_url = serve(events_router(state.clone())).await;

    client(&base_url).delete_event(1).await.unwrap();

    assert_eq!(*state.events.lock().unwrap(), vec![event(2, "b")]);
}

#[tokio::test]
async fn test_non_success_status() {
    let base_url = serve(events_router(ServerState::default())).await;

    let err = client(&base_url).delete_event(42).await.unwrap_err();

    assert_eq!(err, RemoteError::Status(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_malformed_body() {
    let router = Router::new().route("/events", get(|| async { "definitely not json" }));
    let base_url = serve(router).await;

    let err = client(&base_url).list_events().await.unwrap_err();

    assert!(matches!(err, RemoteError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_unreachable_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"))
        .list_events()
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn test_load_end_to_end() {
    let loaded = UserEvent {
        id: 1,
        title: "x".to_string(),
        date_start: "t0".to_string(),
        date_end: "t1".to_string(),
    };
    let base_url = serve(events_router(ServerState::with_events(vec![loaded.clone()]))).await;
    let store = Store::new();
    let (_sub, actions) = record_actions(&store);

    load_user_events(&store, &client(&base_url)).await;

    assert_eq!(
        dispatched(&actions),
        vec![
            Action::UserEvents(UserEventsAction::LoadRequest),
            Action::UserEvents(UserEventsAction::LoadSuccess {
                events: vec![loaded]
            }),
        ]
    );
    assert_eq!(store.get_state().user_events.all_ids, vec![1]);
}

#[tokio::test]
async fn test_delete_refused_end_to_end() {
    let base_url = serve(events_router(ServerState::default())).await;
    let store = common::store_with(vec![event(3, "local only")]);
    let (_sub, actions) = record_actions(&store);

    assert!(!delete_user_event(&store, &client(&base_url), 3).await);

    assert_eq!(
        dispatched(&actions),
        vec![Action::UserEvents(UserEventsAction::DeleteRequest)]
    );
    assert_eq!(store.get_state().user_events.all_ids, vec![3]);
}
