use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// One entry of the served feed, in wire form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub image: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedPayload {
    pub items: Vec<FeedItem>,
}

#[derive(Deserialize)]
pub struct NewFeedItem {
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: String,
}

/// A canned response that replaces the feed until cleared.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScriptedResponse {
    pub status: u16,
    #[serde(default)]
    pub body: String,
}

#[derive(Default)]
pub struct FeedState {
    items: Vec<FeedItem>,
    scripted: Option<ScriptedResponse>,
}

pub type Db = Arc<RwLock<FeedState>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(FeedState::default()));
    Router::new()
        .route("/feed", get(get_feed))
        .route("/feed/items", post(add_item).delete(clear_items))
        .route("/feed/response", put(set_response).delete(clear_response))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_feed(State(db): State<Db>) -> Response {
    let state = db.read().await;
    match &state.scripted {
        Some(scripted) => {
            let status = StatusCode::from_u16(scripted.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, [(header::CONTENT_TYPE, "application/json")], scripted.body.clone()).into_response()
        }
        None => Json(FeedPayload {
            items: state.items.clone(),
        })
        .into_response(),
    }
}

async fn add_item(
    State(db): State<Db>,
    Json(input): Json<NewFeedItem>,
) -> (StatusCode, Json<FeedItem>) {
    let item = FeedItem {
        id: Uuid::new_v4(),
        description: input.description,
        location: input.location,
        image: input.image,
    };
    db.write().await.items.push(item.clone());
    tracing::debug!(id = %item.id, "feed item added");
    (StatusCode::CREATED, Json(item))
}

async fn clear_items(State(db): State<Db>) -> StatusCode {
    db.write().await.items.clear();
    StatusCode::NO_CONTENT
}

async fn set_response(
    State(db): State<Db>,
    Json(input): Json<ScriptedResponse>,
) -> Result<StatusCode, StatusCode> {
    if StatusCode::from_u16(input.status).is_err() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    tracing::debug!(status = input.status, "scripted feed response set");
    db.write().await.scripted = Some(input);
    Ok(StatusCode::NO_CONTENT)
}

async fn clear_response(State(db): State<Db>) -> StatusCode {
    db.write().await.scripted = None;
    StatusCode::NO_CONTENT
}
