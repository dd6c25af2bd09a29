use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
}

/// How the server saw an incoming request.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub type Db = Arc<RwLock<Vec<Item>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/echo", any(echo))
        .route("/api/broken", any(broken))
        .route("/api/fail", any(fail))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Logger environment for the binary: `RUST_LOG` wins, otherwise `info`.
pub fn log_env() -> env_logger::Env<'static> {
    env_logger::Env::default().default_filter_or("info")
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    Json(db.read().await.clone())
}

async fn create_item(State(db): State<Db>, Json(input): Json<CreateItem>) -> Json<Item> {
    let mut items = db.write().await;
    let item = Item {
        id: items.len() as u64 + 1,
        name: input.name,
    };
    items.push(item.clone());
    log::debug!("created item {}", item.id);
    Json(item)
}

async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Echo> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    Json(Echo {
        method: method.to_string(),
        content_type,
        body,
    })
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::OK, "not json")
}

async fn fail() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "simulated failure"})),
    )
}
