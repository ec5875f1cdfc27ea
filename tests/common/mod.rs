//! Shared test helpers: an in-process mock of the PokeAPI endpoints.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use pokedex::{Cache, Config, PokeClient};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const AREAS: &[&str] = &[
    "canalave-city-area",
    "eterna-city-area",
    "pastoria-city-area",
    "sunyshore-city-area",
    "sinnoh-pokemon-league-area",
];

#[derive(Clone)]
struct MockState {
    base_url: String,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockState {
    fn record(&self, uri: &Uri) {
        *self.hits.lock().unwrap().entry(uri.to_string()).or_default() += 1;
    }
}

#[derive(Deserialize)]
struct PageQuery {
    offset: Option<usize>,
    limit: Option<usize>,
}

/// Handle to a running mock API.
pub struct MockApi {
    pub base_url: String,
    state: MockState,
}

impl MockApi {
    /// Number of requests received for a path (with query string).
    pub fn hits(&self, path_and_query: &str) -> usize {
        self.state
            .hits
            .lock()
            .unwrap()
            .get(path_and_query)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.state.hits.lock().unwrap().values().sum()
    }

    pub fn config(&self, page_size: u32) -> Config {
        Config {
            api_base_url: self.base_url.clone(),
            cache_ttl: 60,
            http_timeout: 5,
            page_size,
        }
    }

    /// Builds a client against this mock with a fresh cache.
    pub fn client(&self, ttl: Duration, page_size: u32) -> (PokeClient, Arc<Cache>) {
        let cache = Arc::new(Cache::new(ttl));
        let client = PokeClient::new(&self.config(page_size), cache.clone()).unwrap();
        (client, cache)
    }
}

/// Starts the mock API on an ephemeral local port.
pub async fn spawn_mock_api() -> MockApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let state = MockState {
        base_url: base_url.clone(),
        hits: Arc::default(),
    };

    let app = Router::new()
        .route("/location-area", get(location_areas))
        .route("/location-area/:name", get(location_area))
        .route("/pokemon/:name", get(pokemon))
        .with_state(state.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi { base_url, state }
}

async fn location_areas(
    State(state): State<MockState>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Json<Value> {
    state.record(&uri);

    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(20).max(1);
    let page_url = |offset: usize| {
        format!(
            "{}/location-area?offset={}&limit={}",
            state.base_url, offset, limit
        )
    };

    let results: Vec<Value> = AREAS
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(i, name)| {
            json!({ "name": name, "url": format!("{}/location-area/{}/", state.base_url, i + 1) })
        })
        .collect();
    let next = (offset + limit < AREAS.len()).then(|| page_url(offset + limit));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn location_area(
    State(state): State<MockState>,
    Path(name): Path<String>,
    uri: Uri,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri);

    match name.as_str() {
        "canalave-city-area" => Ok(Json(json!({
            "id": 1,
            "name": name,
            "pokemon_encounters": [
                { "pokemon": { "name": "tentacool", "url": "" }, "version_details": [] },
                { "pokemon": { "name": "staryu", "url": "" }, "version_details": [] },
                { "pokemon": { "name": "magikarp", "url": "" }, "version_details": [] }
            ]
        }))),
        "eterna-city-area" => Ok(Json(json!({ "id": 2, "name": name, "pokemon_encounters": [] }))),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

async fn pokemon(
    State(state): State<MockState>,
    Path(name): Path<String>,
    uri: Uri,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri);

    let (base_experience, height, weight, kind) = match name.as_str() {
        "caterpie" => (39, 3, 29, "bug"),
        "pikachu" => (112, 4, 60, "electric"),
        "mewtwo" => (340, 20, 1220, "psychic"),
        "missingno" => return Err(StatusCode::INTERNAL_SERVER_ERROR),
        _ => return Err(StatusCode::NOT_FOUND),
    };

    Ok(Json(json!({
        "name": name,
        "base_experience": base_experience,
        "height": height,
        "weight": weight,
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 50, "effort": 1, "stat": { "name": "attack", "url": "" } }
        ],
        "types": [
            { "slot": 1, "type": { "name": kind, "url": "" } }
        ]
    })))
}
