#![allow(dead_code, clippy::unwrap_used)]
//! In-process fake of the DeepL v2 API.
//!
//! Runs on its own thread and runtime so both sync (`assert_cmd`) and async
//! tests can use it. A text of the form `status:NNN` makes `/translate` and
//! `/write/rephrase` answer with that status.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use deepl_cli::deepl::{ApiTier, Credentials};

pub const TEST_KEY: &str = "test-key";

const TSV: &str = "text/tab-separated-values";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    requests: Vec<RecordedRequest>,
    glossaries: BTreeMap<String, (Value, String)>,
    next_id: u32,
}

#[derive(Clone, Default)]
struct Shared(Arc<Mutex<Inner>>);

impl Shared {
    /// Records the request and rejects it unless it carries the test key.
    fn record(
        &self,
        method: &'static str,
        path: String,
        headers: &HeaderMap,
        body: Option<Value>,
    ) -> Option<Response> {
        let header_value = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let authorization = header_value(header::AUTHORIZATION);

        self.0.lock().unwrap().requests.push(RecordedRequest {
            method,
            path,
            authorization: authorization.clone(),
            accept: header_value(header::ACCEPT),
            body,
        });

        let expected = format!("DeepL-Auth-Key {TEST_KEY}");
        (authorization.as_deref() != Some(expected.as_str()))
            .then(|| (StatusCode::FORBIDDEN, "Wrong key").into_response())
    }
}

pub struct FakeDeepL {
    base_url: String,
    state: Shared,
}

impl FakeDeepL {
    pub fn start() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        let state = Shared::default();
        let app = router(state.clone());

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        Self {
            base_url: format!("http://{addr}/v2"),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(TEST_KEY, ApiTier::Free).with_base_url(&self.base_url)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.0.lock().unwrap().requests.clone()
    }

    pub fn last_body(&self) -> Value {
        self.requests()
            .last()
            .and_then(|r| r.body.clone())
            .unwrap()
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/v2/translate", post(translate))
        .route("/v2/write/rephrase", post(rephrase))
        .route("/v2/glossaries", get(list_glossaries).post(create_glossary))
        .route(
            "/v2/glossaries/:id",
            get(get_glossary).delete(delete_glossary),
        )
        .route("/v2/glossaries/:id/entries", get(glossary_entries))
        .with_state(state)
}

fn forced_status(text: &str) -> Option<Response> {
    let code = text.strip_prefix("status:")?.parse::<u16>().ok()?;
    let status = StatusCode::from_u16(code).ok()?;
    Some((status, format!("forced status {code}")).into_response())
}

fn first_text(body: &Value) -> String {
    body["text"][0].as_str().unwrap_or_default().to_string()
}

async fn translate(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(denied) = state.record("POST", "/translate".into(), &headers, Some(body.clone())) {
        return denied;
    }

    let text = first_text(&body);
    if let Some(forced) = forced_status(&text) {
        return forced;
    }

    let target = body["target_lang"].as_str().unwrap_or_default();
    let mut translation = json!({
        "detected_source_language": "DE",
        "text": format!("[{target}] {text}"),
    });
    if body["show_billed_characters"] == json!(true) {
        translation["billed_characters"] = json!(text.chars().count());
    }

    Json(json!({ "translations": [translation] })).into_response()
}

async fn rephrase(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(denied) = state.record("POST", "/write/rephrase".into(), &headers, Some(body.clone())) {
        return denied;
    }

    let text = first_text(&body);
    if let Some(forced) = forced_status(&text) {
        return forced;
    }

    let target = body["target_lang"].as_str().unwrap_or_default();
    Json(json!({
        "improvements": [{
            "text": format!("[{target}] {text}"),
            "target_language": target,
        }]
    }))
    .into_response()
}

async fn list_glossaries(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Some(denied) = state.record("GET", "/glossaries".into(), &headers, None) {
        return denied;
    }

    let inner = state.0.lock().unwrap();
    let glossaries: Vec<Value> = inner.glossaries.values().map(|(g, _)| g.clone()).collect();
    Json(json!({ "glossaries": glossaries })).into_response()
}

async fn create_glossary(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(denied) = state.record("POST", "/glossaries".into(), &headers, Some(body.clone())) {
        return denied;
    }

    if body["entries_format"] != "tsv" {
        return (StatusCode::BAD_REQUEST, "Unsupported entries format").into_response();
    }

    let entries = body["entries"].as_str().unwrap_or_default().to_string();
    let entry_count = entries.lines().filter(|l| !l.trim().is_empty()).count();

    let mut inner = state.0.lock().unwrap();
    inner.next_id += 1;
    let id = format!("gl-{}", inner.next_id);
    let glossary = json!({
        "glossary_id": id,
        "name": body["name"],
        "ready": true,
        "source_lang": body["source_lang"],
        "target_lang": body["target_lang"],
        "creation_time": "2024-05-01T10:00:00.000Z",
        "entry_count": entry_count,
    });
    inner.glossaries.insert(id, (glossary.clone(), entries));

    (StatusCode::CREATED, Json(glossary)).into_response()
}

async fn get_glossary(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Some(denied) = state.record("GET", format!("/glossaries/{id}"), &headers, None) {
        return denied;
    }

    match state.0.lock().unwrap().glossaries.get(&id) {
        Some((glossary, _)) => Json(glossary.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn glossary_entries(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Some(denied) = state.record("GET", format!("/glossaries/{id}/entries"), &headers, None) {
        return denied;
    }

    let accepts_tsv = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == TSV);
    if !accepts_tsv {
        return StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response();
    }

    match state.0.lock().unwrap().glossaries.get(&id) {
        Some((_, entries)) => ([(header::CONTENT_TYPE, TSV)], entries.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_glossary(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Some(denied) = state.record("DELETE", format!("/glossaries/{id}"), &headers, None) {
        return denied;
    }

    match state.0.lock().unwrap().glossaries.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
