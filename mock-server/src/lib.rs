//! In-process stand-in for the Urban Dictionary v0 API.
//!
//! Serves `random`, `define`, and `autocomplete-extra` under `/v0` from a
//! seeded, read-only glossary. A `Fixture` can also force every route to fail
//! so clients can be tested against error statuses and broken bodies.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::debug;

pub use axum::http::StatusCode;

const RANDOM_PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    pub permalink: String,
    pub thumbs_up: i64,
    pub author: String,
    pub word: String,
    pub defid: i64,
    pub current_vote: String,
    pub written_on: String,
    pub example: String,
    pub thumbs_down: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefinitionList {
    pub list: Vec<Definition>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutoCompleteItem {
    pub preview: String,
    pub term: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutoCompleteItemList {
    pub results: Vec<AutoCompleteItem>,
}

#[derive(Deserialize)]
struct TermQuery {
    #[serde(default)]
    term: String,
}

/// How every route misbehaves when a fixture is set to fail.
#[derive(Clone, Debug)]
pub enum Failure {
    Status(StatusCode),
    /// 200 with a body that is not JSON at all.
    MalformedBody,
    /// 200 with valid JSON that has neither `list` nor `results`.
    WrongShape,
}

#[derive(Clone, Debug, Default)]
pub struct Fixture {
    pub definitions: Vec<Definition>,
    pub failure: Option<Failure>,
}

impl Fixture {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self {
            definitions,
            failure: None,
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            definitions: Vec::new(),
            failure: Some(failure),
        }
    }

    /// A small glossary with cross-references in definitions and examples.
    pub fn seeded() -> Self {
        Self::new(vec![
            entry(1, "urbandictionary", "A [website] where anyone can define [slang].", "Look it up on [urbandictionary]."),
            entry(2, "cat", "a [feline]", "My [cat] ignores me."),
            entry(3, "catfish", "Someone pretending to be someone else [online].", "He got [catfished]."),
            entry(4, "yeet", "To throw something with [force].\nAlso an exclamation.", "[Yeet] the ball!"),
            entry(5, "feline", "A [cat], formally.", "The [feline] sat."),
        ])
    }
}

fn entry(defid: i64, word: &str, definition: &str, example: &str) -> Definition {
    Definition {
        definition: definition.to_string(),
        permalink: format!("https://{word}.urbanup.com/{defid}"),
        thumbs_up: defid * 10,
        author: "mock".to_string(),
        word: word.to_string(),
        defid,
        current_vote: String::new(),
        written_on: "2024-01-01T00:00:00.000Z".to_string(),
        example: example.to_string(),
        thumbs_down: defid,
    }
}

pub type Db = Arc<Fixture>;

pub fn app() -> Router {
    app_with(Fixture::seeded())
}

pub fn app_with(fixture: Fixture) -> Router {
    let db: Db = Arc::new(fixture);
    Router::new()
        .route("/v0/random", get(random))
        .route("/v0/define", get(define))
        .route("/v0/autocomplete-extra", get(autocomplete))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Fixture::seeded()).await
}

pub async fn run_with(listener: TcpListener, fixture: Fixture) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(fixture)).await
}

fn failure_response(failure: &Failure) -> Response {
    match failure {
        Failure::Status(status) => (*status, "mock failure").into_response(),
        Failure::MalformedBody => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"list": [oops"#,
        )
            .into_response(),
        Failure::WrongShape => Json(json!({ "error": "unexpected" })).into_response(),
    }
}

async fn random(State(db): State<Db>) -> Response {
    if let Some(failure) = &db.failure {
        return failure_response(failure);
    }
    let list = db.definitions.iter().take(RANDOM_PAGE_SIZE).cloned().collect();
    Json(DefinitionList { list }).into_response()
}

async fn define(State(db): State<Db>, Query(query): Query<TermQuery>) -> Response {
    if let Some(failure) = &db.failure {
        return failure_response(failure);
    }
    debug!(term = %query.term, "define");
    let term = query.term.trim().to_lowercase();
    let list = db
        .definitions
        .iter()
        .filter(|d| d.word.to_lowercase() == term)
        .cloned()
        .collect();
    Json(DefinitionList { list }).into_response()
}

async fn autocomplete(State(db): State<Db>, Query(query): Query<TermQuery>) -> Response {
    if let Some(failure) = &db.failure {
        return failure_response(failure);
    }
    debug!(term = %query.term, "autocomplete-extra");
    let prefix = query.term.trim().to_lowercase();
    let mut results: Vec<AutoCompleteItem> = Vec::new();
    if !prefix.is_empty() {
        for d in &db.definitions {
            let taken = results.iter().any(|r| r.term.eq_ignore_ascii_case(&d.word));
            if !taken && d.word.to_lowercase().starts_with(&prefix) {
                results.push(AutoCompleteItem {
                    preview: d.definition.lines().next().unwrap_or_default().to_string(),
                    term: d.word.clone(),
                });
            }
        }
    }
    Json(AutoCompleteItemList { results }).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_serializes_wire_names() {
        let json = serde_json::to_value(entry(7, "cat", "a [feline]", "")).unwrap();
        assert_eq!(json["defid"], 7);
        assert_eq!(json["thumbs_up"], 70);
        assert_eq!(json["written_on"], "2024-01-01T00:00:00.000Z");
        assert_eq!(json["permalink"], "https://cat.urbanup.com/7");
    }

    #[test]
    fn seeded_fixture_has_no_failure() {
        let fixture = Fixture::seeded();
        assert!(fixture.failure.is_none());
        assert!(fixture.definitions.iter().any(|d| d.word == "cat"));
    }

    #[test]
    fn failing_fixture_is_empty() {
        let fixture = Fixture::failing(Failure::MalformedBody);
        assert!(fixture.definitions.is_empty());
        assert!(matches!(fixture.failure, Some(Failure::MalformedBody)));
    }

    #[test]
    fn term_query_defaults_to_empty() {
        let q: TermQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.term, "");
    }
}
