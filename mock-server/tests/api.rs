use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, AutoCompleteItemList, DefinitionList, Failure, Fixture};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- random ---

#[tokio::test]
async fn random_returns_seeded_list() {
    let resp = app().oneshot(get("/v0/random")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: DefinitionList = body_json(resp).await;
    assert!(!page.list.is_empty());
    assert!(page.list.len() <= 10);
}

#[tokio::test]
async fn random_is_stable_between_calls() {
    let first: DefinitionList = body_json(app().oneshot(get("/v0/random")).await.unwrap()).await;
    let second: DefinitionList = body_json(app().oneshot(get("/v0/random")).await.unwrap()).await;
    let words = |p: &DefinitionList| p.list.iter().map(|d| d.word.clone()).collect::<Vec<_>>();
    assert_eq!(words(&first), words(&second));
}

// --- define ---

#[tokio::test]
async fn define_matches_case_insensitively() {
    let resp = app().oneshot(get("/v0/define?term=CAT")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: DefinitionList = body_json(resp).await;
    assert_eq!(page.list.len(), 1);
    assert_eq!(page.list[0].word, "cat");
    assert_eq!(page.list[0].definition, "a [feline]");
}

#[tokio::test]
async fn define_decodes_percent_encoded_term() {
    let fixture = Fixture::new(vec![mock_server::Definition {
        word: "hello world".to_string(),
        ..Default::default()
    }]);
    let resp = app_with(fixture)
        .oneshot(get("/v0/define?term=hello%20world"))
        .await
        .unwrap();
    let page: DefinitionList = body_json(resp).await;
    assert_eq!(page.list.len(), 1);
}

#[tokio::test]
async fn define_unknown_term_is_empty_list() {
    let resp = app().oneshot(get("/v0/define?term=zzzz")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: DefinitionList = body_json(resp).await;
    assert!(page.list.is_empty());
}

#[tokio::test]
async fn define_without_term_is_empty_list() {
    let resp = app().oneshot(get("/v0/define")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: DefinitionList = body_json(resp).await;
    assert!(page.list.is_empty());
}

// --- autocomplete ---

#[tokio::test]
async fn autocomplete_prefix_matches() {
    let resp = app().oneshot(get("/v0/autocomplete-extra?term=ca")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: AutoCompleteItemList = body_json(resp).await;
    let terms: Vec<&str> = page.results.iter().map(|r| r.term.as_str()).collect();
    assert_eq!(terms, ["cat", "catfish"]);
    assert_eq!(page.results[0].preview, "a [feline]");
}

#[tokio::test]
async fn autocomplete_preview_is_first_line() {
    let resp = app().oneshot(get("/v0/autocomplete-extra?term=yee")).await.unwrap();
    let page: AutoCompleteItemList = body_json(resp).await;
    assert_eq!(page.results[0].preview, "To throw something with [force].");
}

#[tokio::test]
async fn autocomplete_empty_term_has_no_results() {
    let resp = app().oneshot(get("/v0/autocomplete-extra?term=")).await.unwrap();
    let page: AutoCompleteItemList = body_json(resp).await;
    assert!(page.results.is_empty());
}

// --- failures ---

#[tokio::test]
async fn status_failure_applies_to_every_route() {
    for uri in ["/v0/random", "/v0/define?term=cat", "/v0/autocomplete-extra?term=ca"] {
        let fixture = Fixture::failing(Failure::Status(StatusCode::INTERNAL_SERVER_ERROR));
        let resp = app_with(fixture).oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    }
}

#[tokio::test]
async fn malformed_body_is_not_json() {
    let resp = app_with(Fixture::failing(Failure::MalformedBody))
        .oneshot(get("/v0/random"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body_bytes(resp).await;
    assert!(serde_json::from_slice::<serde_json::Value>(&bytes).is_err());
}

#[tokio::test]
async fn wrong_shape_is_json_without_envelope() {
    let resp = app_with(Fixture::failing(Failure::WrongShape))
        .oneshot(get("/v0/define?term=cat"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let value: serde_json::Value = body_json(resp).await;
    assert!(value.get("list").is_none());
    assert!(value.get("results").is_none());
}

#[tokio::test]
async fn unknown_path_is_404() {
    let resp = app().oneshot(get("/v0/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
