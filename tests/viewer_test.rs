mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use common::{app_state, write_dataset, TWO_RECORDS};
use http_body_util::BodyExt;
use mathviz::dataset::Dataset;
use mathviz::views::viewer as viewer_views;
use tower::ServiceExt;

async fn body_string(resp: Response) -> String {
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request build should succeed"),
        )
        .await
        .expect("router should respond");
    let status = resp.status();
    (status, body_string(resp).await)
}

#[tokio::test]
async fn index_serves_the_viewer_page() {
    let (_dir, path) = write_dataset(TWO_RECORDS);
    let app = mathviz::router(app_state(path));

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Mathviz"));
    assert!(body.contains("options-panel"));
    assert!(body.contains("category-select"));
    assert!(body.contains("count-select"));
}

#[tokio::test]
async fn filter_cycle_renders_all_records_by_default() {
    let (_dir, path) = write_dataset(TWO_RECORDS);
    let app = mathviz::router(app_state(path));

    let (status, body) = get(app, "/filter").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2+2?"));
    assert!(body.contains("Capital of France?"));
    // The repopulated category selector swaps out-of-band.
    assert!(body.contains("hx-swap-oob"));
    assert!(body.contains(">Math<"));
    assert!(body.contains(">Geo<"));
}

#[tokio::test]
async fn filter_cycle_applies_the_category_selection() {
    let (_dir, path) = write_dataset(TWO_RECORDS);
    let app = mathviz::router(app_state(path));

    let (status, body) = get(app, "/filter?category=Math&count=All").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2+2?"));
    assert!(!body.contains("Capital of France?"));
}

#[tokio::test]
async fn filter_cycle_applies_the_sample_count() {
    let (_dir, path) = write_dataset(TWO_RECORDS);
    let app = mathviz::router(app_state(path));

    let (status, body) = get(app, "/filter?category=All&count=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("question-block").count(), 1);
}

#[tokio::test]
async fn unknown_previous_category_falls_back_to_all() {
    let (_dir, path) = write_dataset(TWO_RECORDS);
    let app = mathviz::router(app_state(path));

    let (status, body) = get(app, "/filter?category=Physics&count=All").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2+2?"));
    assert!(body.contains("Capital of France?"));
    assert!(body.contains(r#"option value="All" selected"#));
}

#[tokio::test]
async fn empty_dataset_shows_the_no_results_message() {
    let (_dir, path) = write_dataset("{}");
    let app = mathviz::router(app_state(path));

    let (status, body) = get(app, "/filter").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No matching questions."));
}

#[tokio::test]
async fn missing_dataset_file_shows_a_visible_error() {
    let dir = tempfile::tempdir().unwrap();
    let app = mathviz::router(app_state(dir.path().join("missing.json")));

    let (status, body) = get(app, "/filter").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Could not load the question dataset"));
}

#[tokio::test]
async fn question_permalink_renders_a_single_block() {
    let (_dir, path) = write_dataset(TWO_RECORDS);
    let app = mathviz::router(app_state(path));

    let (status, body) = get(app, "/question/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2+2?"));
    assert!(!body.contains("Capital of France?"));
}

#[tokio::test]
async fn rendered_permalinks_resolve_through_the_router() {
    let (_dir, path) = write_dataset(TWO_RECORDS);
    let state = app_state(path);
    state.dataset.reload().await.unwrap();

    let dataset = state.dataset.current().await.unwrap();
    let markup = viewer_views::question_block(dataset.get("2").unwrap()).into_string();
    let href = markup
        .split_once("href=\"")
        .and_then(|(_, rest)| rest.split_once('"'))
        .map(|(href, _)| href.to_string())
        .expect("block should link to its permalink");

    let (status, body) = get(mathviz::router(state), &href).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Capital of France?"));
}

#[tokio::test]
async fn unknown_question_id_is_not_found() {
    let (_dir, path) = write_dataset(TWO_RECORDS);
    let app = mathviz::router(app_state(path));

    let (status, _) = get(app, "/question/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_assets_are_served_with_content_type() {
    let (_dir, path) = write_dataset(TWO_RECORDS);
    let app = mathviz::router(app_state(path));

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/static/viewer.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/javascript"
    );
}

#[test]
fn empty_result_set_renders_the_fixed_message() {
    let markup = viewer_views::results(&[]).into_string();
    assert!(markup.contains("No matching questions."));
}

#[test]
fn question_block_contains_all_present_fields() {
    let raw = r#"{
        "42": {
            "question": "Evaluate $\\int_0^1 x \\, dx$.",
            "category": "Calculus",
            "analysis": "Antiderivative is $x^2/2$.",
            "hint": "Power rule.",
            "choices": ["$1/2$", "$1$"],
            "answer": "$1/2$"
        }
    }"#;
    let dataset = Dataset::parse(raw).unwrap();
    let markup = viewer_views::question_block(dataset.get("42").unwrap()).into_string();

    assert!(markup.contains("/question/42"));
    assert!(markup.contains("Evaluate $\\int_0^1 x \\, dx$."));
    assert!(markup.contains("Analysis"));
    assert!(markup.contains("Antiderivative is $x^2/2$."));
    assert!(markup.contains("Hint"));
    assert!(markup.contains("Answer:"));
    assert!(markup.contains("Category: Calculus"));
    assert!(markup.contains("<hr>"));
}

#[test]
fn question_block_skips_absent_fields() {
    let dataset = Dataset::parse(r#"{"7": {"question": "Plain question"}}"#).unwrap();
    let markup = viewer_views::question_block(dataset.get("7").unwrap()).into_string();

    assert!(markup.contains("Plain question"));
    assert!(!markup.contains("Analysis"));
    assert!(!markup.contains("Hint"));
    assert!(!markup.contains("Answer:"));
    assert!(!markup.contains("Category:"));
}
