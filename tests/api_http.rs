// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use news_categorizer::api::{self, AppState};
use news_categorizer::{Article, ArticleCatalog};

const BODY_LIMIT: usize = 1024 * 1024;

fn article(title: &str, summary: &str, day: u32, category: &str) -> Article {
    Article {
        title: title.to_string(),
        summary: summary.to_string(),
        url: format!("https://edition.cnn.com/2024/09/{day}/x"),
        source: "CNN".to_string(),
        publication_date: NaiveDate::from_ymd_opt(2024, 9, day).unwrap(),
        category: Some(category.to_string()),
    }
}

fn test_router() -> Router {
    let catalog = ArticleCatalog::from_articles(vec![
        article("Senate votes on new law", "Congress passed the policy today.", 27, "politics"),
        article("New chip disappoints", "Critics say the device hate it.", 28, "reviews or opinion-based"),
        article("Cabinet reshuffle", "The president named a new minister.", 29, "Politics"),
    ]);
    api::router(AppState::new(catalog))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Json) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET");
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    let v = serde_json::from_slice(&bytes).unwrap_or(Json::Null);
    (status, v)
}

fn ids(v: &Json) -> Vec<u64> {
    v.as_array()
        .expect("array response")
        .iter()
        .map(|a| a["id"].as_u64().expect("id"))
        .collect()
}

#[tokio::test]
async fn health_returns_ok() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = test_router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn list_returns_all_with_contract_fields() {
    let (status, v) = get(test_router(), "/articles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&v), vec![1, 2, 3]);

    let first = &v[0];
    for key in ["id", "title", "summary", "url", "source", "publication_date", "category"] {
        assert!(first.get(key).is_some(), "missing '{key}'");
    }
    assert_eq!(first["publication_date"], "2024-09-27");
}

#[tokio::test]
async fn category_filter_is_case_insensitive() {
    let (status, v) = get(test_router(), "/articles?category=politics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&v), vec![1, 3]);
}

#[tokio::test]
async fn date_filters_are_inclusive() {
    let (_, v) = get(test_router(), "/articles?start_date=2024-09-28&end_date=2024-09-28").await;
    assert_eq!(ids(&v), vec![2]);

    let (_, v) = get(test_router(), "/articles?category=POLITICS&end_date=2024-09-28").await;
    assert_eq!(ids(&v), vec![1]);
}

#[tokio::test]
async fn malformed_date_is_rejected() {
    let (status, v) = get(test_router(), "/articles?start_date=yesterday").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v["detail"].as_str().unwrap().contains("start_date"));
}

#[tokio::test]
async fn get_by_id_and_not_found() {
    let (status, v) = get(test_router(), "/articles/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["title"], "New chip disappoints");

    let (status, v) = get(test_router(), "/articles/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["detail"], "Article not found");
}

#[tokio::test]
async fn non_numeric_id_gets_json_detail() {
    for uri in ["/articles/abc", "/articles/-1"] {
        let (status, v) = get(test_router(), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert!(v["detail"].as_str().unwrap().contains("invalid article id"), "{uri}");
    }
}

#[tokio::test]
async fn search_matches_title_and_summary() {
    let (status, v) = get(test_router(), "/search?q=CONGRESS").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&v), vec![1]);

    let (_, v) = get(test_router(), "/search?q=new").await;
    assert_eq!(ids(&v), vec![1, 2, 3]);
}

#[tokio::test]
async fn short_search_is_rejected() {
    let (status, _) = get(test_router(), "/search?q=ai").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = get(test_router(), "/search").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let req = Request::builder()
        .method("GET")
        .uri("/articles")
        .header("origin", "https://frontend.example")
        .body(Body::empty())
        .unwrap();
    let resp = test_router().oneshot(req).await.unwrap();
    assert!(resp
        .headers()
        .get("access-control-allow-origin")
        .is_some());
}
