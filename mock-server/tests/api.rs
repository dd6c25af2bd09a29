use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, Item};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- items ---

#[tokio::test]
async fn list_items_empty() {
    let resp = app()
        .oneshot(Request::builder().uri("/api/items").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn create_item_returns_200_with_id() {
    let resp = app()
        .oneshot(json_request("POST", "/api/items", r#"{"name":"a"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let item: Item = body_json(resp).await;
    assert_eq!(
        item,
        Item {
            id: 1,
            name: "a".to_string()
        }
    );
}

#[tokio::test]
async fn create_item_missing_name_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/items", r#"{"title":"a"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_then_list() {
    use tower::Service;

    let mut app = app().into_service();

    for name in ["a", "b"] {
        let body = format!(r#"{{"name":"{name}"}}"#);
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/api/items", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/api/items").body(String::new()).unwrap())
        .await
        .unwrap();
    let items: Vec<Item> = body_json(resp).await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[1].name, "b");
}

// --- echo ---

#[tokio::test]
async fn echo_reports_method_content_type_and_body() {
    let resp = app()
        .oneshot(json_request("PATCH", "/api/echo", r#"{"x":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "PATCH");
    assert_eq!(echo.content_type.as_deref(), Some("application/json"));
    assert_eq!(echo.body, r#"{"x":1}"#);
}

#[tokio::test]
async fn echo_accepts_body_on_get() {
    let resp = app()
        .oneshot(json_request("GET", "/api/echo", r#"{"page":2}"#))
        .await
        .unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.body, r#"{"page":2}"#);
}

// --- failure routes ---

#[tokio::test]
async fn broken_returns_non_json_text() {
    let resp = app()
        .oneshot(json_request("POST", "/api/broken", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"not json");
}

#[tokio::test]
async fn fail_returns_500_with_json_error() {
    let resp = app()
        .oneshot(json_request("GET", "/api/fail", "null"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "simulated failure");
}
