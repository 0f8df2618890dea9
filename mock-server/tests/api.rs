use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, FormPart};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn request(method: &str, uri: &str, content_type: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, content_type)
        .body(body.to_string())
        .unwrap()
}

// --- echo ---

#[tokio::test]
async fn echo_get_returns_ok() {
    let resp = app()
        .oneshot(Request::builder().uri("/echo").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "ok");
}

#[tokio::test]
async fn echo_post_reflects_content_type_and_body() {
    let resp = app()
        .oneshot(request("POST", "/echo", "application/json", r#"{"a":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.content_type.as_deref(), Some("application/json"));
    assert_eq!(echo.body, r#"{"a":1}"#);
}

#[tokio::test]
async fn echo_keeps_query_string() {
    let resp = app()
        .oneshot(request("PATCH", "/echo?tag=abc", "text/plain", "x"))
        .await
        .unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "PATCH");
    assert_eq!(echo.uri, "/echo?tag=abc");
}

#[tokio::test]
async fn echo_delete_without_body() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/echo")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "DELETE");
    assert!(echo.content_type.is_none());
    assert!(echo.body.is_empty());
}

// --- status ---

#[tokio::test]
async fn status_route_returns_requested_code() {
    let resp = app()
        .oneshot(Request::builder().uri("/status/418").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);
    assert_eq!(resp.headers()["x-status-code"], "418");
    assert_eq!(body_bytes(resp).await, "I'm a teapot");
}

#[tokio::test]
async fn status_route_rejects_invalid_code() {
    let resp = app()
        .oneshot(Request::builder().uri("/status/1000").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- form ---

#[tokio::test]
async fn form_lists_parts_in_order() {
    let body = concat!(
        "--XBOUNDARY\r\n",
        "Content-Disposition: form-data; name=\"first\"\r\n\r\n",
        "1\r\n",
        "--XBOUNDARY\r\n",
        "Content-Disposition: form-data; name=\"upload\"; filename=\"a.txt\"\r\n",
        "Content-Type: text/plain\r\n\r\n",
        "file body\r\n",
        "--XBOUNDARY--\r\n",
    );
    let resp = app()
        .oneshot(request(
            "POST",
            "/form",
            "multipart/form-data; boundary=XBOUNDARY",
            body,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let parts: Vec<FormPart> = body_json(resp).await;
    assert_eq!(
        parts,
        vec![
            FormPart {
                name: "first".to_string(),
                file_name: None,
                content: "1".to_string(),
            },
            FormPart {
                name: "upload".to_string(),
                file_name: Some("a.txt".to_string()),
                content: "file body".to_string(),
            },
        ]
    );
}

// --- slow ---

#[tokio::test]
async fn slow_route_eventually_answers() {
    let resp = app()
        .oneshot(Request::builder().uri("/slow/10").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "ok");
}
