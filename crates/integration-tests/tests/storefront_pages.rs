//! Page and fragment rendering through the full middleware stack.

#![allow(clippy::unwrap_used)]

use herowear_integration_tests::TestContext;
use reqwest::StatusCode;

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;
    let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_every_page_starts_with_empty_scroll_indicator() {
    let ctx = TestContext::new().await;

    for path in ["/", "/about", "/team", "/account", "/admin"] {
        let resp = ctx.client.get(ctx.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{path}");

        let html = resp.text().await.unwrap();
        assert!(html.contains("scroll-progress__fill"), "{path}");
        assert!(html.contains("translateX(-100%)"), "{path}");
        assert!(html.contains(r#"aria-label="Reading progress""#), "{path}");
    }
}

#[tokio::test]
async fn test_scroll_indicator_refreshes_on_window_scroll() {
    let ctx = TestContext::new().await;
    let html = ctx
        .client
        .get(ctx.url("/about"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"hx-get="/components/scroll-progress""#));
    assert!(html.contains(r#"hx-trigger="scroll from:window""#));
    assert!(html.contains("scroll_top: window.scrollY"));
    assert!(html.contains("htmx.org"));

    // The URL the page polls serves the indicator fragment
    let resp = ctx
        .client
        .get(ctx.url(
            "/components/scroll-progress?scroll_top=250&scroll_height=1500&client_height=500",
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("translateX(-75%)"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let ctx = TestContext::new().await;
    let resp = ctx
        .client
        .get(ctx.url("/"))
        .header("x-request-id", "edge-42")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.headers()["x-request-id"], "edge-42");
}

#[tokio::test]
async fn test_scroll_fragment_tracks_geometry() {
    let ctx = TestContext::new().await;
    let resp = ctx
        .client
        .get(ctx.url(
            "/components/scroll-progress?scroll_top=1500&scroll_height=2500&client_height=500",
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("translateX(-25%)"));
    assert!(html.contains(r#"aria-valuenow="75""#));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let ctx = TestContext::new().await;
    let resp = ctx.client.get(ctx.url("/capes")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
