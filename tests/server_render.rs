//! Server-rendered page tests over real HTTP.

use std::io::Write;
use std::sync::Arc;

use grumblr::config::AppConfig;
use grumblr::store::MemoryStore;
use grumblr::HttpServer;
use reqwest::StatusCode;

/// Start a server on an ephemeral port and return its base URL.
async fn start_server(config: AppConfig) -> String {
    let store = Arc::new(MemoryStore::with_seed_posts());
    let server = HttpServer::new(config, store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    format!("http://{}", addr)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn homepage_renders_the_post_list_with_embedded_props() {
    let base = start_server(AppConfig::default()).await;

    let res = client().get(format!("{base}/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(res.headers().contains_key("x-request-id"));

    let html = res.text().await.unwrap();
    let first = html.find("/posts/123").expect("first link missing");
    let second = html.find("/posts/345").expect("second link missing");
    assert!(first < second, "posts must appear ascending by date");
    assert!(html.contains("var APP_PROPS = "));
    assert!(html.contains("\"routeKey\":\"list\""));
    assert!(html.contains("<script src=\"/bundle.js\">"));
}

#[tokio::test]
async fn detail_page_renders_title_body_and_back_link() {
    let base = start_server(AppConfig::default()).await;

    let res = client()
        .get(format!("{base}/posts/123"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let html = res.text().await.unwrap();
    assert!(html.contains("<h1>That's not a knife</h1>"));
    assert!(html.contains("This is a knife"));
    assert!(html.contains("<a href=\"/\">"));
    assert!(html.contains("\"routeKey\":\"detail\""));
}

#[tokio::test]
async fn missing_record_maps_to_404() {
    let base = start_server(AppConfig::default()).await;

    let res = client()
        .get(format!("{base}/posts/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().await.unwrap().contains("NotFound"));
}

#[tokio::test]
async fn unrouted_path_maps_to_404() {
    let base = start_server(AppConfig::default()).await;

    let res = client()
        .get(format!("{base}/nonexistent"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Not Found");
}

#[tokio::test]
async fn bundle_is_served_from_the_configured_artifact() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "console.log('grumblr client')").unwrap();

    let mut config = AppConfig::default();
    config.bundle.path = file.path().to_string_lossy().into_owned();
    let base = start_server(config).await;

    let res = client()
        .get(format!("{base}/bundle.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "text/javascript"
    );
    assert_eq!(res.text().await.unwrap(), "console.log('grumblr client')");
}

#[tokio::test]
async fn missing_bundle_is_a_500_not_a_crash() {
    let mut config = AppConfig::default();
    config.bundle.path = "/definitely/not/here/bundle.js".into();
    let base = start_server(config).await;

    let res = client()
        .get(format!("{base}/bundle.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The server keeps serving pages afterwards.
    let res = client().get(format!("{base}/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
