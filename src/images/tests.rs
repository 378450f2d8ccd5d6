//! Unit tests for image URL building and fallback selection

use super::*;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn endpoints_for(primary: &str) -> ImageEndpoints {
    ImageEndpoints {
        primary_base: primary.to_string(),
        fallback_base: "https://placehold.co".to_string(),
    }
}

#[test]
fn test_safe_name_replaces_spaces() {
    assert_eq!(safe_name("Rohit Sharma"), "Rohit+Sharma");
    assert_eq!(safe_name("AB de Villiers"), "AB+de+Villiers");
}

#[test]
fn test_safe_name_escapes_reserved_characters() {
    assert_eq!(safe_name("Tom & Jerry"), "Tom+%26+Jerry");
    assert_eq!(safe_name("a=b?c"), "a%3Db%3Fc");
}

#[test]
fn test_default_urls() {
    let endpoints = ImageEndpoints::default();
    assert_eq!(
        endpoints.primary_url("Rohit Sharma"),
        "https://tse4.mm.bing.net/th?q=Rohit+Sharma+cricket+profile&w=300&h=300&c=7"
    );
    assert_eq!(
        endpoints.fallback_url("Rohit Sharma"),
        "https://placehold.co/300x300?text=Rohit+Sharma"
    );
}

#[tokio::test]
async fn test_resolve_uses_primary_when_available() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/th"))
        .and(query_param("q", "Rohit Sharma cricket profile"))
        .and(query_param("w", "300"))
        .and(query_param("h", "300"))
        .and(query_param("c", "7"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF]),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let resolver = ImageResolver::new(endpoints_for(&mock_server.uri()));
    let panel = resolver.resolve("Rohit Sharma", "Rohit Gurunath Sharma").await;

    assert_eq!(panel.source, ImageSource::Primary);
    assert_eq!(panel.caption, "Rohit Gurunath Sharma");
    assert!(panel.url.contains("Rohit+Sharma"));
    assert!(panel.url.starts_with(&mock_server.uri()));
}

#[tokio::test]
async fn test_resolve_falls_back_on_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/th"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resolver = ImageResolver::new(endpoints_for(&mock_server.uri()));
    let panel = resolver.resolve("Rohit Sharma", "Rohit Sharma").await;

    assert_eq!(panel.source, ImageSource::Fallback);
    assert_eq!(panel.caption, FALLBACK_CAPTION);
    assert_eq!(panel.url, "https://placehold.co/300x300?text=Rohit+Sharma");
}

#[tokio::test]
async fn test_resolve_falls_back_when_unreachable() {
    // Port 1 on loopback refuses connections
    let resolver = ImageResolver::new(endpoints_for("http://127.0.0.1:1"));
    let panel = resolver.resolve("Babar Azam", "Babar Azam").await;

    assert_eq!(panel.source, ImageSource::Fallback);
    assert!(panel.url.ends_with("text=Babar+Azam"));
}
