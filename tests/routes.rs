#![cfg(feature = "ssr")]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use leptos::prelude::get_configuration;
use portfolio_site::{content::portfolio, server::router};
use tower::ServiceExt;

async fn get(path: &str) -> (StatusCode, String) {
    let conf = get_configuration(Some("Cargo.toml")).unwrap();
    let app = router(conf.leptos_options);
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_renders_every_section() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(&portfolio().site.name));
    for id in ["hero", "about", "skills", "experience", "projects", "contact"] {
        assert!(body.contains(&format!("id=\"{id}\"")), "missing section {id}");
    }
    // server render starts light until the client resolves the theme
    assert!(body.contains("Switch to dark theme"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, body) = get("/unknown-path").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page Not Found"));
    assert!(body.contains("Back to Home"));
    assert!(body.contains("href=\"/\""));
    assert!(body.contains("Go Back"));
}

#[tokio::test]
async fn test_nested_unknown_path_is_not_found() {
    let (status, _) = get("/projects/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resume_is_served() {
    let (status, body) = get(&portfolio().site.resume.href).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("%PDF"));
}

#[tokio::test]
async fn test_favicon_is_served() {
    let conf = get_configuration(Some("Cargo.toml")).unwrap();
    let response = router(conf.leptos_options)
        .oneshot(Request::builder().uri("/favicon.ico").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_header_compact_transition_has_no_inline_style() {
    let (_, body) = get("/").await;
    let at = body
        .find("transition-[padding,background-color]")
        .expect("compact header bar rendered");
    let open = body[..at].rfind('<').unwrap();
    let close = at + body[at..].find('>').unwrap();
    let tag = &body[open..close];
    assert!(!tag.contains("style="), "inline style on {tag}");
}

#[tokio::test]
async fn test_hero_links_socials() {
    let (_, body) = get("/").await;
    let hero = body.find("id=\"hero\"").unwrap();
    let about = body.find("id=\"about\"").unwrap();
    for social in &portfolio().socials {
        let href = format!("href=\"{}\"", social.href);
        assert!(body[hero..about].contains(&href), "hero missing {}", social.label);
        // hero, contact section, footer
        assert!(body.matches(&href).count() >= 3);
    }
}
