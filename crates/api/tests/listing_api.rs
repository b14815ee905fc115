//! HTTP-level integration tests for the read-only `/api` listings.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, test_pool};
use folio_db::models::project::CreateProject;
use folio_db::models::testimonial::CreateTestimonial;
use folio_db::repositories::{ProjectRepo, TestimonialRepo};
use serde_json::json;

fn project(title: &str, tags: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        category: "Mobile".to_string(),
        description: "An app".to_string(),
        tags: tags.to_string(),
        img: "https://example.com/p.png".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn projects_include_seed_with_split_tags() {
    let pool = test_pool().await;
    let (app, _) = build_test_app(pool);

    let response = get(&app, "/api/projects").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let projects = json.as_array().expect("body should be a bare array");
    assert_eq!(projects.len(), 1);
    assert_eq!(
        projects[0],
        json!({
            "id": projects[0]["id"],
            "title": "Analytics Platform",
            "category": "Web Application",
            "description": "Real-time data visualization with AI insights.",
            "tags": ["React", "AI", "Analytics"],
            "img": "https://picsum.photos/seed/p1/1200/800",
        })
    );
    assert!(projects[0]["id"].is_i64());
}

#[tokio::test]
async fn empty_tag_string_yields_empty_array() {
    let pool = test_pool().await;
    ProjectRepo::create(&pool, &project("Untagged", ""))
        .await
        .unwrap();
    let (app, _) = build_test_app(pool);

    let json = body_json(get(&app, "/api/projects").await).await;

    assert_eq!(json[0]["title"], "Untagged");
    assert_eq!(json[0]["tags"], json!([]));
}

#[tokio::test]
async fn null_tags_yield_empty_array() {
    let pool = test_pool().await;
    sqlx::query("INSERT INTO projects (title, created_at) VALUES ('Bare', '2999-01-01T00:00:00+00:00')")
        .execute(&pool)
        .await
        .unwrap();
    let (app, _) = build_test_app(pool);

    let json = body_json(get(&app, "/api/projects").await).await;

    assert_eq!(json[0]["title"], "Bare");
    assert_eq!(json[0]["tags"], json!([]));
    assert!(json[0]["img"].is_null());
}

#[tokio::test]
async fn projects_are_newest_first() {
    let pool = test_pool().await;
    ProjectRepo::create(&pool, &project("Second", "a")).await.unwrap();
    ProjectRepo::create(&pool, &project("Third", "b")).await.unwrap();
    let (app, _) = build_test_app(pool);

    let json = body_json(get(&app, "/api/projects").await).await;

    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Third", "Second", "Analytics Platform"]);
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[tokio::test]
async fn testimonials_have_public_shape() {
    let pool = test_pool().await;
    let (app, _) = build_test_app(pool);

    let response = get(&app, "/api/testimonials").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let first = &json[0];
    assert_eq!(first["author"], "Sarah Johnson");
    assert_eq!(first["role"], "CEO, TechVentures");
    assert_eq!(
        first["text"],
        "InnovateTech transformed our digital presence completely."
    );
    assert_eq!(first["rating"], 5);
    assert!(first.get("created_at").is_none());
}

#[tokio::test]
async fn testimonials_are_newest_first() {
    let pool = test_pool().await;
    TestimonialRepo::create(
        &pool,
        &CreateTestimonial {
            author: "Grace Hopper".to_string(),
            role: "Rear Admiral".to_string(),
            text: "Ship it.".to_string(),
            rating: Some(4),
        },
    )
    .await
    .unwrap();
    let (app, _) = build_test_app(pool);

    let json = body_json(get(&app, "/api/testimonials").await).await;

    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["author"], "Grace Hopper");
    assert_eq!(json[0]["rating"], 4);
    assert_eq!(json[1]["author"], "Sarah Johnson");
}

// ---------------------------------------------------------------------------
// Blogs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blogs_are_always_empty() {
    let pool = test_pool().await;
    let (app, _) = build_test_app(pool);

    let response = get(&app, "/api/blogs").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Storage failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_storage_failure_is_sanitized_500() {
    let pool = test_pool().await;
    sqlx::query("DROP TABLE projects").execute(&pool).await.unwrap();
    let (app, _) = build_test_app(pool);

    let response = get(&app, "/api/projects").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
