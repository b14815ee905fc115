//! Integration tests for the repository layer against in-memory SQLite.

use folio_db::models::contact_message::CreateContactMessage;
use folio_db::models::project::CreateProject;
use folio_db::models::testimonial::CreateTestimonial;
use folio_db::repositories::{ContactMessageRepo, ProjectRepo, TestimonialRepo};
use folio_db::schema::create_schema;
use folio_db::{create_pool, DbPool, MEMORY_URL};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A pool with the schema in place but no seed rows.
async fn empty_pool() -> DbPool {
    let pool = create_pool(MEMORY_URL).await.unwrap();
    create_schema(&pool).await.unwrap();
    pool
}

fn new_project(title: &str, tags: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        category: "Web".to_string(),
        description: "desc".to_string(),
        tags: tags.to_string(),
        img: "https://example.com/img.png".to_string(),
    }
}

fn new_testimonial(author: &str, rating: Option<i32>) -> CreateTestimonial {
    CreateTestimonial {
        author: author.to_string(),
        role: "CTO".to_string(),
        text: "Great work".to_string(),
        rating,
    }
}

// ---------------------------------------------------------------------------
// Contact messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_message_is_stored_verbatim() {
    let pool = empty_pool().await;
    let input = CreateContactMessage {
        first: "Ada".to_string(),
        last: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: String::new(),
        message: "Hello".to_string(),
    };

    let created = ContactMessageRepo::create(&pool, &input).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.first.as_deref(), Some("Ada"));
    assert_eq!(created.email.as_deref(), Some("ada@example.com"));
    assert_eq!(created.phone.as_deref(), Some(""));
    assert_eq!(created.message.as_deref(), Some("Hello"));

    let all = ContactMessageRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].created_at, created.created_at);
}

#[tokio::test]
async fn contact_message_ids_are_unique() {
    let pool = empty_pool().await;
    let input = CreateContactMessage {
        first: String::new(),
        last: String::new(),
        email: "a@b.c".to_string(),
        phone: String::new(),
        message: "m".to_string(),
    };

    let a = ContactMessageRepo::create(&pool, &input).await.unwrap();
    let b = ContactMessageRepo::create(&pool, &input).await.unwrap();

    assert_ne!(a.id, b.id);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn projects_list_newest_first() {
    let pool = empty_pool().await;
    for title in ["one", "two", "three"] {
        ProjectRepo::create(&pool, &new_project(title, "")).await.unwrap();
    }

    let titles: Vec<_> = ProjectRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title.unwrap())
        .collect();

    assert_eq!(titles, vec!["three", "two", "one"]);
}

#[tokio::test]
async fn projects_order_follows_created_at_not_id() {
    let pool = empty_pool().await;
    sqlx::query(
        "INSERT INTO projects (title, created_at) VALUES
            ('late', '2024-06-01T00:00:00+00:00'),
            ('early', '2024-01-01T00:00:00+00:00')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let projects = ProjectRepo::list(&pool).await.unwrap();

    assert_eq!(projects[0].title.as_deref(), Some("late"));
    assert_eq!(projects[1].title.as_deref(), Some("early"));
    assert!(projects[0].created_at > projects[1].created_at);
}

#[tokio::test]
async fn list_recent_caps_the_result() {
    let pool = empty_pool().await;
    for i in 0..8 {
        ProjectRepo::create(&pool, &new_project(&format!("p{i}"), ""))
            .await
            .unwrap();
    }

    let recent = ProjectRepo::list_recent(&pool, 6).await.unwrap();

    assert_eq!(recent.len(), 6);
    assert_eq!(recent[0].title.as_deref(), Some("p7"));
    assert_eq!(recent[5].title.as_deref(), Some("p2"));
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[tokio::test]
async fn testimonial_rating_defaults_to_five() {
    let pool = empty_pool().await;

    let created = TestimonialRepo::create(&pool, &new_testimonial("Grace", None))
        .await
        .unwrap();

    assert_eq!(created.rating, Some(5));
}

#[tokio::test]
async fn testimonials_list_newest_first() {
    let pool = empty_pool().await;
    TestimonialRepo::create(&pool, &new_testimonial("first", Some(3)))
        .await
        .unwrap();
    TestimonialRepo::create(&pool, &new_testimonial("second", Some(4)))
        .await
        .unwrap();

    let all = TestimonialRepo::list(&pool).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].author.as_deref(), Some("second"));
    assert_eq!(all[0].rating, Some(4));
    assert_eq!(TestimonialRepo::count(&pool).await.unwrap(), 2);
    assert_eq!(TestimonialRepo::list_recent(&pool, 1).await.unwrap().len(), 1);
}
