//! Startup initialization: schema creation plus sample content.
//!
//! Each table is checked and seeded independently, so a store that is empty
//! in only one table gets only that table seeded. Re-running against a
//! populated store changes nothing.

use crate::models::project::CreateProject;
use crate::models::testimonial::CreateTestimonial;
use crate::repositories::{ProjectRepo, TestimonialRepo};
use crate::schema::create_schema;
use crate::DbPool;

/// What [`initialize`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub project_seeded: bool,
    pub testimonial_seeded: bool,
}

/// The project inserted into an empty `projects` table.
pub fn sample_project() -> CreateProject {
    CreateProject {
        title: "Analytics Platform".to_string(),
        category: "Web Application".to_string(),
        description: "Real-time data visualization with AI insights.".to_string(),
        tags: "React,AI,Analytics".to_string(),
        img: "https://picsum.photos/seed/p1/1200/800".to_string(),
    }
}

/// The testimonial inserted into an empty `testimonials` table.
pub fn sample_testimonial() -> CreateTestimonial {
    CreateTestimonial {
        author: "Sarah Johnson".to_string(),
        role: "CEO, TechVentures".to_string(),
        text: "InnovateTech transformed our digital presence completely.".to_string(),
        rating: Some(5),
    }
}

/// Ensure the schema exists and seed empty content tables.
///
/// Storage failures are returned to the caller; at startup they are fatal.
pub async fn initialize(pool: &DbPool) -> Result<SeedReport, sqlx::Error> {
    create_schema(pool).await?;

    let mut report = SeedReport::default();

    if ProjectRepo::count(pool).await? == 0 {
        ProjectRepo::create(pool, &sample_project()).await?;
        report.project_seeded = true;
    }

    if TestimonialRepo::count(pool).await? == 0 {
        TestimonialRepo::create(pool, &sample_testimonial()).await?;
        report.testimonial_seeded = true;
    }

    tracing::debug!(
        project_seeded = report.project_seeded,
        testimonial_seeded = report.testimonial_seeded,
        "Database initialized"
    );
    Ok(report)
}
