//! Repository structs, one per table.

pub mod contact_message_repo;
pub mod project_repo;
pub mod testimonial_repo;

pub use contact_message_repo::ContactMessageRepo;
pub use project_repo::ProjectRepo;
pub use testimonial_repo::TestimonialRepo;
