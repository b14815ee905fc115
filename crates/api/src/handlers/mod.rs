pub mod blog;
pub mod contact;
pub mod home;
pub mod project;
pub mod testimonial;
