//! Domain logic for the folio site backend.
//!
//! Everything in this crate is pure: no database access, no network, no
//! environment reads. The `db`, `events` and `api` crates build on it.

pub mod contact;
pub mod error;
pub mod flash;
pub mod tags;
pub mod types;
