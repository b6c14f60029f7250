//! Domain logic for the Melodex track catalog.
//!
//! This crate has no internal dependencies and performs no I/O, so the
//! query pipeline and validation rules can be shared by the store, the API
//! server and any tooling.

pub mod audio;
pub mod cover_image;
pub mod error;
pub mod slug;
pub mod track_query;
pub mod types;
