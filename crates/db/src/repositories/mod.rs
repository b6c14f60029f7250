//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&FileStore` as the first argument.

pub mod audio_repo;
pub mod genre_repo;
pub mod track_repo;

pub use audio_repo::AudioRepo;
pub use genre_repo::GenreRepo;
pub use track_repo::TrackRepo;
