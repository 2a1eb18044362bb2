//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&SqlitePool` as the first argument.

pub mod blog_repo;
pub mod project_repo;
pub mod review_repo;

pub use blog_repo::BlogRepo;
pub use project_repo::ProjectRepo;
pub use review_repo::ReviewRepo;
