//! Content models.
//!
//! Each submodule contains a `FromRow` struct matching the stored row and,
//! where the row holds serialized collections, a `Serialize` response struct
//! built from it with `From`.

pub mod blog;
pub mod project;
pub mod review;
