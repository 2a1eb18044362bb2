//! Domain types and pure logic for the AIMTERIOR site backend.
//!
//! Nothing in this crate performs I/O: the database, mail and HTTP crates
//! build on these types.

pub mod collections;
pub mod error;
pub mod interest;
pub mod submission;
pub mod types;
