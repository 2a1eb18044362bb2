pub mod blog;
pub mod project;
pub mod review;
pub mod submission;
