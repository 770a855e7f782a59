pub mod comments;
pub mod submission;
