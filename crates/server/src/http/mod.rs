pub mod flash;
pub mod handlers;
pub mod router;
