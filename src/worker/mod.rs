pub mod handlers;
pub mod mirror;
pub mod processor;
