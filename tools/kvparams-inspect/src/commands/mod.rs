pub mod classify;
pub mod types;
