pub mod filters;
pub mod format;
pub mod request_generation;
