#[cfg(test)]
pub mod fake_directory;
pub mod list_filter;
pub mod pipeline;
pub mod sidebar_service;
pub mod types;
