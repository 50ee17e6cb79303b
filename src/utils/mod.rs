pub mod app_error;
pub mod config;
pub mod validated_query;
