pub mod notice;
pub mod sidebar_error;
