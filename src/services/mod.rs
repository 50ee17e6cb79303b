pub mod place_directory;
pub mod sidebar;
