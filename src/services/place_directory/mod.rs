pub mod google_directory;
pub mod directory;
pub mod types;
