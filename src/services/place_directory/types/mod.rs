pub mod google_autocomplete_response;
pub mod google_geocode_response;
pub mod place_directory_error;
