use async_trait::async_trait;

use super::types::place_directory_error::PlaceDirectoryError;
use crate::types::marker::{PlaceCandidate, PlaceDetails};

/// A source of place predictions and geocoded details.
#[async_trait]
pub trait PlaceDirectory: Send + Sync {
    /// Ranked candidates for free-text input.
    async fn predict(&self, text: &str) -> Result<Vec<PlaceCandidate>, PlaceDirectoryError>;

    async fn resolve(&self, place_id: &str) -> Result<PlaceDetails, PlaceDirectoryError>;
}
