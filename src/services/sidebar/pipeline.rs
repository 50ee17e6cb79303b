use futures::future::join_all;
use tracing::{error, warn};

use super::{
    list_filter::is_blank,
    types::sidebar_error::{InputField, SidebarError},
};
use crate::{services::place_directory::directory::PlaceDirectory, types::marker::Marker};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub markers: Vec<Marker>,
    /// Candidates dropped because their details could not be resolved.
    pub omitted: usize,
}

/// Predicts candidates for `query` and resolves all of them concurrently.
///
/// Returns only after every resolution has finished. Markers keep the
/// prediction order regardless of the order resolutions complete in.
pub async fn search(
    directory: &dyn PlaceDirectory,
    query: &str,
) -> Result<SearchOutcome, SidebarError> {
    if is_blank(query) {
        return Err(SidebarError::Validation(InputField::Search));
    }

    let candidates = directory.predict(query).await.map_err(|e| {
        error!("Failed to fetch place predictions for {}: {}", query, e);
        SidebarError::Lookup {
            query: query.to_string(),
        }
    })?;

    let resolutions = join_all(candidates.iter().map(|c| directory.resolve(&c.id))).await;

    let mut markers = Vec::with_capacity(candidates.len());
    let mut omitted = 0;

    for (candidate, resolution) in candidates.into_iter().zip(resolutions) {
        match resolution {
            Ok(details) => markers.push(Marker::from_resolved(candidate, details)),
            Err(e) => {
                warn!("Failed to resolve place {}: {}", candidate.id, e);
                omitted += 1;
            }
        }
    }

    Ok(SearchOutcome { markers, omitted })
}
