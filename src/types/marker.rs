use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// An unresolved suggestion returned by text prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    pub id: String,
    pub description: String,
}

/// Geocoded details for a single candidate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub formatted_address: String,
    pub coordinates: LatLng,
    pub category_tags: Vec<String>,
}

/// The unit listed in the sidebar and shown on the map.
///
/// `id` and `name` come from the candidate, `title`, `position` and `types`
/// from its resolved details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub position: LatLng,
    pub name: String,
    pub title: String,
    pub types: Vec<String>,
}

impl Marker {
    pub fn from_resolved(candidate: PlaceCandidate, details: PlaceDetails) -> Self {
        Marker {
            id: candidate.id,
            position: details.coordinates,
            name: candidate.description,
            title: details.formatted_address,
            types: details.category_tags,
        }
    }
}
