use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseResultGeometryLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseResultGeometry {
    pub location: GoogleGeocodeResponseResultGeometryLocation,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponseResult {
    pub formatted_address: String,
    pub geometry: GoogleGeocodeResponseResultGeometry,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeocodeResponse {
    #[serde(default)]
    pub results: Vec<GoogleGeocodeResponseResult>,
    pub status: String,
}
