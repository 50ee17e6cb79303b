use async_trait::async_trait;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use super::{
    directory::PlaceDirectory,
    types::{
        google_autocomplete_response::GoogleAutocompleteResponse,
        google_geocode_response::GoogleGeocodeResponse, place_directory_error::PlaceDirectoryError,
    },
};
use crate::types::marker::{LatLng, PlaceCandidate, PlaceDetails};

const STATUS_OK: &str = "OK";

#[derive(Clone)]
pub struct GoogleDirectoryConfig {
    pub api_key: String,
    pub host: String,
}

/// Place directory backed by the Google Places autocomplete and Geocoding APIs.
#[derive(Clone)]
pub struct GoogleDirectory {
    config: GoogleDirectoryConfig,
    client: reqwest::Client,
}

impl GoogleDirectory {
    pub fn new(config: GoogleDirectoryConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, PlaceDirectoryError> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            PlaceDirectoryError::Internal(format!("Failed to send request: {}", e))
        })?;

        resp.json::<T>().await.map_err(|e| {
            PlaceDirectoryError::Internal(format!("Failed to get response body: {}", e))
        })
    }
}

#[async_trait]
impl PlaceDirectory for GoogleDirectory {
    async fn predict(&self, text: &str) -> Result<Vec<PlaceCandidate>, PlaceDirectoryError> {
        let url = format!(
            "{}/maps/api/place/autocomplete/json?input={}&key={}",
            self.config.host,
            encode(text),
            self.config.api_key
        );

        let body = self.get_json::<GoogleAutocompleteResponse>(&url).await?;
        if body.status != STATUS_OK {
            return Err(PlaceDirectoryError::Status(body.status));
        }

        Ok(body
            .predictions
            .into_iter()
            .map(|p| PlaceCandidate {
                id: p.place_id,
                description: p.description,
            })
            .collect())
    }

    async fn resolve(&self, place_id: &str) -> Result<PlaceDetails, PlaceDirectoryError> {
        let url = format!(
            "{}/maps/api/geocode/json?place_id={}&key={}",
            self.config.host,
            encode(place_id),
            self.config.api_key
        );

        let body = self.get_json::<GoogleGeocodeResponse>(&url).await?;
        if body.status != STATUS_OK {
            return Err(PlaceDirectoryError::Status(body.status));
        }

        // Geocoding by place id yields the place itself first.
        let result = body
            .results
            .into_iter()
            .next()
            .ok_or(PlaceDirectoryError::NoResults)?;

        Ok(PlaceDetails {
            formatted_address: result.formatted_address,
            coordinates: LatLng {
                lat: result.geometry.location.lat,
                lng: result.geometry.location.lng,
            },
            category_tags: result.types,
        })
    }
}
