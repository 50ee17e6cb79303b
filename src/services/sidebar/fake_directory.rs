use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;

use crate::{
    services::place_directory::{
        directory::PlaceDirectory, types::place_directory_error::PlaceDirectoryError,
    },
    types::marker::{LatLng, PlaceCandidate, PlaceDetails},
};

/// In-memory directory with per-key latency, for driving the pipeline in tests.
///
/// Unknown queries answer `ZERO_RESULTS`, unknown place ids `NOT_FOUND`.
#[derive(Default)]
pub struct FakeDirectory {
    predictions: HashMap<String, Result<Vec<PlaceCandidate>, String>>,
    details: HashMap<String, PlaceDetails>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

pub fn candidate(id: &str, description: &str) -> PlaceCandidate {
    PlaceCandidate {
        id: id.to_string(),
        description: description.to_string(),
    }
}

pub fn details(address: &str) -> PlaceDetails {
    PlaceDetails {
        formatted_address: address.to_string(),
        coordinates: LatLng {
            lat: 40.7128,
            lng: -74.006,
        },
        category_tags: vec!["establishment".to_string()],
    }
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prediction(mut self, query: &str, candidates: Vec<PlaceCandidate>) -> Self {
        self.predictions.insert(query.to_string(), Ok(candidates));
        self
    }

    pub fn with_failed_prediction(mut self, query: &str, status: &str) -> Self {
        self.predictions
            .insert(query.to_string(), Err(status.to_string()));
        self
    }

    pub fn with_details(mut self, place_id: &str, address: &str) -> Self {
        self.details.insert(place_id.to_string(), details(address));
        self
    }

    /// Delays the answer for a query or a place id.
    pub fn with_delay(mut self, key: &str, millis: u64) -> Self {
        self.delays
            .insert(key.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn wait_for(&self, key: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl PlaceDirectory for FakeDirectory {
    async fn predict(&self, text: &str) -> Result<Vec<PlaceCandidate>, PlaceDirectoryError> {
        self.wait_for(text).await;
        match self.predictions.get(text) {
            Some(Ok(candidates)) => Ok(candidates.clone()),
            Some(Err(status)) => Err(PlaceDirectoryError::Status(status.clone())),
            None => Err(PlaceDirectoryError::Status("ZERO_RESULTS".to_string())),
        }
    }

    async fn resolve(&self, place_id: &str) -> Result<PlaceDetails, PlaceDirectoryError> {
        self.wait_for(place_id).await;
        self.details
            .get(place_id)
            .cloned()
            .ok_or_else(|| PlaceDirectoryError::Status("NOT_FOUND".to_string()))
    }
}
