use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    entities::{Coordinates, PaymentMethod, TollSegment},
    error::Error,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TollDataset {
    #[serde(default)]
    pub segments: Vec<TollSegment>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TollCharge {
    pub amount: f64,
    pub matched: Vec<String>,
}

impl TollDataset {
    pub fn new(segments: Vec<TollSegment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    async fn read(path: &Path) -> Result<Self, Error> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Loads the dataset, falling back to an empty one if the file is missing or malformed.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Self {
        match Self::read(path).await {
            Ok(dataset) => {
                for segment in dataset.segments.iter().filter(|s| s.bbox.is_inverted()) {
                    tracing::warn!(name = %segment.name, "toll segment has min above max and never matches");
                }
                tracing::info!(segments = dataset.segments.len(), "loaded toll dataset");
                dataset
            }
            Err(err) => {
                tracing::warn!(%err, "toll dataset unavailable, using per-km toll rate");
                Self::default()
            }
        }
    }

    /// Charges every segment whose bounding box contains at least one route point, once.
    pub fn match_segments(&self, points: &[Coordinates], payment: PaymentMethod) -> TollCharge {
        let mut charge = TollCharge::default();

        for segment in &self.segments {
            if points.iter().any(|point| segment.bbox.contains(point)) {
                charge.amount += segment.price(payment);
                charge.matched.push(segment.name.clone());
            }
        }

        charge
    }
}
