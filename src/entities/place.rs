use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub label: String,
    pub coordinates: Coordinates,
    pub saved_at: DateTime<Utc>,
}

impl Place {
    pub fn new(label: String, coordinates: Coordinates) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            coordinates,
            saved_at: Utc::now(),
        }
    }
}

/// Newest-first list of places, unique by label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceList(pub Vec<Place>);

impl PlaceList {
    /// Puts `place` at the front, dropping any older entry with the same label,
    /// then truncates to `capacity`.
    pub fn push_front(&mut self, place: Place, capacity: usize) {
        self.0.retain(|existing| existing.label != place.label);
        self.0.insert(0, place);
        self.0.truncate(capacity);
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<Place> {
        let index = self.0.iter().position(|place| &place.id == id)?;
        Some(self.0.remove(index))
    }

    pub fn into_inner(self) -> Vec<Place> {
        self.0
    }
}
