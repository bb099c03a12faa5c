use super::{Engine, FAVORITES_CAPACITY, HISTORY_CAPACITY};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::PlaceAPI,
    db::{FAVORITES_KEY, HISTORY_KEY},
    entities::{Coordinates, Place, PlaceList},
    error::{invalid_field_error, not_found_error, Error},
};

impl Engine {
    async fn load_places(&self, key: &str) -> Result<PlaceList, Error> {
        Ok(self.store.get::<PlaceList>(key).await?.unwrap_or_default())
    }

    #[tracing::instrument(skip(self))]
    async fn save_place(
        &self,
        key: &str,
        capacity: usize,
        label: String,
        coordinates: Coordinates,
    ) -> Result<Place, Error> {
        let label = label.trim().to_string();
        if label.is_empty() {
            return Err(invalid_field_error("label"));
        }
        let place = Place::new(label, coordinates.validate()?);

        let _guard = self.places_lock.lock().await;

        let mut places = self.load_places(key).await?;
        places.push_front(place.clone(), capacity);
        self.store.put(key, &places).await?;

        Ok(place)
    }
}

#[async_trait]
impl PlaceAPI for Engine {
    async fn list_favorites(&self) -> Result<Vec<Place>, Error> {
        Ok(self.load_places(FAVORITES_KEY).await?.into_inner())
    }

    async fn add_favorite(&self, label: String, coordinates: Coordinates) -> Result<Place, Error> {
        self.save_place(FAVORITES_KEY, FAVORITES_CAPACITY, label, coordinates)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_favorite(&self, id: Uuid) -> Result<Place, Error> {
        let _guard = self.places_lock.lock().await;

        let mut favorites = self.load_places(FAVORITES_KEY).await?;
        let removed = favorites
            .remove(&id)
            .ok_or_else(|| not_found_error("favorite"))?;
        self.store.put(FAVORITES_KEY, &favorites).await?;

        Ok(removed)
    }

    async fn list_history(&self) -> Result<Vec<Place>, Error> {
        Ok(self.load_places(HISTORY_KEY).await?.into_inner())
    }

    async fn push_history(&self, label: String, coordinates: Coordinates) -> Result<Place, Error> {
        self.save_place(HISTORY_KEY, HISTORY_CAPACITY, label, coordinates)
            .await
    }
}
