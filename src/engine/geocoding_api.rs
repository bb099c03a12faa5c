use super::Engine;

use async_trait::async_trait;

use crate::{
    api::GeocodingAPI,
    entities::{Coordinates, GeocodingResult},
    error::{invalid_field_error, Error},
};

#[async_trait]
impl GeocodingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: String) -> Result<Vec<GeocodingResult>, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Err(invalid_field_error("query"));
        }

        self.geocoder.search(query).await
    }

    #[tracing::instrument(skip(self))]
    async fn reverse(&self, coordinates: Coordinates) -> Result<Option<GeocodingResult>, Error> {
        let coordinates = coordinates.validate()?;

        self.geocoder.reverse(coordinates).await
    }

    #[tracing::instrument(skip(self))]
    async fn suggest(&self, input: String) -> Result<Vec<GeocodingResult>, Error> {
        self.suggester.suggest(&input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{engine, engine_with_geocoder};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn blank_search_is_invalid_input() {
        let engine = engine().await;
        let err = engine.search("   ".into()).await.unwrap_err();
        assert!(err.is_invalid_input_error());
    }

    #[tokio::test]
    async fn search_trims_query() {
        let engine = engine().await;
        let hits = engine.search(" Monas ".into()).await.unwrap();
        assert_eq!(hits[0].display_name, "Monas, Jakarta");
    }

    #[tokio::test]
    async fn reverse_finds_known_place_or_none() {
        let engine = engine().await;

        let hit = engine.reverse(Coordinates::new(-6.1754, 106.8272)).await.unwrap();
        assert_eq!(hit.map(|h| h.display_name), Some("Monas, Jakarta".into()));

        assert!(engine.reverse(Coordinates::new(1.0, 1.0)).await.unwrap().is_none());
        assert!(engine.reverse(Coordinates::new(1.0, 200.0)).await.is_err());
    }

    #[tokio::test]
    async fn suggestions_are_cached() {
        let (engine, geocoder) = engine_with_geocoder().await;

        assert!(engine.suggest("Mo".into()).await.unwrap().is_empty());
        engine.suggest("Monas".into()).await.unwrap();
        engine.suggest("Monas".into()).await.unwrap();

        assert_eq!(geocoder.searches.load(Ordering::SeqCst), 1);
    }
}
