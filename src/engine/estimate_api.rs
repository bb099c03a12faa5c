use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{EstimateAPI, PreferenceAPI},
    entities::{Coordinates, CostEstimate, TollSegment, VehicleType},
    error::{invalid_field_error, Error},
};

#[async_trait]
impl EstimateAPI for Engine {
    #[tracing::instrument(skip(self, geometry), fields(points = geometry.len()))]
    async fn estimate(
        &self,
        distance_km: f64,
        vehicle: VehicleType,
        geometry: Vec<Coordinates>,
    ) -> Result<CostEstimate, Error> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(invalid_field_error("distance_km"));
        }
        if geometry.iter().any(|point| !point.is_valid()) {
            return Err(invalid_field_error("geometry"));
        }

        let preferences = self.find_preferences().await?;

        Ok(self.cost(distance_km, &geometry, &preferences, vehicle))
    }

    async fn toll_segments(&self) -> Result<Vec<TollSegment>, Error> {
        Ok(self.tolls.segments.clone())
    }
}
