use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Coordinates, CostEstimate, GeocodingResult, Place, Preferences, PreferencesUpdate, Profile,
    RoutePlan, TollSegment, VehicleType,
};
use crate::error::Error;

#[async_trait]
pub trait GeocodingAPI {
    async fn search(&self, query: String) -> Result<Vec<GeocodingResult>, Error>;
    async fn reverse(&self, coordinates: Coordinates) -> Result<Option<GeocodingResult>, Error>;
    async fn suggest(&self, input: String) -> Result<Vec<GeocodingResult>, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn plan_routes(
        &self,
        origin: String,
        destination: String,
        vehicle: VehicleType,
        profile: Profile,
    ) -> Result<RoutePlan, Error>;
}

#[async_trait]
pub trait EstimateAPI {
    async fn estimate(
        &self,
        distance_km: f64,
        vehicle: VehicleType,
        geometry: Vec<Coordinates>,
    ) -> Result<CostEstimate, Error>;

    async fn toll_segments(&self) -> Result<Vec<TollSegment>, Error>;
}

#[async_trait]
pub trait PreferenceAPI {
    async fn find_preferences(&self) -> Result<Preferences, Error>;
    async fn update_preferences(&self, update: PreferencesUpdate) -> Result<Preferences, Error>;
}

#[async_trait]
pub trait PlaceAPI {
    async fn list_favorites(&self) -> Result<Vec<Place>, Error>;
    async fn add_favorite(&self, label: String, coordinates: Coordinates) -> Result<Place, Error>;
    async fn remove_favorite(&self, id: Uuid) -> Result<Place, Error>;
    async fn list_history(&self) -> Result<Vec<Place>, Error>;
    async fn push_history(&self, label: String, coordinates: Coordinates) -> Result<Place, Error>;
}

pub trait API: GeocodingAPI + RouteAPI + EstimateAPI + PreferenceAPI + PlaceAPI {}
