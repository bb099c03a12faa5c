mod estimate_api;
mod geocoding_api;
mod place_api;
mod preference_api;
mod route_api;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    api::API,
    config::Config,
    db::Store,
    entities::{Coordinates, CostEstimate, Preferences, VehicleType},
    error::Error,
    estimator,
    external::{Geocoder, NominatimClient, OsrmClient, RouteProvider},
    suggestions::Suggester,
    tolls::TollDataset,
};

pub const FAVORITES_CAPACITY: usize = 20;
pub const HISTORY_CAPACITY: usize = 10;

pub struct Engine {
    store: Store,
    geocoder: Arc<dyn Geocoder + Send + Sync>,
    router: Arc<dyn RouteProvider + Send + Sync>,
    suggester: Suggester,
    tolls: TollDataset,
    // serialize read-modify-write of stored blobs
    places_lock: Mutex<()>,
    preferences_lock: Mutex<()>,
}

impl Engine {
    pub fn new(
        store: Store,
        geocoder: Arc<dyn Geocoder + Send + Sync>,
        router: Arc<dyn RouteProvider + Send + Sync>,
        tolls: TollDataset,
    ) -> Self {
        Self {
            store,
            suggester: Suggester::new(geocoder.clone()),
            geocoder,
            router,
            tolls,
            places_lock: Mutex::new(()),
            preferences_lock: Mutex::new(()),
        }
    }

    #[tracing::instrument(name = "Engine::from_config", skip_all)]
    pub async fn from_config(config: &Config) -> Result<Self, Error> {
        let store = Store::new(&config.database_url, config.database_max_connections).await?;

        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        let geocoder = NominatimClient::new(
            client.clone(),
            config.nominatim_base_url.clone(),
            config.user_agent.clone(),
        );
        let router = OsrmClient::new(client, config.osrm_base_url.clone());
        let tolls = TollDataset::load(&config.toll_dataset_path).await;

        Ok(Self::new(store, Arc::new(geocoder), Arc::new(router), tolls))
    }

    /// Trip cost for a route; a positive toll dataset charge replaces the per-km toll.
    fn cost(
        &self,
        distance_km: f64,
        geometry: &[Coordinates],
        preferences: &Preferences,
        vehicle: VehicleType,
    ) -> CostEstimate {
        let params = preferences.cost_parameters(vehicle);
        let base = estimator::estimate(distance_km, &params);

        if !params.use_toll || self.tolls.is_empty() || geometry.is_empty() {
            return base;
        }

        let charge = self.tolls.match_segments(geometry, params.payment_method);
        estimator::with_toll_override(base, charge.amount, charge.matched, &params)
    }
}

impl API for Engine {}
