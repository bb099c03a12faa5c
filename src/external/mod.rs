pub mod instructions;
pub mod nominatim;
pub mod osrm;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{Coordinates, GeocodingResult, Profile, RawRoute},
    error::Error,
};

pub use nominatim::NominatimClient;
pub use osrm::OsrmClient;

#[async_trait]
pub trait Geocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeocodingResult>, Error>;

    /// Never fails on upstream problems; those come back as `None`.
    async fn reverse(&self, coordinates: Coordinates) -> Result<Option<GeocodingResult>, Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteOptions {
    pub profile: Profile,
    pub alternatives: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            profile: Profile::Driving,
            alternatives: true,
        }
    }
}

#[async_trait]
pub trait RouteProvider {
    async fn routes(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        options: RouteOptions,
    ) -> Result<Vec<RawRoute>, Error>;
}
