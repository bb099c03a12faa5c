mod estimate;
mod location;
mod place;
mod preferences;
mod route;
mod toll;

pub use estimate::CostEstimate;
pub use location::{Coordinates, GeocodingResult};
pub use place::{Place, PlaceList};
pub use preferences::{
    CostParameters, FuelType, PaymentMethod, Preferences, PreferencesUpdate, VehicleType,
};
pub use route::{
    Congestion, CongestionLevel, PlannedRoute, Profile, RawRoute, RoutePlan, RouteResult,
    RouteStep,
};
pub use toll::{BoundingBox, TollSegment};
