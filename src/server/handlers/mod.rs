pub mod estimates;
pub mod geocoding;
pub mod places;
pub mod preferences;
pub mod routes;
