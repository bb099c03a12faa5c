use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::EstimateAPI;
use crate::entities::{Coordinates, CostEstimate, TollSegment, VehicleType};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct EstimateParams {
    distance_km: f64,
    #[serde(default)]
    vehicle_type: VehicleType,
    #[serde(default)]
    geometry: Vec<Coordinates>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<EstimateParams>,
) -> Result<Json<CostEstimate>, Error> {
    let estimate = api
        .estimate(params.distance_km, params.vehicle_type, params.geometry)
        .await?;

    Ok(estimate.into())
}

pub async fn list_tolls(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<Vec<TollSegment>>, Error> {
    let segments = api.toll_segments().await?;

    Ok(segments.into())
}
